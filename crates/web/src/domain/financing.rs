use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_AMOUNT: f64 = 5_000_000.0;
pub const DEFAULT_MAX_INSTALLMENTS: u32 = 12;
pub const DEFAULT_INTEREST_RATE: f64 = 0.03;

/// Limits offered by the financing calculator.
///
/// `interest_rate` is a monthly percentage: `1.5` means 1.5% per month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancingSettings {
    pub max_amount: f64,
    pub max_installments: u32,
    pub interest_rate: f64,
    pub updated_at: DateTime<Utc>,
}

impl FinancingSettings {
    pub fn defaults(now: DateTime<Utc>) -> Self {
        Self {
            max_amount: DEFAULT_MAX_AMOUNT,
            max_installments: DEFAULT_MAX_INSTALLMENTS,
            interest_rate: DEFAULT_INTEREST_RATE,
            updated_at: now,
        }
    }

    /// Monthly payment for borrowing `amount` over `term` months, after
    /// clamping both to the configured limits.
    ///
    /// A request that cannot be financed (nothing borrowed or no
    /// installments) yields an all-zero quote.
    pub fn quote(&self, request: QuoteRequest) -> Quote {
        let amount = request.amount.min(self.max_amount).max(0.0);
        let term = request.term.min(self.max_installments);
        let monthly_payment = monthly_payment(amount, term, self.interest_rate);
        if monthly_payment == 0.0 {
            return Quote {
                amount,
                term,
                monthly_payment: 0.0,
                total_payment: 0.0,
                total_interest: 0.0,
            };
        }
        let total_payment = monthly_payment * f64::from(term);
        Quote {
            amount,
            term,
            monthly_payment,
            total_payment,
            total_interest: total_payment - amount,
        }
    }
}

/// French amortization: `P·r·(1+r)^n / ((1+r)^n - 1)` with `r` the monthly
/// rate as a fraction.
fn monthly_payment(amount: f64, term: u32, rate_percent: f64) -> f64 {
    if amount <= 0.0 || term == 0 || rate_percent < 0.0 {
        return 0.0;
    }
    let rate = rate_percent / 100.0;
    let months = f64::from(term);
    if rate == 0.0 {
        return amount / months;
    }
    let growth = (1.0 + rate).powf(months);
    let denominator = growth - 1.0;
    if denominator == 0.0 {
        return 0.0;
    }
    amount * rate * growth / denominator
}

#[derive(Debug, Clone, Deserialize)]
pub struct FinancingSettingsUpdate {
    pub max_amount: f64,
    pub max_installments: u32,
    pub interest_rate: f64,
}

impl FinancingSettingsUpdate {
    pub fn validate(self) -> Result<Self, String> {
        let amounts_valid = self.max_amount.is_finite()
            && self.max_amount >= 0.0
            && self.interest_rate.is_finite()
            && self.interest_rate >= 0.0;
        if !amounts_valid || self.max_installments == 0 {
            return Err("Invalid financing settings.".into());
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct QuoteRequest {
    pub amount: f64,
    pub term: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub amount: f64,
    pub term: u32,
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}
