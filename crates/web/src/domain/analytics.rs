use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub event_type: String,
    pub vehicle_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewAnalyticsEvent {
    pub event_type: String,
    #[serde(default)]
    pub vehicle_id: Option<i64>,
}

impl NewAnalyticsEvent {
    pub fn validate(self) -> Result<Self, String> {
        if self.event_type.trim().is_empty() {
            return Err("Invalid event data provided.".into());
        }
        Ok(self)
    }
}
