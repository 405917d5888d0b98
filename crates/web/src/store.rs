//! In-memory data layer backing the public catalog and the back-office.
//!
//! Every operation takes the table lock once, so multi-row changes such as a
//! reorder or a vehicle deletion are applied atomically.
use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::domain::{
    AnalyticsEvent, DisplayOrder, FinancingSettings, FinancingSettingsUpdate, NewAnalyticsEvent,
    NewReview, Review, ReviewUpdate, SaveVehicle, Vehicle, DEFAULT_VEHICLE_TYPE,
};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{entity} with id {id} not found.")]
    NotFound { entity: &'static str, id: i64 },
    #[error("Unknown vehicle ids: {0:?}")]
    UnknownVehicles(Vec<i64>),
    #[error("{0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingsEntry {
    pub key: String,
    pub value: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}

#[derive(Default)]
struct Tables {
    vehicles: BTreeMap<i64, Vehicle>,
    reviews: BTreeMap<i64, Review>,
    events: BTreeMap<i64, AnalyticsEvent>,
    settings: HashMap<String, SettingsEntry>,
    financing: Option<FinancingSettings>,
    last_vehicle_id: i64,
    last_review_id: i64,
    last_event_id: i64,
}

#[derive(Default)]
pub struct SiteStore {
    tables: RwLock<Tables>,
}

impl SiteStore {
    /// Catalog in display order.
    pub async fn vehicles(&self) -> Vec<Vehicle> {
        let tables = self.tables.read().await;
        let mut vehicles: Vec<Vehicle> = tables.vehicles.values().cloned().collect();
        vehicles.sort_by_key(|v| (v.display_order, v.id));
        vehicles
    }

    pub async fn save_vehicle(&self, request: SaveVehicle) -> Result<Vehicle, StoreError> {
        let mut tables = self.tables.write().await;

        if let Some(id) = request.id {
            let vehicle = tables.vehicles.get_mut(&id).ok_or(StoreError::NotFound {
                entity: "Vehicle",
                id,
            })?;
            vehicle.details = request.details;
            return Ok(vehicle.clone());
        }

        let display_order = tables
            .vehicles
            .values()
            .map(|v| v.display_order)
            .max()
            .map_or(0, |max| max + 1);
        let mut details = request.details;
        if details.vehicle_type.trim().is_empty() {
            details.vehicle_type = DEFAULT_VEHICLE_TYPE.to_string();
        }

        tables.last_vehicle_id += 1;
        let vehicle = Vehicle {
            id: tables.last_vehicle_id,
            created_at: Utc::now(),
            display_order,
            details,
        };
        tables.vehicles.insert(vehicle.id, vehicle.clone());
        Ok(vehicle)
    }

    /// Delete a vehicle together with its analytics events.
    ///
    /// Returns `false` when the vehicle did not exist.
    pub async fn delete_vehicle(&self, id: i64) -> bool {
        let mut tables = self.tables.write().await;
        tables.events.retain(|_, event| event.vehicle_id != Some(id));
        tables.vehicles.remove(&id).is_some()
    }

    /// Apply new display positions. Nothing changes if any id is unknown.
    pub async fn reorder_vehicles(&self, updates: &[DisplayOrder]) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;

        let unknown: Vec<i64> = updates
            .iter()
            .map(|u| u.id)
            .filter(|id| !tables.vehicles.contains_key(id))
            .collect();
        if !unknown.is_empty() {
            return Err(StoreError::UnknownVehicles(unknown));
        }

        for update in updates {
            if let Some(vehicle) = tables.vehicles.get_mut(&update.id) {
                vehicle.display_order = update.display_order;
            }
        }
        Ok(())
    }

    /// Reviews, newest first.
    pub async fn reviews(&self, approved_only: bool) -> Vec<Review> {
        let tables = self.tables.read().await;
        let mut reviews: Vec<Review> = tables
            .reviews
            .values()
            .filter(|r| !approved_only || r.is_approved)
            .cloned()
            .collect();
        reviews.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        reviews
    }

    pub async fn insert_review(&self, review: NewReview) -> Review {
        let mut tables = self.tables.write().await;
        tables.last_review_id += 1;
        let review = Review {
            id: tables.last_review_id,
            created_at: Utc::now(),
            vehicle_id: review.vehicle_id,
            author_name: review.author_name.as_ref().to_string(),
            rating: review.rating.value(),
            comment: review.comment,
            is_approved: false,
            admin_reply: None,
        };
        tables.reviews.insert(review.id, review.clone());
        review
    }

    pub async fn update_review(&self, id: i64, update: ReviewUpdate) -> Result<Review, StoreError> {
        let mut tables = self.tables.write().await;
        let review = tables.reviews.get_mut(&id).ok_or(StoreError::NotFound {
            entity: "Review",
            id,
        })?;
        update.apply(review).map_err(StoreError::Invalid)?;
        Ok(review.clone())
    }

    pub async fn delete_review(&self, id: i64) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables
            .reviews
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound {
                entity: "Review",
                id,
            })
    }

    pub async fn record_event(&self, event: NewAnalyticsEvent) -> AnalyticsEvent {
        let mut tables = self.tables.write().await;
        tables.last_event_id += 1;
        let event = AnalyticsEvent {
            id: tables.last_event_id,
            created_at: Utc::now(),
            event_type: event.event_type,
            vehicle_id: event.vehicle_id,
        };
        tables.events.insert(event.id, event.clone());
        event
    }

    pub async fn events(&self) -> Vec<AnalyticsEvent> {
        self.tables.read().await.events.values().cloned().collect()
    }

    /// Remove every analytics event, returning how many were dropped.
    pub async fn reset_events(&self) -> usize {
        let mut tables = self.tables.write().await;
        let removed = tables.events.len();
        tables.events.clear();
        removed
    }

    pub async fn setting(&self, key: &str) -> Option<serde_json::Value> {
        let tables = self.tables.read().await;
        tables.settings.get(key).map(|entry| entry.value.clone())
    }

    pub async fn put_setting(&self, key: String, value: serde_json::Value) -> SettingsEntry {
        let mut tables = self.tables.write().await;
        let entry = SettingsEntry {
            key: key.clone(),
            value,
            updated_at: Utc::now(),
        };
        tables.settings.insert(key, entry.clone());
        entry
    }

    /// Current financing limits, seeding the defaults on first access.
    pub async fn financing_settings(&self) -> FinancingSettings {
        if let Some(settings) = self.tables.read().await.financing.clone() {
            return settings;
        }
        let mut tables = self.tables.write().await;
        tables
            .financing
            .get_or_insert_with(|| FinancingSettings::defaults(Utc::now()))
            .clone()
    }

    pub async fn update_financing_settings(
        &self,
        update: FinancingSettingsUpdate,
    ) -> FinancingSettings {
        let mut tables = self.tables.write().await;
        let settings = FinancingSettings {
            max_amount: update.max_amount,
            max_installments: update.max_installments,
            interest_rate: update.interest_rate,
            updated_at: Utc::now(),
        };
        tables.financing = Some(settings.clone());
        settings
    }
}
