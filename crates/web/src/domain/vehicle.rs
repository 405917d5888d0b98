use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_VEHICLE_TYPE: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transmission {
    #[serde(rename = "Automática")]
    Automatic,
    Manual,
}

/// Everything about a vehicle an admin can edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleDetails {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
    pub mileage: i64,
    pub engine: String,
    pub transmission: Transmission,
    #[serde(rename = "fuelType")]
    pub fuel_type: String,
    #[serde(default)]
    pub vehicle_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_sold: bool,
    #[serde(default)]
    pub video_url: Option<String>,
}

impl VehicleDetails {
    pub fn validate(self) -> Result<Self, String> {
        if self.make.trim().is_empty() || self.model.trim().is_empty() {
            return Err("Vehicle make and model are required.".into());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(format!("{} is not a valid vehicle price.", self.price));
        }
        if self.mileage < 0 {
            return Err(format!("{} is not a valid mileage.", self.mileage));
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub display_order: i64,
    #[serde(flatten)]
    pub details: VehicleDetails,
}

/// Body of a save request: an `id` updates, no `id` creates.
#[derive(Debug, Deserialize)]
pub struct SaveVehicle {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(flatten)]
    pub details: VehicleDetails,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOrder {
    pub id: i64,
    pub display_order: i64,
}
