mod analytics;
mod financing;
mod review;
mod vehicle;

pub use analytics::{AnalyticsEvent, NewAnalyticsEvent};
pub use financing::{FinancingSettings, FinancingSettingsUpdate, Quote, QuoteRequest};
pub use review::{AuthorName, NewReview, Rating, Review, ReviewSubmission, ReviewUpdate};
pub use vehicle::{
    DisplayOrder, SaveVehicle, Transmission, Vehicle, VehicleDetails, DEFAULT_VEHICLE_TYPE,
};

#[cfg(test)]
pub(crate) use vehicle::tests::details as vehicle_details_fixture;
