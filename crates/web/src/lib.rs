pub mod authentication;
pub mod configuration;
pub mod domain;
pub mod error;
pub mod routes;
pub mod startup;
pub mod store;
pub mod telemetry;
