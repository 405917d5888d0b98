mod analytics;
mod auth;
mod financing;
mod health;
mod reviews;
mod settings;
mod vehicles;

pub use analytics::*;
pub use auth::*;
pub use financing::*;
pub use health::*;
pub use reviews::*;
pub use settings::*;
pub use vehicles::*;
