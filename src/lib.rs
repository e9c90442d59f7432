pub mod orchestrator;
pub mod config;
pub mod errors;
pub mod filter;
pub mod loader;
pub mod logger;
pub mod orders;

pub use orchestrator::run;
pub use config::Config;
pub use errors::DeliveryError;
pub use filter::filter_orders;
pub use loader::{load_orders, LoadOutcome};
pub use logger::RunLog;
pub use orders::{Order, DELIVERY_TIME_FORMAT};
