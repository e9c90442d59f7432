pub mod error;

pub use error::DeliveryError;
