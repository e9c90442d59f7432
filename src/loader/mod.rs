pub mod loader;

pub use loader::{load_orders, LoadOutcome};
