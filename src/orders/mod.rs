pub mod order;

pub use order::{Order, DELIVERY_TIME_FORMAT};
