pub mod filter;

pub use filter::filter_orders;
