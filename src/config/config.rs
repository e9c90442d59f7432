use std::path::PathBuf;

/// File locations for one run. Defaults match the conventional working-directory
/// layout (`orders.csv` next to the binary, `delivery_log.txt` for the run log);
/// tests redirect both into temporary directories.
#[derive(Debug, Clone)]
pub struct Config {
    /// CSV input with a header row `OrderId,Weight,District,DeliveryTime`.
    pub orders_path: PathBuf,
    /// Append-only run-status log.
    pub log_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            orders_path: PathBuf::from("orders.csv"),
            log_path: PathBuf::from("delivery_log.txt"),
        }
    }
}
