use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use log::debug;

use crate::errors::DeliveryError;
use crate::orders::Order;

/// Result of one CSV load: accepted orders in file order, plus a count of
/// malformed rows dropped along the way.
#[derive(Debug)]
pub struct LoadOutcome {
    pub orders: Vec<Order>,
    pub skipped: usize,
}

/// Reads orders from `path`. The header row is consumed by the reader; each
/// remaining row must yield exactly four parsed fields or it is skipped.
/// Only failure to open the file is fatal.
pub fn load_orders(path: &Path) -> Result<LoadOutcome, DeliveryError> {
    let file = File::open(path).map_err(|source| DeliveryError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let mut rdr: csv::Reader<File> = ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);

    let mut orders: Vec<Order> = Vec::new();
    let mut skipped = 0;
    for result in rdr.deserialize() {
        match result {
            Ok(order) => orders.push(order),
            Err(err) => {
                skipped += 1;
                debug!("skipping malformed row: {}", err);
            }
        }
    }

    Ok(LoadOutcome { orders, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tempfile::NamedTempFile;

    const HEADER: &str = "OrderId,Weight,District,DeliveryTime\n";

    fn csv_file(rows: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(HEADER.as_bytes()).unwrap();
        file.write_all(rows.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_well_formed_rows_in_file_order() {
        let file = csv_file(
            "1,5.0,North,2024-01-01 10:00:00\n\
             2,3.2,South,2024-01-01 10:10:00\n",
        );

        let outcome = load_orders(file.path()).unwrap();
        assert_eq!(outcome.skipped, 0);
        assert_eq!(outcome.orders.len(), 2);
        assert_eq!(outcome.orders[0].order_id, 1);
        assert_eq!(outcome.orders[0].weight, 5.0);
        assert_eq!(outcome.orders[0].district, "North");
        assert_eq!(outcome.orders[1].order_id, 2);
    }

    #[test]
    fn skips_rows_with_unparsable_fields() {
        let file = csv_file(
            "abc,5.0,North,2024-01-01 10:00:00\n\
             2,heavy,South,2024-01-01 10:10:00\n\
             3,1.5,East,yesterday\n\
             4,2.0,West,2024-01-01 10:20:00\n",
        );

        let outcome = load_orders(file.path()).unwrap();
        assert_eq!(outcome.skipped, 3);
        assert_eq!(outcome.orders.len(), 1);
        assert_eq!(outcome.orders[0].order_id, 4);
    }

    #[test]
    fn skips_rows_with_wrong_field_count() {
        let file = csv_file(
            "1,5.0,North\n\
             2,3.2,South,2024-01-01 10:10:00,extra\n\
             3,1.0,East,2024-01-01 10:05:00\n",
        );

        let outcome = load_orders(file.path()).unwrap();
        assert_eq!(outcome.skipped, 2);
        assert_eq!(outcome.orders.len(), 1);
        assert_eq!(outcome.orders[0].order_id, 3);
    }

    #[test]
    fn negative_order_ids_are_accepted() {
        let file = csv_file("-7,2.5,North,2024-01-01 10:00:00\n");

        let outcome = load_orders(file.path()).unwrap();
        assert_eq!(outcome.skipped, 0);
        assert_eq!(outcome.orders[0].order_id, -7);
    }

    #[test]
    fn header_only_file_loads_empty() {
        let file = csv_file("");

        let outcome = load_orders(file.path()).unwrap();
        assert!(outcome.orders.is_empty());
        assert_eq!(outcome.skipped, 0);
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = load_orders(Path::new("/nonexistent/orders.csv")).unwrap_err();
        assert!(matches!(err, DeliveryError::FileAccess { .. }));
    }
}
