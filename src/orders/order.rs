use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

/// Strict timestamp format shared by the CSV `DeliveryTime` column and the
/// CLI time argument (`yyyy-MM-dd HH:mm:ss`).
pub const DELIVERY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One delivery order, immutable once parsed from its CSV row.
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    #[serde(rename = "OrderId")]
    pub order_id: i32,
    #[serde(rename = "Weight")]
    pub weight: f64,
    #[serde(rename = "District")]
    pub district: String,
    #[serde(rename = "DeliveryTime", deserialize_with = "delivery_time_from_str")]
    pub delivery_time: NaiveDateTime,
}

fn delivery_time_from_str<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, DELIVERY_TIME_FORMAT).map_err(serde::de::Error::custom)
}
