use chrono::{Duration, NaiveDateTime};

use crate::orders::Order;

/// Orders for `district` (compared ignoring case; districts may be Cyrillic,
/// so comparison goes through Unicode lowercasing) whose delivery time lies
/// in the inclusive window `[first_delivery_time, first_delivery_time + 30min]`.
/// Input order is preserved; an empty result is not an error.
pub fn filter_orders<'a>(
    orders: &'a [Order],
    district: &str,
    first_delivery_time: NaiveDateTime,
) -> Vec<&'a Order> {
    // Saturate at the top of the time domain rather than overflow.
    let window_end = first_delivery_time
        .checked_add_signed(Duration::minutes(30))
        .unwrap_or(NaiveDateTime::MAX);
    let wanted = district.to_lowercase();
    orders
        .iter()
        .filter(|order| {
            order.district.to_lowercase() == wanted
                && order.delivery_time >= first_delivery_time
                && order.delivery_time <= window_end
        })
        .collect()
}
