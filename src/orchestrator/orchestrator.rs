use chrono::NaiveDateTime;
use log::info;

use crate::config::Config;
use crate::errors::DeliveryError;
use crate::filter::filter_orders;
use crate::loader::load_orders;
use crate::logger::RunLog;
use crate::orders::DELIVERY_TIME_FORMAT;

/// Load → filter → report for one already-validated invocation. Matched
/// orders go to stdout only; the run log records the start line and the
/// no-results case.
pub fn run(
    config: &Config,
    run_log: &RunLog,
    district: &str,
    first_delivery_time: NaiveDateTime,
) -> Result<(), DeliveryError> {
    println!(
        "Фильтруем заказы для района: {} и времени: {}",
        district,
        first_delivery_time.format("%d.%m.%Y %H:%M:%S")
    );
    run_log.info(&format!(
        "Запущена фильтрация для района: {} и времени: {}",
        district,
        first_delivery_time.format(DELIVERY_TIME_FORMAT)
    ))?;

    let outcome = load_orders(&config.orders_path)?;
    info!(
        "loaded {} orders from {} ({} malformed rows skipped)",
        outcome.orders.len(),
        config.orders_path.display(),
        outcome.skipped
    );

    let matched = filter_orders(&outcome.orders, district, first_delivery_time);
    if matched.is_empty() {
        println!("Нет доступных заказов для указанного района и времени.");
        run_log.info("Нет доступных заказов для указанного района и времени.")?;
    } else {
        for order in matched {
            println!(
                "Заказ ID: {}, Вес: {}, Район: {}, Время доставки: {}",
                order.order_id,
                order.weight,
                order.district,
                order.delivery_time.format(DELIVERY_TIME_FORMAT)
            );
        }
    }

    Ok(())
}
