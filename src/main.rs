mod orchestrator;
mod config;
mod errors;
mod filter;
mod loader;
mod logger;
mod orders;

use::std::env;
use::std::process;

use chrono::NaiveDateTime;
use env_logger;
use log::info;

use config::Config;
use errors::DeliveryError;
use logger::RunLog;
use orchestrator::run;
use orders::DELIVERY_TIME_FORMAT;

fn main() {
    // Initialize logger (respect RUST_LOG env var if set)
    env_logger::init();

    let config = Config::default();
    let run_log = RunLog::new(&config.log_path);

    // Collect command-line arguments - expecting district and window start time
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        report_error(&run_log, "Необходимо указать район и время доставки.");
        eprintln!("Usage: {} <district> \"<yyyy-MM-dd HH:mm:ss>\"", args[0]);
        process::exit(1);
    }
    let district = &args[1];

    let first_delivery_time = match NaiveDateTime::parse_from_str(&args[2], DELIVERY_TIME_FORMAT) {
        Ok(parsed) => parsed,
        Err(err) => {
            let error = DeliveryError::TimestampFormat(err);
            report_error(&run_log, &error.to_string());
            eprintln!("{}", error);
            process::exit(1);
        }
    };

    info!("starting delivery filter for district: {}", district);

    if let Err(e) = run(&config, &run_log, district, first_delivery_time) {
        report_error(&run_log, &e.to_string());
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Records an ERROR line in the run log; a failed log write is itself
/// reported to stderr rather than dropped.
fn report_error(run_log: &RunLog, message: &str) {
    if let Err(log_err) = run_log.error(message) {
        eprintln!("{}", log_err);
    }
}
