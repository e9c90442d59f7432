use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::errors::DeliveryError;

const LOG_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Run-status log: appends one `<timestamp>: <LEVEL>: <message>` line per
/// event, creating the file if absent. Opened and closed per call, no
/// rotation and no locking.
pub struct RunLog {
    path: PathBuf,
}

impl RunLog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn info(&self, message: &str) -> Result<(), DeliveryError> {
        self.append("INFO", message)
    }

    pub fn error(&self, message: &str) -> Result<(), DeliveryError> {
        self.append("ERROR", message)
    }

    fn append(&self, level: &str, message: &str) -> Result<(), DeliveryError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| DeliveryError::LogWrite {
                path: self.path.clone(),
                source,
            })?;
        writeln!(
            file,
            "{}: {}: {}",
            Local::now().format(LOG_TIME_FORMAT),
            level,
            message
        )
        .map_err(|source| DeliveryError::LogWrite {
            path: self.path.clone(),
            source,
        })
    }
}
