use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure kinds surfaced at the CLI boundary. Malformed CSV rows are not
/// errors; the loader drops and counts them.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Некорректный формат времени. Используйте: yyyy-MM-dd HH:mm:ss")]
    TimestampFormat(#[source] chrono::ParseError),

    #[error("Не удалось открыть файл заказов {}: {}", path.display(), source)]
    FileAccess { path: PathBuf, source: io::Error },

    #[error("Не удалось записать в журнал {}: {}", path.display(), source)]
    LogWrite { path: PathBuf, source: io::Error },
}
