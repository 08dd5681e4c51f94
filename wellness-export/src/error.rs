//! Error types for plan export

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV buffer flush failed: {0}")]
    Flush(String),

    #[error("export is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("week {week} is out of range (1-{weeks})")]
    WeekOutOfRange { week: usize, weeks: usize },
}

pub type Result<T> = std::result::Result<T, ExportError>;
