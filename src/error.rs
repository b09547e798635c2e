use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExportError>;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Server says data is not available: {url}")]
    DataUnavailable { url: String },

    #[error("Request rejected by server, perhaps the API has changed? {url}")]
    RequestRejected { url: String },

    #[error("Missing field '{field}' in page {url}")]
    Extraction { field: String, url: String },

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

impl ExportError {
    pub fn extraction(field: impl Into<String>, url: impl Into<String>) -> Self {
        ExportError::Extraction {
            field: field.into(),
            url: url.into(),
        }
    }
}
