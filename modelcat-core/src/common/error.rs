use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("{message}")]
    NotFound { message: String },

    #[error("HTTP {status}: {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
