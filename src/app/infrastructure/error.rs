use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Launch error: {0}")]
    Launch(String),

    #[error("No document is selected")]
    NoDocument,
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
