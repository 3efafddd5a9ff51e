use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("'{raw}' is not a number")]
    InvalidNumber { raw: String },
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;
