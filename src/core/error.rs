use thiserror::Error;

use crate::api::ApiError;

/// Centralized error types for the application
///
/// Errors from the API client, configuration and logger setup all convert
/// into this enum. Controller operations never return it: they surface
/// failures on the page instead.
///
/// # Example
///
/// ```no_run
/// use course_miniapp::core::error::AppError;
///
/// fn handle_error(err: AppError) {
///     eprintln!("Error: {}", err);
/// }
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// Backend API errors
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing errors
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Logger initialisation errors
    #[error("Logger error: {0}")]
    Logger(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
