//! Unified application error type.
//! Every module (config, core, sheet, cli) returns AppError so failures are
//! reported the same way; the domain errors of the submission workflow are
//! kept as their own enums and wrapped here.

use crate::models::field::Field;
use std::io;
use thiserror::Error;

// ---------------------------
// Login gate
// ---------------------------
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Login rejected: identifier is not on the allow-list")]
    InvalidCredential,

    #[error("Login required before submitting a job")]
    NotAuthenticated,
}

// ---------------------------
// Form validation (collected, never fail-fast)
// ---------------------------
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0}: must be a whole number greater than or equal to 0")]
    OutOfRange(Field),

    #[error("{0}: date must be between 2000-01-01 and today")]
    DateOutOfRange(Field),

    #[error("{0}: not a valid date (expected YYYY-MM-DD)")]
    InvalidDate(Field),

    #[error("{0}: not one of the configured personnel options")]
    InvalidOption(Field),

    #[error("{later}: must not be earlier than {earlier}")]
    DateOrder { earlier: Field, later: Field },
}

impl ValidationError {
    /// The field the violation is reported against.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::OutOfRange(f)
            | ValidationError::DateOutOfRange(f)
            | ValidationError::InvalidDate(f)
            | ValidationError::InvalidOption(f) => *f,
            ValidationError::DateOrder { later, .. } => *later,
        }
    }
}

// ---------------------------
// Row-store append
// ---------------------------
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppendError {
    #[error("Network failure while appending row: {0}")]
    NetworkFailure(String),

    #[error("Row store rejected the service credential: {0}")]
    AuthFailure(String),

    #[error("Row store timed out: {0}")]
    Timeout(String),

    #[error("Sheet columns do not match the configured schema: {0}")]
    SchemaMismatch(String),

    #[error("Row store error: {0}")]
    Unknown(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Workflow errors
    // ---------------------------
    #[error("{0}")]
    Auth(#[from] AuthError),

    #[error("Submission rejected: {} field(s) failed validation", .0.len())]
    Validation(Vec<ValidationError>),

    #[error("{0}")]
    Append(#[from] AppendError),

    #[error("Input cancelled: {0}")]
    Cancelled(String),
}

impl From<Vec<ValidationError>> for AppError {
    fn from(errors: Vec<ValidationError>) -> Self {
        AppError::Validation(errors)
    }
}

pub type AppResult<T> = Result<T, AppError>;
