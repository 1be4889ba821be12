//! Training-session-specific error types.

use crate::domain::foundation::{
    DomainError, ErrorCode, TrainingDate, TrainingSessionId, ValidationError,
};

/// Errors returned by training session use cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrainingSessionError {
    /// Session was not found.
    NotFound(TrainingSessionId),
    /// Another session already exists for the date.
    DuplicateDate(TrainingDate),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Storage reported that nothing was changed.
    OperationFailed(String),
    /// Storage rejected the write (unique, foreign key or check constraint).
    ConstraintViolation(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl TrainingSessionError {
    pub fn not_found(id: TrainingSessionId) -> Self {
        TrainingSessionError::NotFound(id)
    }
    pub fn duplicate_date(date: TrainingDate) -> Self {
        TrainingSessionError::DuplicateDate(date)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        TrainingSessionError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        TrainingSessionError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            TrainingSessionError::NotFound(_) => ErrorCode::TrainingSessionNotFound,
            TrainingSessionError::DuplicateDate(_) => ErrorCode::ConstraintViolation,
            TrainingSessionError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            TrainingSessionError::OperationFailed(_) => ErrorCode::OperationFailed,
            TrainingSessionError::ConstraintViolation(_) => ErrorCode::ConstraintViolation,
            TrainingSessionError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            TrainingSessionError::NotFound(id) => format!("Training session not found: {}", id),
            TrainingSessionError::DuplicateDate(date) => {
                format!("A training session already exists for {}", date)
            }
            TrainingSessionError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            TrainingSessionError::OperationFailed(msg) => format!("Operation failed: {}", msg),
            TrainingSessionError::ConstraintViolation(msg) => {
                format!("Constraint violation: {}", msg)
            }
            TrainingSessionError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
    /// Offending input field, for validation failures.
    pub fn field(&self) -> Option<&str> {
        match self {
            TrainingSessionError::ValidationFailed { field, .. } => Some(field),
            TrainingSessionError::DuplicateDate(_) => Some("date"),
            _ => None,
        }
    }
}

impl std::fmt::Display for TrainingSessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for TrainingSessionError {}

impl From<ValidationError> for TrainingSessionError {
    fn from(err: ValidationError) -> Self {
        TrainingSessionError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for TrainingSessionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => TrainingSessionError::ValidationFailed {
                field: err.detail("field").unwrap_or("unknown").to_string(),
                message: err.message,
            },
            ErrorCode::ConstraintViolation => TrainingSessionError::ConstraintViolation(err.message),
            ErrorCode::OperationFailed
            | ErrorCode::TrainingSessionNotFound
            | ErrorCode::ExerciseNotFound => TrainingSessionError::OperationFailed(err.message),
            ErrorCode::DatabaseError | ErrorCode::InternalError => {
                TrainingSessionError::Infrastructure(err.to_string())
            }
        }
    }
}
