//! Exercise-specific error types.

use crate::domain::foundation::{
    DomainError, ErrorCode, ExerciseId, TrainingSessionId, ValidationError,
};

/// Errors returned by exercise use cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExerciseError {
    /// Exercise was not found.
    NotFound(ExerciseId),
    /// Owning training session was not found.
    SessionNotFound(TrainingSessionId),
    /// Exercise exists but belongs to another session.
    NotInSession {
        exercise_id: ExerciseId,
        training_session_id: TrainingSessionId,
    },
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Storage reported that nothing was changed.
    OperationFailed(String),
    /// Storage rejected the write (unique, foreign key or check constraint).
    ConstraintViolation(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl ExerciseError {
    pub fn not_found(id: ExerciseId) -> Self {
        ExerciseError::NotFound(id)
    }
    pub fn session_not_found(id: TrainingSessionId) -> Self {
        ExerciseError::SessionNotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ExerciseError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        ExerciseError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            ExerciseError::NotFound(_) => ErrorCode::ExerciseNotFound,
            ExerciseError::SessionNotFound(_) => ErrorCode::TrainingSessionNotFound,
            ExerciseError::NotInSession { .. } => ErrorCode::ValidationFailed,
            ExerciseError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ExerciseError::OperationFailed(_) => ErrorCode::OperationFailed,
            ExerciseError::ConstraintViolation(_) => ErrorCode::ConstraintViolation,
            ExerciseError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            ExerciseError::NotFound(id) => format!("Exercise not found: {}", id),
            ExerciseError::SessionNotFound(id) => format!("Training session not found: {}", id),
            ExerciseError::NotInSession {
                exercise_id,
                training_session_id,
            } => format!(
                "Exercise {} does not belong to training session {}",
                exercise_id, training_session_id
            ),
            ExerciseError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ExerciseError::OperationFailed(msg) => format!("Operation failed: {}", msg),
            ExerciseError::ConstraintViolation(msg) => format!("Constraint violation: {}", msg),
            ExerciseError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
    pub fn field(&self) -> Option<&str> {
        match self {
            ExerciseError::ValidationFailed { field, .. } => Some(field),
            ExerciseError::NotInSession { .. } => Some("exercises"),
            _ => None,
        }
    }
}

impl std::fmt::Display for ExerciseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ExerciseError {}

impl From<ValidationError> for ExerciseError {
    fn from(err: ValidationError) -> Self {
        ExerciseError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for ExerciseError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => ExerciseError::ValidationFailed {
                field: err.detail("field").unwrap_or("unknown").to_string(),
                message: err.message,
            },
            ErrorCode::ConstraintViolation => ExerciseError::ConstraintViolation(err.message),
            ErrorCode::OperationFailed
            | ErrorCode::TrainingSessionNotFound
            | ErrorCode::ExerciseNotFound => ExerciseError::OperationFailed(err.message),
            ErrorCode::DatabaseError | ErrorCode::InternalError => {
                ExerciseError::Infrastructure(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_not_found_uses_session_code() {
        let err = ExerciseError::session_not_found(TrainingSessionId::from_i32(4));
        assert_eq!(err.code(), ErrorCode::TrainingSessionNotFound);
        assert_eq!(err.to_string(), "Training session not found: 4");
    }

    #[test]
    fn not_found_has_exercise_code() {
        let err = ExerciseError::not_found(ExerciseId::from_i32(2));
        assert_eq!(err.code(), ErrorCode::ExerciseNotFound);
    }

    #[test]
    fn rule_violation_keeps_field() {
        let err: ExerciseError =
            ValidationError::rule("durationSeconds", "Both keys must be supplied").into();
        assert_eq!(err.field(), Some("durationSeconds"));
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[test]
    fn check_constraint_maps_to_constraint_violation() {
        let err: ExerciseError =
            DomainError::new(ErrorCode::ConstraintViolation, "chk_exercises_sets_positive").into();
        assert_eq!(err.code(), ErrorCode::ConstraintViolation);
    }
}
