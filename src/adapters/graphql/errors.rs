//! Conversion of use-case errors into GraphQL errors.
//!
//! Every error carries `extensions.code`; validation failures also carry
//! `extensions.field`. Infrastructure details are logged, not returned.

use async_graphql::{Error, ErrorExtensions};

use crate::domain::exercise::ExerciseError;
use crate::domain::foundation::ErrorCode;
use crate::domain::training_session::TrainingSessionError;

const INTERNAL_MESSAGE: &str = "Internal server error";

fn graphql_error(code: ErrorCode, message: String, field: Option<&str>) -> Error {
    let message = match code {
        ErrorCode::DatabaseError | ErrorCode::InternalError => {
            tracing::error!(code = %code, error = %message, "Request failed");
            INTERNAL_MESSAGE.to_string()
        }
        _ => message,
    };
    let field = field.map(str::to_string);
    Error::new(message).extend_with(|_, ext| {
        ext.set("code", code.to_string());
        if let Some(field) = field {
            ext.set("field", field);
        }
    })
}

impl ErrorExtensions for TrainingSessionError {
    fn extend(&self) -> Error {
        graphql_error(self.code(), self.message(), self.field())
    }
}

impl ErrorExtensions for ExerciseError {
    fn extend(&self) -> Error {
        graphql_error(self.code(), self.message(), self.field())
    }
}

/// Maps a handler result into a resolver result.
pub(crate) trait IntoGraphqlError<T> {
    fn into_graphql(self) -> async_graphql::Result<T>;
}

impl<T, E: ErrorExtensions> IntoGraphqlError<T> for Result<T, E> {
    fn into_graphql(self) -> async_graphql::Result<T> {
        self.map_err(|e| e.extend())
    }
}
