//! GetTrainingDaysInMonthHandler - Query handler for calendar views.

use std::sync::Arc;

use crate::domain::foundation::{TrainingDate, ValidationError};
use crate::domain::training_session::TrainingSessionError;
use crate::ports::TrainingSessionRepository;

/// Query for the dates trained in one calendar month.
#[derive(Debug, Clone)]
pub struct GetTrainingDaysInMonthQuery {
    pub year: i32,
    pub month: i32,
}

pub struct GetTrainingDaysInMonthHandler {
    sessions: Arc<dyn TrainingSessionRepository>,
}

impl GetTrainingDaysInMonthHandler {
    pub fn new(sessions: Arc<dyn TrainingSessionRepository>) -> Self {
        Self { sessions }
    }

    /// Dates with a session in the month, newest first.
    pub async fn handle(
        &self,
        query: GetTrainingDaysInMonthQuery,
    ) -> Result<Vec<TrainingDate>, TrainingSessionError> {
        if !(1..=9999).contains(&query.year) {
            return Err(ValidationError::out_of_range("year", 1, 9999, query.year.into()).into());
        }
        if !(1..=12).contains(&query.month) {
            return Err(ValidationError::out_of_range("month", 1, 12, query.month.into()).into());
        }

        let sessions = self
            .sessions
            .find_by_month(query.year, query.month as u32)
            .await?;
        Ok(sessions.into_iter().map(|s| s.date).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Ports;

    #[tokio::test]
    async fn returns_only_dates_in_month() {
        let ports = Ports::new();
        for date in ["2024-01-31", "2024-02-01", "2024-02-29", "2024-03-01"] {
            ports.seed_session(date).await;
        }

        let days = GetTrainingDaysInMonthHandler::new(ports.sessions.clone())
            .handle(GetTrainingDaysInMonthQuery {
                year: 2024,
                month: 2,
            })
            .await
            .unwrap();

        let days: Vec<String> = days.iter().map(ToString::to_string).collect();
        assert_eq!(days, vec!["2024-02-29", "2024-02-01"]);
    }

    #[tokio::test]
    async fn month_out_of_range_is_rejected() {
        let ports = Ports::new();
        let err = GetTrainingDaysInMonthHandler::new(ports.sessions.clone())
            .handle(GetTrainingDaysInMonthQuery {
                year: 2024,
                month: 13,
            })
            .await
            .unwrap_err();
        assert_eq!(err.field(), Some("month"));
    }
}
