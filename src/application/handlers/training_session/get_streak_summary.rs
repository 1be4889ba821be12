//! GetStreakSummaryHandler - Query handler for training consistency stats.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::domain::training_session::{StreakSummary, TrainingSessionError};
use crate::ports::TrainingSessionRepository;

fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Handler computing the streak summary over every recorded session date.
pub struct GetStreakSummaryHandler {
    sessions: Arc<dyn TrainingSessionRepository>,
    today: fn() -> NaiveDate,
}

impl GetStreakSummaryHandler {
    pub fn new(sessions: Arc<dyn TrainingSessionRepository>) -> Self {
        Self {
            sessions,
            today: utc_today,
        }
    }

    /// Replaces the UTC clock, for deterministic tests.
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub async fn handle(&self) -> Result<StreakSummary, TrainingSessionError> {
        let dates = self.sessions.find_dates().await?;
        if dates.is_empty() {
            return Ok(StreakSummary::empty());
        }
        let summary = StreakSummary::compute(&dates, (self.today)());
        tracing::debug!(
            current = summary.current_streak,
            longest = summary.longest_streak,
            "Streak summary computed"
        );
        Ok(summary)
    }
}
