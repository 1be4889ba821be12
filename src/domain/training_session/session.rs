//! Training session record and its write inputs.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{FieldUpdate, Timestamp, TrainingDate, TrainingSessionId};

/// One day's training, as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSession {
    pub id: TrainingSessionId,
    pub date: TrainingDate,
    pub body_weight: Option<f64>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Validated values for inserting a session.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTrainingSession {
    pub date: TrainingDate,
    pub body_weight: Option<f64>,
    pub notes: Option<String>,
}

/// Validated partial update of a session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrainingSessionChanges {
    pub date: Option<TrainingDate>,
    pub body_weight: FieldUpdate<f64>,
    pub notes: FieldUpdate<String>,
}

impl TrainingSessionChanges {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && !self.body_weight.is_supplied() && !self.notes.is_supplied()
    }

    /// Applies the changes to an in-memory copy of a session.
    pub fn apply_to(self, session: &mut TrainingSession) {
        if let Some(date) = self.date {
            session.date = date;
        }
        session.body_weight = self.body_weight.apply(session.body_weight);
        session.notes = self.notes.apply(session.notes.take());
    }
}
