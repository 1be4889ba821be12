//! AddExerciseHandler - Command handler for adding an exercise to an existing session.

use std::sync::Arc;

use crate::application::finish;
use crate::domain::exercise::{Exercise, ExerciseError, ExerciseInput, ExerciseOrderPolicy, NewExercise};
use crate::domain::foundation::TrainingSessionId;
use crate::ports::{ExerciseRepository, TrainingSessionRepository, TransactionHandle, UnitOfWork};

/// Command to add one exercise.
#[derive(Debug, Clone)]
pub struct AddExerciseCommand {
    pub training_session_id: i32,
    pub exercise: ExerciseInput,
}

/// Handler for adding exercises.
pub struct AddExerciseHandler {
    sessions: Arc<dyn TrainingSessionRepository>,
    exercises: Arc<dyn ExerciseRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
    order_policy: ExerciseOrderPolicy,
}

impl AddExerciseHandler {
    pub fn new(
        sessions: Arc<dyn TrainingSessionRepository>,
        exercises: Arc<dyn ExerciseRepository>,
        unit_of_work: Arc<dyn UnitOfWork>,
        order_policy: ExerciseOrderPolicy,
    ) -> Self {
        Self {
            sessions,
            exercises,
            unit_of_work,
            order_policy,
        }
    }

    pub async fn handle(&self, cmd: AddExerciseCommand) -> Result<Exercise, ExerciseError> {
        let session_id = TrainingSessionId::parse("trainingSessionId", cmd.training_session_id)?;
        cmd.exercise.check()?;

        let default_order = match self.order_policy {
            ExerciseOrderPolicy::First => self.order_policy.next_order(&[]),
            ExerciseOrderPolicy::Append => {
                let existing: Vec<i32> = self
                    .exercises
                    .find_by_training_session_id(session_id)
                    .await?
                    .iter()
                    .map(|e| e.order)
                    .collect();
                self.order_policy.next_order(&existing)
            }
        };
        let new_exercise = cmd.exercise.into_new_exercise(session_id, default_order);

        let mut tx = self.unit_of_work.begin().await?;
        let outcome = self.insert(&new_exercise, tx.as_mut()).await;
        let exercise = finish(tx, outcome).await?;

        tracing::info!(
            exercise_id = %exercise.id,
            training_session_id = %session_id,
            order = exercise.order,
            "Exercise added"
        );
        Ok(exercise)
    }

    async fn insert(
        &self,
        new_exercise: &NewExercise,
        tx: &mut dyn TransactionHandle,
    ) -> Result<Exercise, ExerciseError> {
        let session_id = new_exercise.training_session_id;
        if !self.sessions.exists(session_id, Some(&mut *tx)).await? {
            return Err(ExerciseError::session_not_found(session_id));
        }
        Ok(self.exercises.create(new_exercise, Some(&mut *tx)).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{exercise_input, Ports};
    use crate::domain::foundation::ErrorCode;

    fn handler(ports: &Ports, policy: ExerciseOrderPolicy) -> AddExerciseHandler {
        AddExerciseHandler::new(
            ports.sessions.clone(),
            ports.exercises.clone(),
            ports.uow.clone(),
            policy,
        )
    }

    #[tokio::test]
    async fn first_policy_defaults_order_to_one() {
        let ports = Ports::new();
        let session = ports.seed_session("2024-01-15").await;
        ports.seed_exercise(&session, "squat", 1).await;
        ports.seed_exercise(&session, "deadlift", 2).await;

        let added = handler(&ports, ExerciseOrderPolicy::First)
            .handle(AddExerciseCommand {
                training_session_id: session.id.value(),
                exercise: exercise_input("plank"),
            })
            .await
            .unwrap();

        assert_eq!(added.order, 1);
        assert_eq!(added.training_session_id, session.id);
        assert_eq!(ports.store.exercise_count(), 3);
    }

    #[tokio::test]
    async fn append_policy_goes_after_last_exercise() {
        let ports = Ports::new();
        let session = ports.seed_session("2024-01-15").await;
        ports.seed_exercise(&session, "squat", 1).await;
        ports.seed_exercise(&session, "deadlift", 4).await;

        let added = handler(&ports, ExerciseOrderPolicy::Append)
            .handle(AddExerciseCommand {
                training_session_id: session.id.value(),
                exercise: exercise_input("plank"),
            })
            .await
            .unwrap();
        assert_eq!(added.order, 5);
    }

    #[tokio::test]
    async fn explicit_order_ignores_policy() {
        let ports = Ports::new();
        let session = ports.seed_session("2024-01-15").await;

        let added = handler(&ports, ExerciseOrderPolicy::Append)
            .handle(AddExerciseCommand {
                training_session_id: session.id.value(),
                exercise: ExerciseInput {
                    order: Some(3),
                    ..exercise_input("plank")
                },
            })
            .await
            .unwrap();
        assert_eq!(added.order, 3);
    }

    #[tokio::test]
    async fn missing_session_is_reported() {
        let ports = Ports::new();
        let err = handler(&ports, ExerciseOrderPolicy::First)
            .handle(AddExerciseCommand {
                training_session_id: 77,
                exercise: exercise_input("plank"),
            })
            .await
            .unwrap_err();

        assert_eq!(err, ExerciseError::session_not_found(TrainingSessionId::from_i32(77)));
        assert_eq!(err.code(), ErrorCode::TrainingSessionNotFound);
        assert_eq!(ports.store.exercise_count(), 0);
    }

    #[tokio::test]
    async fn duration_exercise_is_accepted() {
        let ports = Ports::new();
        let session = ports.seed_session("2024-01-15").await;

        let added = handler(&ports, ExerciseOrderPolicy::First)
            .handle(AddExerciseCommand {
                training_session_id: session.id.value(),
                exercise: ExerciseInput {
                    reps: None,
                    duration_seconds: Some(60),
                    ..exercise_input("plank")
                },
            })
            .await
            .unwrap();
        assert_eq!(added.duration_seconds, Some(60));
        assert_eq!(added.reps, None);
    }

    #[tokio::test]
    async fn invalid_exercise_never_reaches_storage() {
        let ports = Ports::new();
        let session = ports.seed_session("2024-01-15").await;

        let err = handler(&ports, ExerciseOrderPolicy::First)
            .handle(AddExerciseCommand {
                training_session_id: session.id.value(),
                exercise: ExerciseInput {
                    sets: 0,
                    ..exercise_input("plank")
                },
            })
            .await
            .unwrap_err();
        assert_eq!(err.field(), Some("sets"));
        assert_eq!(ports.store.exercise_count(), 0);
    }
}
