//! Handler bundle shared by every resolver through the schema context.

use std::sync::Arc;

use crate::application::{
    AddExerciseHandler, CreateTrainingSessionHandler, DeleteExerciseHandler,
    DeleteTrainingSessionHandler, GetExerciseHistoryHandler, GetExerciseNamesHandler,
    GetStreakSummaryHandler, GetTrainingDaysInMonthHandler, GetTrainingSessionByDateHandler,
    GetTrainingSessionHandler, ListSessionExercisesHandler, ListTrainingSessionsHandler,
    ReorderExercisesHandler, UpdateExerciseHandler, UpdateTrainingSessionHandler,
};
use crate::domain::exercise::ExerciseOrderPolicy;
use crate::ports::{ExerciseRepository, TrainingSessionRepository, UnitOfWork};

#[derive(Clone)]
pub struct GraphqlHandlers {
    pub create_training_session: Arc<CreateTrainingSessionHandler>,
    pub update_training_session: Arc<UpdateTrainingSessionHandler>,
    pub delete_training_session: Arc<DeleteTrainingSessionHandler>,
    pub get_training_session: Arc<GetTrainingSessionHandler>,
    pub get_training_session_by_date: Arc<GetTrainingSessionByDateHandler>,
    pub list_training_sessions: Arc<ListTrainingSessionsHandler>,
    pub streak_summary: Arc<GetStreakSummaryHandler>,
    pub training_days_in_month: Arc<GetTrainingDaysInMonthHandler>,
    pub add_exercise: Arc<AddExerciseHandler>,
    pub update_exercise: Arc<UpdateExerciseHandler>,
    pub delete_exercise: Arc<DeleteExerciseHandler>,
    pub reorder_exercises: Arc<ReorderExercisesHandler>,
    pub exercise_names: Arc<GetExerciseNamesHandler>,
    pub list_session_exercises: Arc<ListSessionExercisesHandler>,
    pub exercise_history: Arc<GetExerciseHistoryHandler>,
}

impl GraphqlHandlers {
    /// Wires every handler onto one set of ports.
    pub fn new(
        sessions: Arc<dyn TrainingSessionRepository>,
        exercises: Arc<dyn ExerciseRepository>,
        unit_of_work: Arc<dyn UnitOfWork>,
        order_policy: ExerciseOrderPolicy,
    ) -> Self {
        Self {
            create_training_session: Arc::new(CreateTrainingSessionHandler::new(
                sessions.clone(),
                exercises.clone(),
                unit_of_work.clone(),
            )),
            update_training_session: Arc::new(UpdateTrainingSessionHandler::new(
                sessions.clone(),
                unit_of_work.clone(),
            )),
            delete_training_session: Arc::new(DeleteTrainingSessionHandler::new(
                sessions.clone(),
                unit_of_work.clone(),
            )),
            get_training_session: Arc::new(GetTrainingSessionHandler::new(sessions.clone())),
            get_training_session_by_date: Arc::new(GetTrainingSessionByDateHandler::new(
                sessions.clone(),
            )),
            list_training_sessions: Arc::new(ListTrainingSessionsHandler::new(sessions.clone())),
            streak_summary: Arc::new(GetStreakSummaryHandler::new(sessions.clone())),
            training_days_in_month: Arc::new(GetTrainingDaysInMonthHandler::new(sessions.clone())),
            add_exercise: Arc::new(AddExerciseHandler::new(
                sessions.clone(),
                exercises.clone(),
                unit_of_work.clone(),
                order_policy,
            )),
            update_exercise: Arc::new(UpdateExerciseHandler::new(
                exercises.clone(),
                unit_of_work.clone(),
            )),
            delete_exercise: Arc::new(DeleteExerciseHandler::new(
                exercises.clone(),
                unit_of_work.clone(),
            )),
            reorder_exercises: Arc::new(ReorderExercisesHandler::new(
                sessions,
                exercises.clone(),
                unit_of_work,
            )),
            exercise_names: Arc::new(GetExerciseNamesHandler::new(exercises.clone())),
            list_session_exercises: Arc::new(ListSessionExercisesHandler::new(exercises.clone())),
            exercise_history: Arc::new(GetExerciseHistoryHandler::new(exercises)),
        }
    }
}
