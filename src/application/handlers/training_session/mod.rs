//! Training session command and query handlers.

mod create_training_session;
mod delete_training_session;
mod get_streak_summary;
mod get_training_days_in_month;
mod get_training_session;
mod list_training_sessions;
mod update_training_session;

pub use create_training_session::{
    CreateTrainingSessionCommand, CreateTrainingSessionHandler, CreateTrainingSessionResult,
};
pub use delete_training_session::{DeleteTrainingSessionCommand, DeleteTrainingSessionHandler};
pub use get_streak_summary::GetStreakSummaryHandler;
pub use get_training_days_in_month::{
    GetTrainingDaysInMonthHandler, GetTrainingDaysInMonthQuery,
};
pub use get_training_session::{
    GetTrainingSessionByDateHandler, GetTrainingSessionByDateQuery, GetTrainingSessionHandler,
    GetTrainingSessionQuery,
};
pub use list_training_sessions::{ListTrainingSessionsHandler, ListTrainingSessionsQuery};
pub use update_training_session::{UpdateTrainingSessionCommand, UpdateTrainingSessionHandler};
