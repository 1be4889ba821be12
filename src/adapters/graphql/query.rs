//! Query root.

use async_graphql::{Context, Object, Result};

use super::errors::IntoGraphqlError;
use super::scalars::GqlDate;
use super::types::{GqlExerciseHistory, GqlStreakInfo, GqlTrainingSession, GqlTrainingSessionList};
use super::GraphqlHandlers;
use crate::application::{
    GetExerciseHistoryQuery, GetTrainingDaysInMonthQuery, GetTrainingSessionByDateQuery,
    GetTrainingSessionQuery, ListTrainingSessionsQuery,
};

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Sessions, newest date first.
    async fn training_sessions(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 20)] limit: i32,
        #[graphql(default = 0)] offset: i32,
    ) -> Result<GqlTrainingSessionList> {
        let page = ctx
            .data::<GraphqlHandlers>()?
            .list_training_sessions
            .handle(ListTrainingSessionsQuery { limit, offset })
            .await
            .into_graphql()?;
        Ok(page.into())
    }

    async fn training_session(
        &self,
        ctx: &Context<'_>,
        id: i32,
    ) -> Result<Option<GqlTrainingSession>> {
        let session = ctx
            .data::<GraphqlHandlers>()?
            .get_training_session
            .handle(GetTrainingSessionQuery { id })
            .await
            .into_graphql()?;
        Ok(session.map(GqlTrainingSession::from))
    }

    async fn training_session_by_date(
        &self,
        ctx: &Context<'_>,
        date: GqlDate,
    ) -> Result<Option<GqlTrainingSession>> {
        let session = ctx
            .data::<GraphqlHandlers>()?
            .get_training_session_by_date
            .handle(GetTrainingSessionByDateQuery { date: date.0 })
            .await
            .into_graphql()?;
        Ok(session.map(GqlTrainingSession::from))
    }

    /// Every distinct exercise name, for autocomplete.
    async fn exercise_names(&self, ctx: &Context<'_>) -> Result<Vec<String>> {
        ctx.data::<GraphqlHandlers>()?
            .exercise_names
            .handle()
            .await
            .into_graphql()
    }

    async fn streak_info(&self, ctx: &Context<'_>) -> Result<GqlStreakInfo> {
        let summary = ctx
            .data::<GraphqlHandlers>()?
            .streak_summary
            .handle()
            .await
            .into_graphql()?;
        Ok(summary.into())
    }

    /// Dates with a session in the given month, newest first.
    async fn training_days_in_month(
        &self,
        ctx: &Context<'_>,
        year: i32,
        month: i32,
    ) -> Result<Vec<GqlDate>> {
        let days = ctx
            .data::<GraphqlHandlers>()?
            .training_days_in_month
            .handle(GetTrainingDaysInMonthQuery { year, month })
            .await
            .into_graphql()?;
        Ok(days.into_iter().map(GqlDate::from).collect())
    }

    async fn exercise_history(
        &self,
        ctx: &Context<'_>,
        exercise_name: String,
        #[graphql(default = 20)] limit: i32,
        #[graphql(default = 0)] offset: i32,
    ) -> Result<GqlExerciseHistory> {
        let page = ctx
            .data::<GraphqlHandlers>()?
            .exercise_history
            .handle(GetExerciseHistoryQuery {
                exercise_name,
                limit,
                offset,
            })
            .await
            .into_graphql()?;
        Ok(page.into())
    }
}
