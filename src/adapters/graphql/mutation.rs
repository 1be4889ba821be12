//! Mutation root.

use async_graphql::{Context, Object, Result};

use super::errors::IntoGraphqlError;
use super::inputs::{
    GqlCreateTrainingSessionInput, GqlExerciseInput, GqlExerciseOrderInput,
    GqlUpdateExerciseInput, GqlUpdateTrainingSessionInput,
};
use super::types::{GqlDeleteResult, GqlExercise, GqlTrainingSession};
use super::GraphqlHandlers;
use crate::application::{
    AddExerciseCommand, CreateTrainingSessionCommand, DeleteExerciseCommand,
    DeleteTrainingSessionCommand, ReorderExercisesCommand, UpdateExerciseCommand,
    UpdateTrainingSessionCommand,
};

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Records a session and its exercises in one step.
    async fn create_training_session(
        &self,
        ctx: &Context<'_>,
        input: GqlCreateTrainingSessionInput,
    ) -> Result<GqlTrainingSession> {
        let cmd = CreateTrainingSessionCommand {
            date: input.date.0,
            body_weight: input.body_weight,
            notes: input.notes,
            exercises: input.exercises.into_iter().map(Into::into).collect(),
        };
        let created = ctx
            .data::<GraphqlHandlers>()?
            .create_training_session
            .handle(cmd)
            .await
            .into_graphql()?;
        Ok(GqlTrainingSession::with_exercises(created.session, created.exercises))
    }

    async fn update_training_session(
        &self,
        ctx: &Context<'_>,
        id: i32,
        input: GqlUpdateTrainingSessionInput,
    ) -> Result<GqlTrainingSession> {
        let (date, body_weight, notes) = input.into_parts();
        let session = ctx
            .data::<GraphqlHandlers>()?
            .update_training_session
            .handle(UpdateTrainingSessionCommand {
                id,
                date,
                body_weight,
                notes,
            })
            .await
            .into_graphql()?;
        Ok(session.into())
    }

    async fn delete_training_session(
        &self,
        ctx: &Context<'_>,
        id: i32,
    ) -> Result<GqlDeleteResult> {
        let outcome = ctx
            .data::<GraphqlHandlers>()?
            .delete_training_session
            .handle(DeleteTrainingSessionCommand { id })
            .await
            .into_graphql()?;
        Ok(GqlDeleteResult::from_outcome(outcome, |id| id.value()))
    }

    async fn add_exercise(
        &self,
        ctx: &Context<'_>,
        training_session_id: i32,
        input: GqlExerciseInput,
    ) -> Result<GqlExercise> {
        let exercise = ctx
            .data::<GraphqlHandlers>()?
            .add_exercise
            .handle(AddExerciseCommand {
                training_session_id,
                exercise: input.into(),
            })
            .await
            .into_graphql()?;
        Ok(exercise.into())
    }

    async fn update_exercise(
        &self,
        ctx: &Context<'_>,
        id: i32,
        input: GqlUpdateExerciseInput,
    ) -> Result<GqlExercise> {
        let exercise = ctx
            .data::<GraphqlHandlers>()?
            .update_exercise
            .handle(UpdateExerciseCommand {
                id,
                patch: input.into(),
            })
            .await
            .into_graphql()?;
        Ok(exercise.into())
    }

    async fn delete_exercise(&self, ctx: &Context<'_>, id: i32) -> Result<GqlDeleteResult> {
        let outcome = ctx
            .data::<GraphqlHandlers>()?
            .delete_exercise
            .handle(DeleteExerciseCommand { id })
            .await
            .into_graphql()?;
        Ok(GqlDeleteResult::from_outcome(outcome, |id| id.value()))
    }

    /// Sets new positions and returns the session's exercises in order.
    async fn reorder_exercises(
        &self,
        ctx: &Context<'_>,
        training_session_id: i32,
        exercises: Vec<GqlExerciseOrderInput>,
    ) -> Result<Vec<GqlExercise>> {
        let reordered = ctx
            .data::<GraphqlHandlers>()?
            .reorder_exercises
            .handle(ReorderExercisesCommand {
                training_session_id,
                exercises: exercises.into_iter().map(Into::into).collect(),
            })
            .await
            .into_graphql()?;
        Ok(reordered.into_iter().map(GqlExercise::from).collect())
    }
}
