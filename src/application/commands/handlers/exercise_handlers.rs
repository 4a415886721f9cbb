//! Exercise Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateExercise, DeleteExercise, UpdateExercise};
use crate::application::error::ApplicationError;
use crate::application::ports::ExerciseRepositoryPort;
use crate::domain::{validate_new, validate_patch, Exercise, ExerciseId};

// ============================================================================
// CreateExercise
// ============================================================================

/// CreateExercise Handler
pub struct CreateExerciseHandler {
    exercise_repo: Arc<dyn ExerciseRepositoryPort>,
}

impl CreateExerciseHandler {
    pub fn new(exercise_repo: Arc<dyn ExerciseRepositoryPort>) -> Self {
        Self { exercise_repo }
    }

    pub async fn handle(&self, command: CreateExercise) -> Result<Exercise, ApplicationError> {
        let new_exercise = validate_new(&command.payload)?;

        let exercise = self.exercise_repo.create(new_exercise).await?;

        tracing::info!(
            exercise_id = %exercise.id(),
            name = %exercise.name(),
            "Exercise created"
        );

        Ok(exercise)
    }
}

// ============================================================================
// UpdateExercise
// ============================================================================

/// UpdateExercise Handler
pub struct UpdateExerciseHandler {
    exercise_repo: Arc<dyn ExerciseRepositoryPort>,
}

impl UpdateExerciseHandler {
    pub fn new(exercise_repo: Arc<dyn ExerciseRepositoryPort>) -> Self {
        Self { exercise_repo }
    }

    pub async fn handle(&self, command: UpdateExercise) -> Result<Exercise, ApplicationError> {
        // 先校验载荷，再解析 ID
        let patch = validate_patch(&command.payload)?;

        let exercise_id = ExerciseId::parse(&command.id)
            .ok_or_else(|| ApplicationError::not_found("Exercise", &command.id))?;

        let exercise = self
            .exercise_repo
            .update(&exercise_id, patch)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Exercise", &command.id))?;

        tracing::info!(exercise_id = %exercise_id, "Exercise updated");

        Ok(exercise)
    }
}

// ============================================================================
// DeleteExercise
// ============================================================================

/// DeleteExercise Handler
pub struct DeleteExerciseHandler {
    exercise_repo: Arc<dyn ExerciseRepositoryPort>,
}

impl DeleteExerciseHandler {
    pub fn new(exercise_repo: Arc<dyn ExerciseRepositoryPort>) -> Self {
        Self { exercise_repo }
    }

    pub async fn handle(&self, command: DeleteExercise) -> Result<(), ApplicationError> {
        let exercise_id = ExerciseId::parse(&command.id)
            .ok_or_else(|| ApplicationError::not_found("Exercise", &command.id))?;

        if !self.exercise_repo.delete(&exercise_id).await? {
            return Err(ApplicationError::not_found("Exercise", &command.id));
        }

        tracing::info!(exercise_id = %exercise_id, "Exercise deleted");

        Ok(())
    }
}
