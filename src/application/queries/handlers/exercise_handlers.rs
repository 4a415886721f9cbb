//! Exercise Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::ExerciseRepositoryPort;
use crate::application::queries::{GetExercise, ListExercises};
use crate::domain::{Exercise, ExerciseId};

/// GetExercise Handler
pub struct GetExerciseHandler {
    exercise_repo: Arc<dyn ExerciseRepositoryPort>,
}

impl GetExerciseHandler {
    pub fn new(exercise_repo: Arc<dyn ExerciseRepositoryPort>) -> Self {
        Self { exercise_repo }
    }

    pub async fn handle(&self, query: GetExercise) -> Result<Exercise, ApplicationError> {
        let exercise_id = ExerciseId::parse(&query.id)
            .ok_or_else(|| ApplicationError::not_found("Exercise", &query.id))?;

        self.exercise_repo
            .find_by_id(&exercise_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Exercise", &query.id))
    }
}

/// ListExercises Handler
pub struct ListExercisesHandler {
    exercise_repo: Arc<dyn ExerciseRepositoryPort>,
}

impl ListExercisesHandler {
    pub fn new(exercise_repo: Arc<dyn ExerciseRepositoryPort>) -> Self {
        Self { exercise_repo }
    }

    pub async fn handle(&self, _query: ListExercises) -> Result<Vec<Exercise>, ApplicationError> {
        Ok(self.exercise_repo.find_all().await?)
    }
}
