//! Data Transfer Objects

use serde::Serialize;

use crate::domain::{Exercise, Unit};

/// 训练记录响应
///
/// `{ id, name, reps, weight, unit, date }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseResponse {
    pub id: String,
    pub name: String,
    pub reps: i64,
    pub weight: i64,
    pub unit: Unit,
    pub date: String,
}

impl From<Exercise> for ExerciseResponse {
    fn from(exercise: Exercise) -> Self {
        Self {
            id: exercise.id().to_string(),
            name: exercise.name().as_str().to_string(),
            reps: exercise.reps().get(),
            weight: exercise.weight().get(),
            unit: exercise.unit(),
            date: exercise.date().as_str().to_string(),
        }
    }
}
