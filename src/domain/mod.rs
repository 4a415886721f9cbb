//! Domain Layer - 领域层
//!
//! 限界上下文:
//! - Exercise Context: 训练记录

pub mod exercise;

pub use exercise::{
    validate_new, validate_patch, Exercise, ExerciseDate, ExerciseId, ExerciseName,
    ExercisePatch, InvalidPayload, NewExercise, PositiveInt, Unit,
};
