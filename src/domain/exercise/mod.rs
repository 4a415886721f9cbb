//! Exercise Context - 训练记录限界上下文
//!
//! 职责:
//! - Exercise 聚合
//! - 字段值对象
//! - 请求载荷校验

mod aggregate;
mod errors;
mod validator;
mod value_objects;

pub use aggregate::{Exercise, ExercisePatch, NewExercise};
pub use errors::InvalidPayload;
pub use validator::{validate_new, validate_patch, FIELD_NAMES};
pub use value_objects::{ExerciseDate, ExerciseId, ExerciseName, PositiveInt, Unit};
