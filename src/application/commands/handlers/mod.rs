//! Command Handlers 实现

mod exercise_handlers;

pub use exercise_handlers::*;
