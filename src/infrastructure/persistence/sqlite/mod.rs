//! SQLite Persistence - SQLite 数据库持久化实现

mod database;
mod exercise_repo;

pub use database::*;
pub use exercise_repo::*;
