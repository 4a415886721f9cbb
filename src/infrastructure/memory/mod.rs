//! In-Memory Implementations - 内存实现

mod exercise_repo;

pub use exercise_repo::InMemoryExerciseRepository;
