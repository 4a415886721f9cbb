//! In-Memory Exercise Repository Implementation

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::application::ports::{ExerciseRepositoryPort, RepositoryError};
use crate::domain::{Exercise, ExerciseId, ExercisePatch, NewExercise};

/// 内存仓储条目：带插入序号，用于稳定的列表顺序
#[derive(Debug, Clone)]
struct Entry {
    seq: u64,
    exercise: Exercise,
}

/// 内存训练记录仓储
///
/// 用于测试替身以及 `database.backend = "memory"` 的临时运行模式
pub struct InMemoryExerciseRepository {
    exercises: DashMap<ExerciseId, Entry>,
    next_seq: AtomicU64,
}

impl InMemoryExerciseRepository {
    pub fn new() -> Self {
        Self {
            exercises: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for InMemoryExerciseRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExerciseRepositoryPort for InMemoryExerciseRepository {
    async fn create(&self, exercise: NewExercise) -> Result<Exercise, RepositoryError> {
        let id = ExerciseId::new();
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let exercise = exercise.with_id(id);

        self.exercises.insert(
            id,
            Entry {
                seq,
                exercise: exercise.clone(),
            },
        );
        tracing::debug!(exercise_id = %id, "Exercise stored in memory");

        Ok(exercise)
    }

    async fn find_all(&self) -> Result<Vec<Exercise>, RepositoryError> {
        let mut entries: Vec<Entry> = self
            .exercises
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        entries.sort_by_key(|entry| entry.seq);

        Ok(entries.into_iter().map(|entry| entry.exercise).collect())
    }

    async fn find_by_id(&self, id: &ExerciseId) -> Result<Option<Exercise>, RepositoryError> {
        Ok(self.exercises.get(id).map(|entry| entry.exercise.clone()))
    }

    async fn update(
        &self,
        id: &ExerciseId,
        patch: ExercisePatch,
    ) -> Result<Option<Exercise>, RepositoryError> {
        let Some(mut entry) = self.exercises.get_mut(id) else {
            return Ok(None);
        };
        patch.apply(&mut entry.exercise);

        Ok(Some(entry.exercise.clone()))
    }

    async fn delete(&self, id: &ExerciseId) -> Result<bool, RepositoryError> {
        Ok(self.exercises.remove(id).is_some())
    }
}
