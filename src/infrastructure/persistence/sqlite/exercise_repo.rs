//! SQLite Exercise Repository

use async_trait::async_trait;
use sqlx::FromRow;
use uuid::Uuid;

use super::DbPool;
use crate::application::ports::{ExerciseRepositoryPort, RepositoryError};
use crate::domain::{
    Exercise, ExerciseDate, ExerciseId, ExerciseName, ExercisePatch, NewExercise, PositiveInt,
    Unit,
};

/// SQLite Exercise Repository
pub struct SqliteExerciseRepository {
    pool: DbPool,
}

impl SqliteExerciseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ExerciseRow {
    id: String,
    name: String,
    reps: i64,
    weight: i64,
    unit: String,
    date: String,
}

fn corrupt(field: &str, reason: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::SerializationError(format!("invalid {}: {}", field, reason))
}

impl TryFrom<ExerciseRow> for Exercise {
    type Error = RepositoryError;

    fn try_from(row: ExerciseRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id).map_err(|e| corrupt("id", e))?;
        let unit = Unit::from_str(&row.unit).ok_or_else(|| corrupt("unit", &row.unit))?;

        Ok(Exercise::restore(
            ExerciseId::from_uuid(id),
            ExerciseName::new(row.name).map_err(|e| corrupt("name", e))?,
            PositiveInt::new(row.reps).map_err(|e| corrupt("reps", e))?,
            PositiveInt::new(row.weight).map_err(|e| corrupt("weight", e))?,
            unit,
            ExerciseDate::new(row.date).map_err(|e| corrupt("date", e))?,
        ))
    }
}

const SELECT_COLUMNS: &str = "id, name, reps, weight, unit, date";

#[async_trait]
impl ExerciseRepositoryPort for SqliteExerciseRepository {
    async fn create(&self, exercise: NewExercise) -> Result<Exercise, RepositoryError> {
        let exercise = exercise.with_id(ExerciseId::new());

        sqlx::query(
            r#"
            INSERT INTO exercises (id, name, reps, weight, unit, date)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(exercise.id().to_string())
        .bind(exercise.name().as_str())
        .bind(exercise.reps().get())
        .bind(exercise.weight().get())
        .bind(exercise.unit().as_str())
        .bind(exercise.date().as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(exercise)
    }

    async fn find_all(&self) -> Result<Vec<Exercise>, RepositoryError> {
        let rows: Vec<ExerciseRow> = sqlx::query_as(&format!(
            "SELECT {} FROM exercises ORDER BY seq",
            SELECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Exercise::try_from).collect()
    }

    async fn find_by_id(&self, id: &ExerciseId) -> Result<Option<Exercise>, RepositoryError> {
        let row: Option<ExerciseRow> = sqlx::query_as(&format!(
            "SELECT {} FROM exercises WHERE id = ?",
            SELECT_COLUMNS
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(Exercise::try_from).transpose()
    }

    async fn update(
        &self,
        id: &ExerciseId,
        patch: ExercisePatch,
    ) -> Result<Option<Exercise>, RepositoryError> {
        // 未出现的字段绑定 NULL，由 COALESCE 保留原值
        let row: Option<ExerciseRow> = sqlx::query_as(&format!(
            r#"
            UPDATE exercises SET
                name = COALESCE(?, name),
                reps = COALESCE(?, reps),
                weight = COALESCE(?, weight),
                unit = COALESCE(?, unit),
                date = COALESCE(?, date)
            WHERE id = ?
            RETURNING {}
            "#,
            SELECT_COLUMNS
        ))
        .bind(patch.name.as_ref().map(|n| n.as_str().to_string()))
        .bind(patch.reps.map(|r| r.get()))
        .bind(patch.weight.map(|w| w.get()))
        .bind(patch.unit.map(|u| u.as_str()))
        .bind(patch.date.as_ref().map(|d| d.as_str().to_string()))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(Exercise::try_from).transpose()
    }

    async fn delete(&self, id: &ExerciseId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM exercises WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
