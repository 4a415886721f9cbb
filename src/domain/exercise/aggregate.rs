//! Exercise Context - Aggregate Root

use super::{ExerciseDate, ExerciseId, ExerciseName, PositiveInt, Unit};

/// 待创建的训练记录（已通过校验，尚未分配 ID）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExercise {
    pub name: ExerciseName,
    pub reps: PositiveInt,
    pub weight: PositiveInt,
    pub unit: Unit,
    pub date: ExerciseDate,
}

impl NewExercise {
    /// 由存储层分配 ID 后生成聚合
    pub fn with_id(self, id: ExerciseId) -> Exercise {
        Exercise {
            id,
            name: self.name,
            reps: self.reps,
            weight: self.weight,
            unit: self.unit,
            date: self.date,
        }
    }
}

/// Exercise 聚合根
///
/// 不变量:
/// - 五个字段始终满足各自的约束
/// - id 创建后不变
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    id: ExerciseId,
    name: ExerciseName,
    reps: PositiveInt,
    weight: PositiveInt,
    unit: Unit,
    date: ExerciseDate,
}

impl Exercise {
    /// 从持久化数据重建
    pub fn restore(
        id: ExerciseId,
        name: ExerciseName,
        reps: PositiveInt,
        weight: PositiveInt,
        unit: Unit,
        date: ExerciseDate,
    ) -> Self {
        Self {
            id,
            name,
            reps,
            weight,
            unit,
            date,
        }
    }

    // Getters
    pub fn id(&self) -> &ExerciseId {
        &self.id
    }

    pub fn name(&self) -> &ExerciseName {
        &self.name
    }

    pub fn reps(&self) -> PositiveInt {
        self.reps
    }

    pub fn weight(&self) -> PositiveInt {
        self.weight
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn date(&self) -> &ExerciseDate {
        &self.date
    }
}

/// 部分更新：只覆盖出现的字段
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExercisePatch {
    pub name: Option<ExerciseName>,
    pub reps: Option<PositiveInt>,
    pub weight: Option<PositiveInt>,
    pub unit: Option<Unit>,
    pub date: Option<ExerciseDate>,
}

impl ExercisePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.reps.is_none()
            && self.weight.is_none()
            && self.unit.is_none()
            && self.date.is_none()
    }

    /// 应用到已有记录，id 不受影响
    pub fn apply(self, exercise: &mut Exercise) {
        if let Some(name) = self.name {
            exercise.name = name;
        }
        if let Some(reps) = self.reps {
            exercise.reps = reps;
        }
        if let Some(weight) = self.weight {
            exercise.weight = weight;
        }
        if let Some(unit) = self.unit {
            exercise.unit = unit;
        }
        if let Some(date) = self.date {
            exercise.date = date;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pushups() -> Exercise {
        NewExercise {
            name: ExerciseName::new("Pushups").unwrap(),
            reps: PositiveInt::new(20).unwrap(),
            weight: PositiveInt::new(45).unwrap(),
            unit: Unit::Lbs,
            date: ExerciseDate::new("11-20-25").unwrap(),
        }
        .with_id(ExerciseId::new())
    }

    #[test]
    fn test_patch_only_touches_present_fields() {
        let mut exercise = pushups();
        let original = exercise.clone();

        let patch = ExercisePatch {
            reps: Some(PositiveInt::new(30).unwrap()),
            ..Default::default()
        };
        patch.apply(&mut exercise);

        assert_eq!(exercise.reps().get(), 30);
        assert_eq!(exercise.id(), original.id());
        assert_eq!(exercise.name(), original.name());
        assert_eq!(exercise.weight(), original.weight());
        assert_eq!(exercise.unit(), original.unit());
        assert_eq!(exercise.date(), original.date());
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut exercise = pushups();
        let original = exercise.clone();
        let patch = ExercisePatch::default();
        assert!(patch.is_empty());
        patch.apply(&mut exercise);
        assert_eq!(exercise, original);
    }
}
