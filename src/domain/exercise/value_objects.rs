//! Exercise Context - Value Objects

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use uuid::Uuid;

/// 训练记录唯一标识
///
/// 由存储层在创建时分配，之后不可变
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExerciseId(Uuid);

impl ExerciseId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// 解析外部传入的标识，格式错误时返回 None
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw).ok().map(Self)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ExerciseId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 训练项目名称
///
/// 只能经由 `new` 构造，保证非空
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseName(String);

impl ExerciseName {
    pub fn new(name: impl Into<String>) -> Result<Self, &'static str> {
        let name = name.into();
        if name.is_empty() {
            return Err("名称不能为空");
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ExerciseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 正整数（次数、重量）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PositiveInt(i64);

impl PositiveInt {
    pub fn new(value: i64) -> Result<Self, &'static str> {
        if value <= 0 {
            return Err("必须为大于 0 的整数");
        }
        Ok(Self(value))
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for PositiveInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 重量单位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Kgs,
    Lbs,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Kgs => "kgs",
            Unit::Lbs => "lbs",
        }
    }

    /// 大小写敏感，只接受 "kgs" / "lbs"
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "kgs" => Some(Unit::Kgs),
            "lbs" => Some(Unit::Lbs),
            _ => None,
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // 只接受 ASCII 数字，Rust 的 \d 默认匹配 Unicode 数字
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]{2}-[0-9]{2}-[0-9]{2}$").expect("valid date pattern"))
}

/// 训练日期，格式 MM-DD-YY
///
/// 只检查形状，不检查日历有效性（"99-99-99" 合法）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseDate(String);

impl ExerciseDate {
    pub fn new(date: impl Into<String>) -> Result<Self, &'static str> {
        let date = date.into();
        if !date_pattern().is_match(&date) {
            return Err("日期格式必须为 MM-DD-YY");
        }
        Ok(Self(date))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ExerciseDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
