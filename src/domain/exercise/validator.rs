//! Exercise Context - Payload Validator
//!
//! 纯函数，在请求到达存储层之前判断载荷是否合法。
//! 任意一条规则失败即整体无效，不返回具体字段信息。

use serde_json::{Map, Value};

use super::{
    ExerciseDate, ExerciseName, ExercisePatch, InvalidPayload, NewExercise, PositiveInt, Unit,
};

/// 合法字段集合
pub const FIELD_NAMES: [&str; 5] = ["name", "reps", "weight", "unit", "date"];

/// 校验创建载荷
///
/// 规则（按顺序，全部通过才有效）:
/// 1. 所有 key 必须属于 FIELD_NAMES
/// 2. key 数量恰好为 5
/// 3. name 为非空字符串
/// 4. reps 为大于 0 的整数
/// 5. weight 为大于 0 的整数
/// 6. unit 为 "kgs" 或 "lbs"
/// 7. date 匹配 DD-DD-DD
pub fn validate_new(payload: &Map<String, Value>) -> Result<NewExercise, InvalidPayload> {
    ensure_known_keys(payload)?;
    if payload.len() != FIELD_NAMES.len() {
        return Err(InvalidPayload);
    }

    Ok(NewExercise {
        name: parse_name(required(payload, "name")?)?,
        reps: parse_positive(required(payload, "reps")?)?,
        weight: parse_positive(required(payload, "weight")?)?,
        unit: parse_unit(required(payload, "unit")?)?,
        date: parse_date(required(payload, "date")?)?,
    })
}

/// 校验部分更新载荷
///
/// 未知 key 仍然无效；允许任意子集，出现的字段按创建时的规则校验
pub fn validate_patch(payload: &Map<String, Value>) -> Result<ExercisePatch, InvalidPayload> {
    ensure_known_keys(payload)?;

    Ok(ExercisePatch {
        name: payload.get("name").map(parse_name).transpose()?,
        reps: payload.get("reps").map(parse_positive).transpose()?,
        weight: payload.get("weight").map(parse_positive).transpose()?,
        unit: payload.get("unit").map(parse_unit).transpose()?,
        date: payload.get("date").map(parse_date).transpose()?,
    })
}

fn ensure_known_keys(payload: &Map<String, Value>) -> Result<(), InvalidPayload> {
    if payload.keys().all(|key| FIELD_NAMES.contains(&key.as_str())) {
        Ok(())
    } else {
        Err(InvalidPayload)
    }
}

fn required<'a>(payload: &'a Map<String, Value>, key: &str) -> Result<&'a Value, InvalidPayload> {
    payload.get(key).ok_or(InvalidPayload)
}

fn parse_name(value: &Value) -> Result<ExerciseName, InvalidPayload> {
    value
        .as_str()
        .and_then(|s| ExerciseName::new(s).ok())
        .ok_or(InvalidPayload)
}

fn parse_positive(value: &Value) -> Result<PositiveInt, InvalidPayload> {
    integral(value)
        .and_then(|n| PositiveInt::new(n).ok())
        .ok_or(InvalidPayload)
}

fn parse_unit(value: &Value) -> Result<Unit, InvalidPayload> {
    value.as_str().and_then(Unit::from_str).ok_or(InvalidPayload)
}

fn parse_date(value: &Value) -> Result<ExerciseDate, InvalidPayload> {
    value
        .as_str()
        .and_then(|s| ExerciseDate::new(s).ok())
        .ok_or(InvalidPayload)
}

/// JSON 数字的整数值：20 与 20.0 都算整数，20.5 不算
fn integral(value: &Value) -> Option<i64> {
    let number = value.as_number()?;
    if let Some(n) = number.as_i64() {
        return Some(n);
    }
    if number.is_u64() {
        // 超出 i64 范围
        return None;
    }
    let f = number.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}
