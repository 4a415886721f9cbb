//! Exercise Context - Errors

use thiserror::Error;

/// 请求载荷无效
///
/// 全有或全无：不携带具体是哪条规则失败
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid request")]
pub struct InvalidPayload;
