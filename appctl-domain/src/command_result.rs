//! 调用结果（CommandResult）
//!
//! 每条方法调用同步产生恰好一个结果，经通道回传后即丢弃。
//!
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 调用结果
///
/// 序列化为相邻标签形式：
/// - `{"status":"success","payload":<value>}`
/// - `{"status":"error","payload":{"code":..,"message":..,"details":..}}`
/// - `{"status":"notImplemented"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "payload", rename_all = "camelCase")]
pub enum CommandResult {
    Success(Value),
    Error(ErrorDetails),
    /// 宿主不认识该命令；调用方据此降级，不视为错误
    NotImplemented,
}

impl CommandResult {
    /// `Success(null)`，forceExit 在终止被延迟时才可能被观察到
    pub fn success_null() -> Self {
        Self::Success(Value::Null)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented)
    }

    pub fn error_details(&self) -> Option<&ErrorDetails> {
        match self {
            Self::Error(details) => Some(details),
            _ => None,
        }
    }
}

/// 错误三元组：稳定错误码、可读信息、可选附加数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetails {
    code: String,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl ErrorDetails {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }
}
