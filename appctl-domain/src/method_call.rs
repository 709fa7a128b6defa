use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DomainResult;
use crate::value_object::CommandName;

/// 方法调用（嵌入式运行时发出的一条命令）
///
/// - `method`：命令名，非空
/// - `arguments`：可选参数载荷；缺省或 `null` 均视为无参数
///
/// 每条调用由调度器恰好消费一次，不做持久化。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    method: CommandName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    arguments: Option<Value>,
}

impl MethodCall {
    pub fn new(method: CommandName, arguments: Option<Value>) -> Self {
        Self { method, arguments }
    }

    /// 从原始方法名构造，方法名为空时返回错误
    pub fn parse(method: &str, arguments: Option<Value>) -> DomainResult<Self> {
        Ok(Self::new(CommandName::new(method)?, arguments))
    }

    pub fn method(&self) -> &CommandName {
        &self.method
    }

    pub fn arguments(&self) -> Option<&Value> {
        self.arguments.as_ref()
    }
}
