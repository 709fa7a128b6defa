use crate::{command::Command, context::CallContext, error::AppError};
use serde_json::Value;

/// 命令处理器
///
/// 在投递消息的线程上同步执行，返回值作为 `Success` 的载荷回传。
pub trait CommandHandler<C>: Send + Sync
where
    C: Command,
{
    fn handle(&self, ctx: &CallContext, cmd: C) -> Result<Value, AppError>;
}
