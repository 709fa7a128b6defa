use crate::context::CallContext;
use appctl_domain::{command_result::CommandResult, method_call::MethodCall};

/// 命令总线（Command Bus）
///
/// - 按命令名把调用路由到处理器，并同步产生恰好一个结果；
/// - 未知命令得到 `NotImplemented`，而不是错误或 panic。
pub trait CommandBus: Send + Sync {
    fn dispatch(&self, ctx: &CallContext, call: &MethodCall) -> CommandResult;
}
