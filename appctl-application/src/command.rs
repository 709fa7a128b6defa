use crate::error::AppError;
use serde_json::Value;

/// 通道命令
///
/// 通常通过 `#[derive(Command)]` 与 `#[command(name = "...")]` 实现。
///
/// 关联常量：
/// - `NAME`：通道上的稳定方法名，用于路由与日志。大小写敏感，避免依赖 `type_name::<T>()`。
pub trait Command: Sized + Send + 'static {
    const NAME: &'static str;

    /// 从调用参数构造命令；不需要参数的命令应忽略载荷而不是校验它
    fn from_arguments(arguments: Option<&Value>) -> Result<Self, AppError>;
}
