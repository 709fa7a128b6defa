//! app-control 应用层（appctl-application）
//!
//! 把宿主的外部消息通道与固定的命令注册表连接起来：
//! - `channel`：外部通道端口（`MethodChannel`）与绑定入口 `bind`
//! - `registry` / `dispatcher`：不可变注册表与同步调度
//! - `force_exit`：唯一注册的命令，两阶段强制退出
//! - `platform`：操作系统层面的进程终止原语
//!
//! 典型用法：
//! ```no_run
//! use std::sync::Arc;
//! use appctl_application::{Dispatcher, OsProcess, app_control_registry};
//! use appctl_domain::shutdown::NoTeardown;
//!
//! let registry = app_control_registry(Arc::new(NoTeardown), Arc::new(OsProcess)).unwrap();
//! let dispatcher = Dispatcher::new(registry);
//! # let _ = dispatcher;
//! ```
//!
//! 绑定到通道的完整流程见 `examples/bind_channel.rs`。
pub mod channel;
pub mod command;
pub mod command_bus;
pub mod command_handler;
pub mod context;
pub mod dispatcher;
pub mod error;
pub mod force_exit;
pub mod platform;
pub mod registry;

pub use dispatcher::Dispatcher;
pub use force_exit::{ForceExit, ForceExitHandler};
pub use platform::OsProcess;
pub use registry::CommandRegistry;

use appctl_domain::shutdown::{GracefulTeardown, ProcessTerminator};
use std::sync::Arc;

/// 宿主通道的默认名称
pub const CHANNEL_NAME: &str = "app_control";

/// 构建 app-control 通道的注册表：仅包含 `forceExit`
pub fn app_control_registry(
    teardown: Arc<dyn GracefulTeardown>,
    terminator: Arc<dyn ProcessTerminator>,
) -> Result<CommandRegistry, error::AppError> {
    let registry = CommandRegistry::builder()
        .register::<ForceExit, _>(Arc::new(ForceExitHandler::new(teardown, terminator)))?
        .build();
    Ok(registry)
}

// 过程宏生成的代码通过此路径引用依赖，调用方无需直接依赖 serde_json
#[doc(hidden)]
pub mod __private {
    pub use serde_json;
}

// 允许在本 crate 内部通过 ::appctl_application 进行自引用，
// 以便 #[derive(Command)] 在本 crate 中也能解析路径。
extern crate self as appctl_application;
