//! `forceExit`：两阶段强制退出
//!
//! 1. 请求宿主优雅拆除 UI 栈，结果只记录不处理（失败或 panic 都不会阻止第 2 步）；
//! 2. 无条件强杀自身进程，紧跟显式 `exit(0)`。
//!
use crate::{command_handler::CommandHandler, context::CallContext, error::AppError};
use appctl_domain::shutdown::{
    GracefulTeardown, ProcessTerminator, ShutdownPhase, terminate_process_immediately,
};
use appctl_macros::Command;
use serde_json::Value;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, info};

/// 强制退出命令，不需要参数，多余参数被忽略
#[derive(Debug, Clone, Copy, Default, Command)]
#[command(name = "forceExit")]
pub struct ForceExit;

/// 强制退出执行器
///
/// `teardown` 的实现应只发起拆除请求而不阻塞等待；
/// 一旦进入 `ForcefulKill`，此处理器不再向调用方报告任何东西。
pub struct ForceExitHandler {
    teardown: Arc<dyn GracefulTeardown>,
    terminator: Arc<dyn ProcessTerminator>,
}

impl ForceExitHandler {
    pub fn new(
        teardown: Arc<dyn GracefulTeardown>,
        terminator: Arc<dyn ProcessTerminator>,
    ) -> Self {
        Self {
            teardown,
            terminator,
        }
    }

    fn attempt_graceful_teardown(&self) {
        match panic::catch_unwind(AssertUnwindSafe(|| self.teardown.tear_down())) {
            Ok(Ok(())) => debug!("graceful teardown requested"),
            Ok(Err(err)) => debug!(error = %err, "graceful teardown failed"),
            Err(_) => debug!("graceful teardown panicked"),
        }
    }
}

impl CommandHandler<ForceExit> for ForceExitHandler {
    fn handle(&self, ctx: &CallContext, _cmd: ForceExit) -> Result<Value, AppError> {
        let mut phase = ShutdownPhase::Requested;
        info!(call_id = %ctx.call_id(), %phase, "force exit requested");

        advance(&mut phase);
        self.attempt_graceful_teardown();

        advance(&mut phase);
        terminate_process_immediately(self.terminator.as_ref());

        // 只有假的终止器才会走到这里
        advance(&mut phase);
        debug!(%phase, "process terminator returned");
        Ok(Value::Null)
    }
}

fn advance(phase: &mut ShutdownPhase) {
    if let Some(next) = phase.next() {
        info!(from = %phase, to = %next, "shutdown phase");
        *phase = next;
    }
}
