use crate::error::DomainResult;

/// 强制退出时使用的显式退出码
pub const FORCED_EXIT_CODE: i32 = 0;

/// 宿主提供的优雅拆除能力（关闭顶层 UI/Activity 栈、释放资源）
///
/// 尽力而为：可能失败、部分生效，或在没有 UI 栈时什么也不做。
pub trait GracefulTeardown: Send + Sync {
    fn tear_down(&self) -> DomainResult<()>;
}

impl<F> GracefulTeardown for F
where
    F: Fn() -> DomainResult<()> + Send + Sync,
{
    fn tear_down(&self) -> DomainResult<()> {
        self()
    }
}

/// 没有 UI 栈可拆的宿主
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTeardown;

impl GracefulTeardown for NoTeardown {
    fn tear_down(&self) -> DomainResult<()> {
        Ok(())
    }
}

/// 平台进程终止原语
///
/// 真实实现中两个方法都不会返回；测试中以记录调用的假实现替代。
pub trait ProcessTerminator: Send + Sync {
    /// 向自身进程发送最直接的强杀信号
    fn kill_self(&self);

    /// 显式退出进程
    fn exit(&self, code: i32);
}

/// 立即终止当前进程
///
/// 两个调用无条件、背靠背发出，不检查第一个调用的结果。
pub fn terminate_process_immediately(terminator: &dyn ProcessTerminator) {
    terminator.kill_self();
    terminator.exit(FORCED_EXIT_CODE);
}
