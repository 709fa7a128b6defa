//! 操作系统进程终止原语
//!
use appctl_domain::shutdown::ProcessTerminator;

/// 真实进程：Unix 上向自身发送 `SIGKILL`，随后 `exit`
///
/// 非 Unix 平台没有可用的自杀信号，只依赖随后的 `exit`。
#[derive(Debug, Clone, Copy, Default)]
pub struct OsProcess;

impl ProcessTerminator for OsProcess {
    fn kill_self(&self) {
        // 返回值不检查：失败时由紧随其后的 exit 兜底
        #[cfg(unix)]
        unsafe {
            libc::kill(libc::getpid(), libc::SIGKILL);
        }
    }

    fn exit(&self, code: i32) {
        std::process::exit(code)
    }
}
