//! 两阶段强制退出协议
//!
//! 先请求宿主优雅拆除 UI 栈（尽力而为、结果不影响流程），
//! 再无条件终止进程：自杀信号之后紧跟一次显式退出调用。
//!
mod phase;
mod port;

pub use phase::ShutdownPhase;
pub use port::{
    FORCED_EXIT_CODE, GracefulTeardown, NoTeardown, ProcessTerminator,
    terminate_process_immediately,
};
