use std::fmt;

/// 关停状态机（线性，不回退）
///
/// `Requested -> GracefulAttempt -> ForcefulKill -> Terminated`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShutdownPhase {
    /// 调度器已调用处理器
    Requested,
    /// 请求宿主拆除顶层 UI/Activity 栈，结果不被观察
    GracefulAttempt,
    /// 无条件杀死自身进程并显式退出
    ForcefulKill,
    /// 终态：此后不再执行任何代码
    Terminated,
}

impl ShutdownPhase {
    /// 下一阶段；终态返回 `None`
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Requested => Some(Self::GracefulAttempt),
            Self::GracefulAttempt => Some(Self::ForcefulKill),
            Self::ForcefulKill => Some(Self::Terminated),
            Self::Terminated => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Self::Terminated
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Requested => "requested",
            Self::GracefulAttempt => "graceful_attempt",
            Self::ForcefulKill => "forceful_kill",
            Self::Terminated => "terminated",
        }
    }
}

impl fmt::Display for ShutdownPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
