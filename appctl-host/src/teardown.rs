use appctl_domain::error::{DomainError, DomainResult};
use appctl_domain::shutdown::GracefulTeardown;
use std::io::Write;

/// 宿主没有 UI 栈，能做的拆除只有冲刷标准输出/错误上的缓冲
#[derive(Debug, Clone, Copy, Default)]
pub struct StdioTeardown;

impl GracefulTeardown for StdioTeardown {
    fn tear_down(&self) -> DomainResult<()> {
        let stdout = std::io::stdout().flush();
        let stderr = std::io::stderr().flush();
        stdout.and(stderr).map_err(|e| DomainError::Teardown {
            reason: e.to_string(),
        })
    }
}
