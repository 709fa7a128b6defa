use appctl_domain::command_result::{CommandResult, ErrorDetails};
use appctl_domain::error::DomainError;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("domain: {0}")]
    Domain(#[from] DomainError),

    /// 可恢复：调用方会收到 `NotImplemented`
    #[error("command not recognized: {name}")]
    CommandNotRecognized { name: String },

    #[error("handler failure: command={command}, reason={reason}")]
    HandlerFailure {
        command: &'static str,
        reason: String,
    },

    #[error("invalid arguments: command={command}, reason={reason}")]
    InvalidArguments {
        command: &'static str,
        reason: String,
    },

    #[error("handler already registered: command={command}")]
    AlreadyRegisteredCommand { command: &'static str },
}

impl AppError {
    /// 回传给调用方的稳定错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::Domain(_) => "domain_error",
            Self::CommandNotRecognized { .. } => "not_implemented",
            Self::HandlerFailure { .. } => "handler_failure",
            Self::InvalidArguments { .. } => "invalid_arguments",
            Self::AlreadyRegisteredCommand { .. } => "already_registered",
        }
    }
}

impl From<AppError> for CommandResult {
    fn from(err: AppError) -> Self {
        match err {
            AppError::CommandNotRecognized { .. } => CommandResult::NotImplemented,
            other => CommandResult::Error(ErrorDetails::new(other.code(), other.to_string())),
        }
    }
}
