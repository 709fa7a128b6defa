//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的对象，用于封装不可变的概念性值与校验逻辑。
//!

use std::fmt;

use appctl_macros::value_object;

use crate::error::{DomainError, DomainResult};

/// 值对象抽象
pub trait ValueObject {
    /// 业务校验失败时的错误类型
    type Error;

    /// 创建值对象时进行验证
    fn validate(&self) -> Result<(), Self::Error>;
}

/// 命令名
///
/// 通道上的方法名，按字节精确匹配（大小写敏感，不做前缀/通配）。
/// 空字符串不是合法命令名，因此不派生 `Default`。
///
/// ```
/// use appctl_domain::value_object::CommandName;
///
/// let name = CommandName::new("forceExit").unwrap();
/// assert_eq!(name.as_str(), "forceExit");
/// assert!(CommandName::new("").is_err());
/// ```
#[value_object(default = false)]
#[derive(Hash)]
#[serde(try_from = "String", into = "String")]
pub struct CommandName(String);

impl CommandName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let name = Self(value.into());
        name.validate()?;
        Ok(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for CommandName {
    type Error = DomainError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.0.is_empty() {
            return Err(DomainError::InvalidValue {
                reason: "command name must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

impl TryFrom<String> for CommandName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CommandName {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CommandName> for String {
    fn from(name: CommandName) -> Self {
        name.0
    }
}

impl AsRef<str> for CommandName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
