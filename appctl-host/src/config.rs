use appctl_application::CHANNEL_NAME;
use serde::Deserialize;
use std::{env, path::Path};

/// 配置文件路径的环境变量
pub const CONFIG_ENV: &str = "APPCTL_CONFIG";
/// 覆盖通道名的环境变量
pub const CHANNEL_ENV: &str = "APPCTL_CHANNEL";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// 注册处理器的通道名
    pub channel: String,
    /// `RUST_LOG` 未设置时使用的日志级别
    pub log_level: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            channel: CHANNEL_NAME.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl HostConfig {
    /// 读取配置并应用环境变量覆盖
    ///
    /// 日志尚未初始化，读取/解析失败以告警文本返回，由调用方在初始化后输出。
    pub fn load() -> (Self, Vec<String>) {
        let (config, warnings) = match env::var_os(CONFIG_ENV) {
            Some(path) => Self::load_from(Path::new(&path)),
            None => (Self::default(), Vec::new()),
        };
        (config.with_channel_override(env::var(CHANNEL_ENV).ok()), warnings)
    }

    pub fn load_from(path: &Path) -> (Self, Vec<String>) {
        if !path.exists() {
            return (Self::default(), Vec::new());
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                let warning = format!("Failed to read config at {}: {err}", path.display());
                return (Self::default(), vec![warning]);
            }
        };

        match toml::from_str(&content) {
            Ok(config) => (config, Vec::new()),
            Err(err) => {
                let warning = format!("Failed to parse config at {}: {err}", path.display());
                (Self::default(), vec![warning])
            }
        }
    }

    fn with_channel_override(mut self, channel: Option<String>) -> Self {
        if let Some(channel) = channel.filter(|c| !c.is_empty()) {
            self.channel = channel;
        }
        self
    }
}
