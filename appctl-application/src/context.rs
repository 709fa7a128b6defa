use bon::Builder;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::CHANNEL_NAME;

/// 单次调用的上下文
///
/// 仅承载横切信息（日志/追踪），不参与路由。
///
/// ```rust
/// use appctl_application::context::CallContext;
///
/// let ctx = CallContext::builder().channel("app_control".to_string()).build();
/// assert_eq!(ctx.channel(), "app_control");
/// ```
#[derive(Builder, Debug, Clone)]
pub struct CallContext {
    /// 投递该调用的通道名
    #[builder(default = CHANNEL_NAME.to_string())]
    channel: String,
    /// 调用 ID，用于关联日志
    #[builder(default = Uuid::new_v4())]
    call_id: Uuid,
    /// 宿主收到调用的时间
    #[builder(default = Utc::now())]
    received_at: DateTime<Utc>,
}

impl Default for CallContext {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl CallContext {
    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn call_id(&self) -> Uuid {
        self.call_id
    }

    pub fn received_at(&self) -> &DateTime<Utc> {
        &self.received_at
    }
}
