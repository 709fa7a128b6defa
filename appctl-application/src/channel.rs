//! 外部消息通道端口
//!
//! 通道由宿主运行时拥有并构造；本 crate 只在启动时向其注册处理器。
//!
use crate::{command_bus::CommandBus, context::CallContext};
use appctl_domain::{command_result::CommandResult, method_call::MethodCall};
use std::sync::Arc;
use tracing::debug;

/// 单次调用的回复端
///
/// 以 `Box<Self>` 消费，保证每条调用最多回复一次。
pub trait ReplySink: Send {
    fn send(self: Box<Self>, result: CommandResult);
}

impl<F> ReplySink for F
where
    F: FnOnce(CommandResult) + Send,
{
    fn send(self: Box<Self>, result: CommandResult) {
        (*self)(result)
    }
}

/// 通道在投递线程上回调的处理器
pub trait MethodCallHandler: Send + Sync {
    fn on_method_call(&self, call: MethodCall, reply: Box<dyn ReplySink>);
}

/// 宿主拥有的具名双向通道
pub trait MethodChannel {
    fn name(&self) -> &str;

    /// 设置（或以 `None` 清除）该通道的处理器
    fn set_method_call_handler(&self, handler: Option<Arc<dyn MethodCallHandler>>);
}

/// 通道与命令总线之间的粘合：为每条调用建立上下文、同步调度、回复一次
pub struct ChannelBinding {
    channel: String,
    bus: Arc<dyn CommandBus>,
}

impl MethodCallHandler for ChannelBinding {
    fn on_method_call(&self, call: MethodCall, reply: Box<dyn ReplySink>) {
        let ctx = CallContext::builder()
            .channel(self.channel.clone())
            .build();
        let result = self.bus.dispatch(&ctx, &call);
        reply.send(result);
    }
}

/// 把命令总线注册为通道的处理器
pub fn bind(channel: &dyn MethodChannel, bus: Arc<dyn CommandBus>) {
    debug!(channel = channel.name(), "binding command bus to channel");
    let binding = ChannelBinding {
        channel: channel.name().to_string(),
        bus,
    };
    channel.set_method_call_handler(Some(Arc::new(binding)));
}
