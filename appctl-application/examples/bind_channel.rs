use appctl_application::channel::{MethodCallHandler, MethodChannel, bind};
use appctl_application::{Dispatcher, app_control_registry};
use appctl_domain::command_result::CommandResult;
use appctl_domain::method_call::MethodCall;
use appctl_domain::shutdown::{NoTeardown, ProcessTerminator};
use serde_json::json;
use std::sync::{Arc, RwLock};

/// 只打印、不真正结束进程的终止器
struct PrintTerminator;

impl ProcessTerminator for PrintTerminator {
    fn kill_self(&self) {
        println!("kill_self: SIGKILL skipped");
    }

    fn exit(&self, code: i32) {
        println!("exit({code}) skipped");
    }
}

/// 进程内通道：直接调用已注册的处理器
#[derive(Default)]
struct InProcessChannel {
    handler: RwLock<Option<Arc<dyn MethodCallHandler>>>,
}

impl InProcessChannel {
    fn invoke(&self, call: MethodCall) {
        let handler = self.handler.read().ok().and_then(|guard| guard.clone());
        match handler {
            Some(handler) => handler.on_method_call(
                call,
                Box::new(|result: CommandResult| println!("reply: {result:?}")),
            ),
            None => println!("no handler bound"),
        }
    }
}

impl MethodChannel for InProcessChannel {
    fn name(&self) -> &str {
        appctl_application::CHANNEL_NAME
    }

    fn set_method_call_handler(&self, handler: Option<Arc<dyn MethodCallHandler>>) {
        if let Ok(mut guard) = self.handler.write() {
            *guard = handler;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = app_control_registry(Arc::new(NoTeardown), Arc::new(PrintTerminator))?;
    println!("registered: {:?}", registry.registered_commands());

    let channel = InProcessChannel::default();
    bind(&channel, Arc::new(Dispatcher::new(registry)));

    channel.invoke(MethodCall::parse("ping", None)?);
    channel.invoke(MethodCall::parse("forceExit", Some(json!({"extra": 1})))?);
    Ok(())
}
