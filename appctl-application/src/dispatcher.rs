use crate::{
    command_bus::CommandBus, context::CallContext, error::AppError, registry::CommandRegistry,
};
use appctl_domain::{command_result::CommandResult, method_call::MethodCall};
use std::sync::Arc;
use tracing::{debug, debug_span, warn};

/// 基于不可变注册表的 CommandBus 实现
/// - 在调用线程上同步执行处理器，处理器返回后才产生结果
/// - 不持有可变共享状态，并发投递互不影响
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<CommandRegistry>,
}

impl Dispatcher {
    pub fn new(registry: CommandRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}

impl CommandBus for Dispatcher {
    fn dispatch(&self, ctx: &CallContext, call: &MethodCall) -> CommandResult {
        let name = call.method().as_str();
        let span = debug_span!(
            "dispatch",
            call_id = %ctx.call_id(),
            received_at = %ctx.received_at(),
            channel = ctx.channel(),
            method = name
        );
        let _enter = span.enter();

        let Some(f) = self.registry.resolve(name) else {
            debug!("command not recognized");
            return AppError::CommandNotRecognized {
                name: name.to_string(),
            }
            .into();
        };

        match f(ctx, call.arguments()) {
            Ok(value) => {
                debug!("command handled");
                CommandResult::Success(value)
            }
            Err(err) => {
                warn!(error = %err, "command handler failed");
                err.into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command_handler::CommandHandler;
    use appctl_macros::Command;
    use serde::Deserialize;
    use serde_json::{Value, json};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Command)]
    #[command(name = "count")]
    struct Count;

    struct CountHandler {
        counter: Arc<AtomicUsize>,
    }

    impl CommandHandler<Count> for CountHandler {
        fn handle(&self, _ctx: &CallContext, _cmd: Count) -> Result<Value, AppError> {
            let v = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(json!(v))
        }
    }

    #[derive(Debug, Command)]
    #[command(name = "explode")]
    struct Explode;

    struct ExplodeHandler;

    impl CommandHandler<Explode> for ExplodeHandler {
        fn handle(&self, _ctx: &CallContext, _cmd: Explode) -> Result<Value, AppError> {
            Err(AppError::HandlerFailure {
                command: "explode",
                reason: "disk on fire".to_string(),
            })
        }
    }

    #[derive(Debug, Deserialize, Command)]
    #[command(name = "resize")]
    struct Resize {
        width: u32,
    }

    struct ResizeHandler;

    impl CommandHandler<Resize> for ResizeHandler {
        fn handle(&self, _ctx: &CallContext, cmd: Resize) -> Result<Value, AppError> {
            Ok(json!(cmd.width))
        }
    }

    fn dispatcher(counter: Arc<AtomicUsize>) -> Dispatcher {
        let registry = CommandRegistry::builder()
            .register::<Count, _>(Arc::new(CountHandler { counter }))
            .unwrap()
            .register::<Explode, _>(Arc::new(ExplodeHandler))
            .unwrap()
            .register::<Resize, _>(Arc::new(ResizeHandler))
            .unwrap()
            .build();
        Dispatcher::new(registry)
    }

    fn call(name: &str, arguments: Option<Value>) -> MethodCall {
        MethodCall::parse(name, arguments).unwrap()
    }

    #[test]
    fn registered_command_returns_success() {
        let counter = Arc::new(AtomicUsize::new(0));
        let bus = dispatcher(counter.clone());

        let result = bus.dispatch(&CallContext::default(), &call("count", None));
        assert_eq!(result, CommandResult::Success(json!(1)));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unknown_command_is_not_implemented_and_repeatable() {
        let counter = Arc::new(AtomicUsize::new(0));
        let bus = dispatcher(counter.clone());
        let ctx = CallContext::default();

        for _ in 0..3 {
            let result = bus.dispatch(&ctx, &call("ping", None));
            assert_eq!(result, CommandResult::NotImplemented);
        }
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let counter = Arc::new(AtomicUsize::new(0));
        let bus = dispatcher(counter.clone());

        let result = bus.dispatch(&CallContext::default(), &call("Count", None));
        assert!(result.is_not_implemented());
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn handler_error_surfaces_as_error_result() {
        let bus = dispatcher(Arc::new(AtomicUsize::new(0)));

        let result = bus.dispatch(&CallContext::default(), &call("explode", None));
        let details = result.error_details().unwrap();
        assert_eq!(details.code(), "handler_failure");
        assert!(details.message().contains("disk on fire"));
    }

    #[test]
    fn typed_arguments_are_decoded() {
        let bus = dispatcher(Arc::new(AtomicUsize::new(0)));
        let ctx = CallContext::default();

        let ok = bus.dispatch(&ctx, &call("resize", Some(json!({"width": 640}))));
        assert_eq!(ok, CommandResult::Success(json!(640)));

        let bad = bus.dispatch(&ctx, &call("resize", Some(json!({"width": "wide"}))));
        assert_eq!(bad.error_details().unwrap().code(), "invalid_arguments");
    }

    #[test]
    fn concurrent_dispatch_needs_no_locking() {
        let counter = Arc::new(AtomicUsize::new(0));
        let bus = dispatcher(counter.clone());

        std::thread::scope(|s| {
            for _ in 0..8 {
                let bus = bus.clone();
                s.spawn(move || {
                    let ctx = CallContext::default();
                    for _ in 0..25 {
                        assert!(bus.dispatch(&ctx, &call("count", None)).is_success());
                        assert!(bus.dispatch(&ctx, &call("ping", None)).is_not_implemented());
                    }
                });
            }
        });

        assert_eq!(counter.load(Ordering::SeqCst), 200);
    }
}
