use crate::{
    command::Command, command_handler::CommandHandler, context::CallContext, error::AppError,
};
use serde_json::Value;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

pub(crate) type CmdHandlerFn =
    Arc<dyn Fn(&CallContext, Option<&Value>) -> Result<Value, AppError> + Send + Sync>;

/// 命令注册表
/// - 命令名 -> 处理器，进程启动时构建，运行期不可变
/// - 以类型擦除方式保存处理器：参数解码与处理在同一闭包内完成
pub struct CommandRegistry {
    handlers: HashMap<&'static str, CmdHandlerFn>,
}

impl CommandRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// 精确匹配（大小写敏感）
    pub(crate) fn resolve(&self, name: &str) -> Option<&CmdHandlerFn> {
        self.handlers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// 已注册的命令名（按字典序）
    pub fn registered_commands(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.handlers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// 注册表构建器，`build()` 之后注册表即冻结
#[derive(Default)]
pub struct RegistryBuilder {
    handlers: HashMap<&'static str, CmdHandlerFn>,
}

impl RegistryBuilder {
    /// 注册命令处理器；同名命令只能注册一次
    pub fn register<C, H>(mut self, handler: Arc<H>) -> Result<Self, AppError>
    where
        C: Command,
        H: CommandHandler<C> + 'static,
    {
        let slot = match self.handlers.entry(C::NAME) {
            Entry::Occupied(_) => {
                return Err(AppError::AlreadyRegisteredCommand { command: C::NAME });
            }
            Entry::Vacant(slot) => slot,
        };

        let f: CmdHandlerFn = Arc::new(
            move |ctx: &CallContext, arguments: Option<&Value>| -> Result<Value, AppError> {
                let cmd = C::from_arguments(arguments)?;
                handler.handle(ctx, cmd)
            },
        );
        slot.insert(f);

        Ok(self)
    }

    pub fn build(self) -> CommandRegistry {
        CommandRegistry {
            handlers: self.handlers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use appctl_macros::Command;

    #[derive(Debug, Command)]
    #[command(name = "ping")]
    struct Ping;

    #[derive(Debug, Command)]
    #[command(name = "ping")]
    struct PingAgain;

    struct Pong;

    impl CommandHandler<Ping> for Pong {
        fn handle(&self, _ctx: &CallContext, _cmd: Ping) -> Result<Value, AppError> {
            Ok(Value::String("pong".to_string()))
        }
    }

    impl CommandHandler<PingAgain> for Pong {
        fn handle(&self, _ctx: &CallContext, _cmd: PingAgain) -> Result<Value, AppError> {
            Ok(Value::Null)
        }
    }

    #[test]
    fn register_and_resolve() {
        let registry = CommandRegistry::builder()
            .register::<Ping, _>(Arc::new(Pong))
            .unwrap()
            .build();

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("ping"));
        assert_eq!(registry.registered_commands(), vec!["ping"]);

        let f = registry.resolve("ping").unwrap();
        let out = f(&CallContext::default(), None).unwrap();
        assert_eq!(out, Value::String("pong".to_string()));
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let err = CommandRegistry::builder()
            .register::<Ping, _>(Arc::new(Pong))
            .unwrap()
            .register::<PingAgain, _>(Arc::new(Pong))
            .err()
            .unwrap();

        match err {
            AppError::AlreadyRegisteredCommand { command } => assert_eq!(command, "ping"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn lookup_is_exact() {
        let registry = CommandRegistry::builder()
            .register::<Ping, _>(Arc::new(Pong))
            .unwrap()
            .build();

        assert!(registry.resolve("Ping").is_none());
        assert!(registry.resolve("pin").is_none());
        assert!(registry.resolve("ping ").is_none());
    }

    #[test]
    fn empty_registry() {
        let registry = CommandRegistry::builder().build();
        assert!(registry.is_empty());
        assert!(registry.registered_commands().is_empty());
    }
}
