//! 以行分隔 JSON 为载体的通道
//!
//! 请求：`{"id": 1, "method": "forceExit", "arguments": null}`
//! 回复：`{"id": 1, "result": {"status": "success", "payload": null}}`
//!
use appctl_application::channel::{MethodCallHandler, MethodChannel};
use appctl_domain::command_result::{CommandResult, ErrorDetails};
use appctl_domain::method_call::MethodCall;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::Write;
use std::sync::{Arc, Mutex, RwLock};
use tracing::warn;

#[derive(Debug, Deserialize)]
struct Request {
    method: String,
    #[serde(default)]
    arguments: Option<Value>,
}

#[derive(Debug, Serialize)]
struct Reply<'a> {
    id: Option<u64>,
    result: &'a CommandResult,
}

pub struct LineChannel<W> {
    name: String,
    handler: RwLock<Option<Arc<dyn MethodCallHandler>>>,
    out: Arc<Mutex<W>>,
}

impl<W> LineChannel<W>
where
    W: Write + Send + 'static,
{
    pub fn new(name: impl Into<String>, out: W) -> Self {
        Self {
            name: name.into(),
            handler: RwLock::new(None),
            out: Arc::new(Mutex::new(out)),
        }
    }

    /// 处理一行原始输入；非 UTF-8 的行同样回复 `malformed_call`
    pub fn deliver_bytes(&self, line: &[u8]) {
        match std::str::from_utf8(line) {
            Ok(line) => self.deliver_line(line),
            Err(err) => self.reply_malformed(None, err.to_string()),
        }
    }

    /// 处理一行输入；空行忽略，无法解析的行回复 `malformed_call`
    pub fn deliver_line(&self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        let (id, call) = match decode(line) {
            Ok(decoded) => decoded,
            Err((id, reason)) => return self.reply_malformed(id, reason),
        };

        let handler = match self.handler.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };
        let Some(handler) = handler else {
            warn!(channel = %self.name, "no handler bound");
            write_reply(&self.out, id, &CommandResult::NotImplemented);
            return;
        };

        let out = self.out.clone();
        handler.on_method_call(
            call,
            Box::new(move |result: CommandResult| write_reply(&out, id, &result)),
        );
    }

    fn reply_malformed(&self, id: Option<u64>, reason: String) {
        warn!(%reason, "malformed call");
        let result = CommandResult::Error(ErrorDetails::new("malformed_call", reason));
        write_reply(&self.out, id, &result);
    }
}

impl<W> MethodChannel for LineChannel<W>
where
    W: Write + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn set_method_call_handler(&self, handler: Option<Arc<dyn MethodCallHandler>>) {
        match self.handler.write() {
            Ok(mut guard) => *guard = handler,
            Err(poisoned) => *poisoned.into_inner() = handler,
        }
    }
}

/// 解码失败时仍尽量带回请求的 `id`
fn decode(line: &str) -> Result<(Option<u64>, MethodCall), (Option<u64>, String)> {
    let value: Value = serde_json::from_str(line).map_err(|e| (None, e.to_string()))?;
    let id = value.get("id").and_then(Value::as_u64);
    let request: Request = serde_json::from_value(value).map_err(|e| (id, e.to_string()))?;
    let call =
        MethodCall::parse(&request.method, request.arguments).map_err(|e| (id, e.to_string()))?;
    Ok((id, call))
}

fn write_reply<W: Write>(out: &Mutex<W>, id: Option<u64>, result: &CommandResult) {
    let mut out = match out.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    let written = serde_json::to_writer(&mut *out, &Reply { id, result })
        .map_err(std::io::Error::from)
        .and_then(|()| out.write_all(b"\n"))
        .and_then(|()| out.flush());
    if let Err(err) = written {
        warn!(error = %err, "failed to write reply");
    }
}
