use appctl_domain::command_result::{CommandResult, ErrorDetails};
use appctl_domain::error::DomainError;
use appctl_domain::method_call::MethodCall;
use serde_json::json;

#[test]
fn method_call_without_arguments() {
    let call: MethodCall = serde_json::from_value(json!({"method": "forceExit"})).unwrap();
    assert_eq!(call.method().as_str(), "forceExit");
    assert!(call.arguments().is_none());

    // null 与缺省等价
    let call: MethodCall =
        serde_json::from_value(json!({"method": "forceExit", "arguments": null})).unwrap();
    assert!(call.arguments().is_none());
}

#[test]
fn method_call_keeps_argument_payload() {
    let call: MethodCall =
        serde_json::from_value(json!({"method": "forceExit", "arguments": {"extra": 1}})).unwrap();
    assert_eq!(call.arguments(), Some(&json!({"extra": 1})));
}

#[test]
fn method_call_rejects_empty_name() {
    let err = serde_json::from_value::<MethodCall>(json!({"method": ""})).unwrap_err();
    assert!(err.to_string().contains("must not be empty"));

    let err = MethodCall::parse("", None).unwrap_err();
    assert!(matches!(err, DomainError::InvalidValue { .. }));
}

#[test]
fn method_call_serializes_without_null_arguments() {
    let call = MethodCall::parse("ping", None).unwrap();
    assert_eq!(serde_json::to_value(&call).unwrap(), json!({"method": "ping"}));
}

#[test]
fn command_result_wire_shapes() {
    assert_eq!(
        serde_json::to_value(CommandResult::success_null()).unwrap(),
        json!({"status": "success", "payload": null})
    );
    assert_eq!(
        serde_json::to_value(CommandResult::NotImplemented).unwrap(),
        json!({"status": "notImplemented"})
    );

    let err = CommandResult::Error(
        ErrorDetails::new("handler_failure", "boom").with_details(json!({"attempt": 1})),
    );
    assert_eq!(
        serde_json::to_value(&err).unwrap(),
        json!({
            "status": "error",
            "payload": {"code": "handler_failure", "message": "boom", "details": {"attempt": 1}}
        })
    );
}

#[test]
fn command_result_reads_back() {
    let r: CommandResult = serde_json::from_value(json!({"status": "notImplemented"})).unwrap();
    assert!(r.is_not_implemented());

    let r: CommandResult =
        serde_json::from_value(json!({"status": "error", "payload": {"code": "c", "message": "m"}}))
            .unwrap();
    let details = r.error_details().unwrap();
    assert_eq!(details.code(), "c");
    assert_eq!(details.message(), "m");
    assert!(details.details().is_none());
}
