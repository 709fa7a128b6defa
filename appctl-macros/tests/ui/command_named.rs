use appctl_application::command::Command;
use appctl_application::error::AppError;
use appctl_macros::Command;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize, Command)]
#[command(name = "setTitle")]
struct SetTitle {
    title: String,
}

fn main() {
    let args = json!({"title": "hello"});
    let cmd = SetTitle::from_arguments(Some(&args)).unwrap();
    assert_eq!(cmd.title, "hello");

    match SetTitle::from_arguments(None) {
        Err(AppError::InvalidArguments { command, .. }) => assert_eq!(command, "setTitle"),
        other => panic!("unexpected: {other:?}"),
    }
}
