use appctl_application::command::Command;
use appctl_macros::Command;
use serde_json::json;

#[derive(Debug, Command)]
#[command(name = "forceExit")]
struct ForceExitLike;

fn main() {
    assert_eq!(ForceExitLike::NAME, "forceExit");

    // 单元命令忽略参数
    let args = json!({"extra": 1});
    assert!(ForceExitLike::from_arguments(Some(&args)).is_ok());
    assert!(ForceExitLike::from_arguments(None).is_ok());
}
