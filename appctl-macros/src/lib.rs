//! appctl 过程宏
//!
//! - `#[value_object]`：为值对象补齐常用派生
//! - `#[derive(Command)]`：为通道命令生成 `appctl_application::command::Command` 实现
//!
mod command;
mod derive_utils;
mod value_object;

use proc_macro::TokenStream;

/// 值对象宏
/// - 合并/追加派生：Clone, (Debug 可控), (Default 可控), Serialize, Deserialize, PartialEq, Eq
/// - 参数：`#[value_object(debug = bool, default = bool)]`，均默认 true
#[proc_macro_attribute]
pub fn value_object(attr: TokenStream, item: TokenStream) -> TokenStream {
    value_object::expand(attr, item)
}

/// 命令派生宏
///
/// ```ignore
/// #[derive(Command)]
/// #[command(name = "forceExit")]
/// pub struct ForceExit;
/// ```
///
/// - 单元结构体：忽略调用参数
/// - 具名字段结构体：通过 serde 从调用参数解码（需同时派生 `Deserialize`）
#[proc_macro_derive(Command, attributes(command))]
pub fn command(item: TokenStream) -> TokenStream {
    command::expand(item)
}
