//! app-control 领域层（appctl-domain）
//!
//! 宿主进程与嵌入式 UI 运行时之间命令桥的数据模型：
//! - 方法调用（`method_call`）：命令名 + 可选参数载荷
//! - 调用结果（`command_result`）：`Success` / `Error` / `NotImplemented`
//! - 值对象（`value_object`）：非空、大小写敏感的命令名
//! - 关停协议（`shutdown`）：两阶段强制退出的状态机与平台端口
//!
//! 本 crate 不涉及具体传输与操作系统调用，仅定义模型与端口（trait），
//! 由应用层与宿主进程提供实现。
//!
pub mod command_result;
pub mod error;
pub mod method_call;
pub mod shutdown;
pub mod value_object;
