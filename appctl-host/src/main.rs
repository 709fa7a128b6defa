//! app-control 参考宿主
//!
//! 从 stdin 逐行读取方法调用，经 `app_control` 通道调度，回复写入 stdout。
//! 输入关闭或收到 Ctrl+C/SIGTERM 时正常退出；`forceExit` 则直接杀死本进程。
//!
mod config;
mod line_channel;
mod logging;
mod shutdown;
mod teardown;

use anyhow::{Context, Result};
use appctl_application::{Dispatcher, OsProcess, app_control_registry, channel::bind};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tracing::{info, warn};

use crate::config::HostConfig;
use crate::line_channel::LineChannel;
use crate::shutdown::shutdown_signal;
use crate::teardown::StdioTeardown;

fn main() -> Result<()> {
    let (config, warnings) = HostConfig::load();
    logging::init_tracing(&config.log_level);
    for warning in warnings {
        warn!("{warning}");
    }

    let registry = app_control_registry(Arc::new(StdioTeardown), Arc::new(OsProcess))
        .context("failed to build command registry")?;
    let channel = LineChannel::new(config.channel.clone(), std::io::stdout());
    bind(&channel, Arc::new(Dispatcher::new(registry)));
    info!(channel = %config.channel, "app control host ready");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start runtime")?;
    let outcome = runtime.block_on(serve(&channel, tokio::io::stdin()));
    // stdin 的阻塞读无法取消，不等待它
    runtime.shutdown_background();
    outcome
}

/// 逐行投递，直到输入结束或收到中断信号
async fn serve<R, W>(channel: &LineChannel<W>, input: R) -> Result<()>
where
    R: AsyncRead + Unpin,
    W: Write + Send + 'static,
{
    // 按字节读取，非 UTF-8 的行交给通道回复错误
    let mut reader = BufReader::new(input);
    let mut line = Vec::new();
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);
    let mut signals_armed = true;

    loop {
        tokio::select! {
            read = reader.read_until(b'\n', &mut line) => {
                if read.context("failed to read method call")? == 0 {
                    info!("input closed");
                    break;
                }
                channel.deliver_bytes(&line);
                line.clear();
            }
            result = &mut shutdown, if signals_armed => {
                match result {
                    Ok(()) => {
                        info!("interrupted");
                        break;
                    }
                    Err(err) => {
                        warn!(error = %err, "signal handling unavailable");
                        signals_armed = false;
                    }
                }
            }
        }
    }

    Ok(())
}
