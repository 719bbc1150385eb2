use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;

/// `RUST_LOG` 未设置时的过滤规则：默认 stderr 只留给致命错误文本。
pub(crate) const DEFAULT_LOG_FILTER: &str = "error";

/// 安装 `fmt` 订阅者：过滤规则取自 `RUST_LOG`，输出只写 stderr，stdout 保留给结果行。
/// stderr 不是终端时关闭 ANSI 着色。
pub(crate) fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    // 仅在已存在全局订阅者时失败，此时沿用已有订阅者。
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
