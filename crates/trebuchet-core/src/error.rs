//! # error 模块说明
//!
//! 汇总校准值求和过程中的全部失败路径。所有错误都是致命的：调用方拿到错误即应丢弃已累计的部分结果。

use std::io;

use thiserror::Error;

/// 求和错误域。
///
/// # 契约说明（What）
/// - [`Overflow`](Self::Overflow) 携带出错时的两个加数与上限，便于直接向用户展示；
/// - [`Io`](Self::Io) 只覆盖读取过程中的失败，打开文件失败由调用方自行归类；
/// - 所有变体均满足 `Send + Sync + 'static`。
#[derive(Debug, Error)]
pub enum SumError {
    /// 累加将超出上限。
    #[error("integer overflow: {sum} + {addend} > {limit}")]
    Overflow {
        /// 溢出前的累计值。
        sum: i32,
        /// 本行的校准值。
        addend: i32,
        /// 允许的最大总和。
        limit: i32,
    },

    /// 读取输入流失败。
    #[error("failed to read input stream: {0}")]
    Io(#[from] io::Error),

    /// 配置的上限为负数。
    #[error("sum limit must be non-negative, got {limit}")]
    InvalidLimit {
        /// 被拒绝的上限值。
        limit: i32,
    },
}

impl SumError {
    /// 是否为溢出错误。
    pub fn is_overflow(&self) -> bool {
        matches!(self, SumError::Overflow { .. })
    }
}
