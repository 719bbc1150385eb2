#![warn(missing_docs)]

//! `trebuchet-core` 提供逐行提取“校准值”并累加求和的核心能力。
//!
//! # 背景（Why）
//! - 每一行文本的校准值由该行**最左**与**最右**的 ASCII 数字组成两位数；仅有一个数字时视为重复（如 `7` → `77`），
//!   没有数字的行贡献 0；
//! - 将状态机、累加器与 I/O 驱动拆分为独立模块，使状态转换可以脱离 I/O 单独测试。
//!
//! # 使用概览（How）
//! - 一次性输入：调用 [`sum_calibrations_str`] 或 [`sum_calibrations_bytes`]；
//! - 流式输入：调用 [`sum_calibrations`]，传入任意实现 [`std::io::Read`] 的来源；
//! - 分片输入：手动构造 [`CalibrationSummer`]，多次 [`feed`](CalibrationSummer::feed) 后调用
//!   [`finish`](CalibrationSummer::finish)。
//!
//! # 契约说明（What）
//! - 仅识别单字节 `b'0'..=b'9'`，不解码多字节字符；
//! - 总和以 `i32` 表示，超出上限时返回 [`SumError::Overflow`]，不会回绕；
//! - 流末尾即使没有换行符，也会被视为隐式行结束。

mod accumulator;
mod calibration;
mod capture;
mod config;
mod digit;
mod error;
mod scanner;
mod stream;

pub use crate::accumulator::{Accumulator, would_overflow};
pub use crate::calibration::Calibration;
pub use crate::capture::CaptureState;
pub use crate::config::SummerConfig;
pub use crate::digit::Digit;
pub use crate::error::SumError;
pub use crate::scanner::{CalibrationSummer, LINE_TERMINATOR};
pub use crate::stream::{sum_calibrations, sum_calibrations_bytes, sum_calibrations_str};

/// 携带默认错误类型的结果别名。
pub type Result<T, E = SumError> = core::result::Result<T, E>;
