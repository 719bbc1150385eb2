use std::io::{BufRead, BufReader, ErrorKind, Read};

use crate::scanner::CalibrationSummer;

/// 从任意读取源逐块读取并求和，直到 EOF。
///
/// # 执行流程（How）
/// 1. 用 [`BufReader`] 包装来源，反复 `fill_buf` 获取当前缓冲块；
/// 2. 把缓冲块交给 [`CalibrationSummer::feed`]，随后 `consume` 对应长度；
/// 3. 读到空块即 EOF，调用 [`CalibrationSummer::finish`] 结算末行。
///
/// # 契约说明（What）
/// - `ErrorKind::Interrupted` 会被重试，其余读取错误转换为 [`SumError::Io`](crate::SumError::Io)；
/// - 读取源在函数返回时随 `BufReader` 一起被释放，无论成功还是失败。
pub fn sum_calibrations<R: Read>(reader: R) -> crate::Result<i32> {
    let mut reader = BufReader::new(reader);
    let mut summer = CalibrationSummer::new();
    loop {
        let chunk = match reader.fill_buf() {
            Ok(chunk) => chunk,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        };
        if chunk.is_empty() {
            break;
        }
        let len = chunk.len();
        summer.feed(chunk)?;
        reader.consume(len);
    }
    summer.finish()
}

/// 对内存中的字节序列求和。
pub fn sum_calibrations_bytes(input: &[u8]) -> crate::Result<i32> {
    let mut summer = CalibrationSummer::new();
    summer.feed(input)?;
    summer.finish()
}

/// 对内存中的文本求和，按字节扫描。
pub fn sum_calibrations_str(input: &str) -> crate::Result<i32> {
    sum_calibrations_bytes(input.as_bytes())
}
