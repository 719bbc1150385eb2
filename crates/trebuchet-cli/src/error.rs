//! 命令行层面的错误：每个变体的 `Display` 就是写给用户的 stderr 文本。

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use trebuchet_core::SumError;

/// 命令行错误域，全部为致命错误，统一以非零状态码退出。
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// 参数个数错误。
    #[error("Usage: {program} [filename]")]
    Usage { program: String },

    /// 无法打开输入文件。
    #[error("Unable to open file: {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 累加溢出。
    #[error("INTEGER OVERFLOW: {sum} + {addend} > {limit}")]
    Overflow { sum: i32, addend: i32, limit: i32 },

    /// 其余求和失败（读取错误等）。
    #[error(transparent)]
    Sum(SumError),

    /// 写出结果失败。
    #[error("failed to write result: {0}")]
    Output(#[source] io::Error),
}

impl From<SumError> for CliError {
    fn from(error: SumError) -> Self {
        match error {
            SumError::Overflow { sum, addend, limit } => CliError::Overflow { sum, addend, limit },
            other => CliError::Sum(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_error_names_the_path() {
        let err = CliError::Open {
            path: PathBuf::from("missing/input.txt"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(err.to_string(), "Unable to open file: missing/input.txt");
    }

    #[test]
    fn overflow_is_rendered_with_operands_and_limit() {
        let err = CliError::from(SumError::Overflow {
            sum: 2_147_483_600,
            addend: 55,
            limit: i32::MAX,
        });
        assert_eq!(
            err.to_string(),
            "INTEGER OVERFLOW: 2147483600 + 55 > 2147483647"
        );
    }

    #[test]
    fn read_errors_pass_through() {
        let err = CliError::from(SumError::Io(io::Error::new(
            io::ErrorKind::InvalidData,
            "bad sector",
        )));
        assert!(matches!(err, CliError::Sum(SumError::Io(_))));
        assert_eq!(err.to_string(), "failed to read input stream: bad sector");
    }
}
