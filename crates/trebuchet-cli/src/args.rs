use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::CliError;

/// `argv[0]` 缺失时使用的程序名。
const FALLBACK_PROGRAM: &str = "main";

/// 输入来源。
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum InputSource {
    /// 未提供参数：读取标准输入。
    Stdin,
    /// 读取指定文件。
    File(PathBuf),
}

/// 解析后的命令行调用。
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Invocation {
    pub(crate) program: String,
    pub(crate) source: InputSource,
}

impl Invocation {
    /// 解析完整的 `argv`（含程序名）。
    ///
    /// # 契约说明（What）
    /// - 无额外参数 → [`InputSource::Stdin`]；
    /// - 恰好一个参数 → [`InputSource::File`]，路径原样保留，不做存在性检查；
    /// - 两个及以上 → [`CliError::Usage`]，不做任何后续处理。
    pub(crate) fn parse<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut args = args.into_iter();
        let program = args
            .next()
            .map(|arg0| arg0.to_string_lossy().into_owned())
            .unwrap_or_else(|| FALLBACK_PROGRAM.to_owned());

        let path = args.next();
        if args.next().is_some() {
            return Err(CliError::Usage { program });
        }

        let source = match path {
            None => InputSource::Stdin,
            Some(path) => InputSource::File(PathBuf::from(path)),
        };
        Ok(Self { program, source })
    }
}
