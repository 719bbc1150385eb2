//! `trebuchet`：读取文件或标准输入，逐行提取首尾数字组成校准值并打印总和。
//!
//! # 使用方法
//! ```bash
//! trebuchet input.txt
//! cat input.txt | trebuchet
//! ```
//! - 成功：stdout 输出 `Sum = <sum>`，退出码 0；
//! - 参数过多、文件无法打开、总和溢出：stderr 输出说明，退出码 1，不打印总和；
//! - `RUST_LOG=trebuchet_core=trace` 可在 stderr 查看逐行诊断。

mod args;
mod error;
mod logging;

use std::fs::File;
use std::io::{self, Read, Write};

use crate::args::{InputSource, Invocation};
use crate::error::CliError;

/// 标准输入模式下的一次性提示。
const STDIN_PROMPT: &str = "Reading from stdin... (press ^C to exit).";

fn main() {
    logging::init();
    if let Err(error) = run() {
        tracing::debug!(?error, "trebuchet failed");
        eprintln!("{error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let invocation = Invocation::parse(std::env::args_os())?;
    let sum = sum_input(&invocation.source)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Sum = {sum}").map_err(CliError::Output)?;
    stdout.flush().map_err(CliError::Output)
}

/// 打开输入并求和；读取句柄在返回前随作用域释放。
fn sum_input(source: &InputSource) -> Result<i32, CliError> {
    let reader: Box<dyn Read> = match source {
        InputSource::Stdin => {
            eprintln!("{STDIN_PROMPT}");
            Box::new(io::stdin().lock())
        }
        InputSource::File(path) => {
            let file = File::open(path).map_err(|source| CliError::Open {
                path: path.clone(),
                source,
            })?;
            tracing::debug!(path = %path.display(), "reading calibration document");
            Box::new(file)
        }
    };
    Ok(trebuchet_core::sum_calibrations(reader)?)
}
