use crate::accumulator::Accumulator;
use crate::capture::CaptureState;
use crate::config::SummerConfig;
use crate::digit::Digit;

/// 行结束符。
pub const LINE_TERMINATOR: u8 = b'\n';

/// 增量式校准值求和器（Line Calibration Summer）。
///
/// # 行为概览（How）
/// - [`feed`](Self::feed)：扫描一个字节块，遇到 `\n` 即结算当前行并累加；行可以跨越多个字节块；
/// - [`finish`](Self::finish)：把流末尾视作隐式行结束，结算最后一行后返回总和。
///
/// # 契约说明（What）
/// - 非数字、非换行字节（字母、标点、空白、`\r`、`>= 0x80` 的字节）被静默跳过；
/// - 任意切分输入得到的结果与整体输入一次性喂入完全一致；
/// - `feed` 返回错误后实例不应继续使用，调用方应直接丢弃。
#[derive(Clone, Debug, Default)]
pub struct CalibrationSummer {
    state: CaptureState,
    accumulator: Accumulator,
    lines: u64,
    // 自上一个换行以来是否读到过任何字节。
    line_open: bool,
}

impl CalibrationSummer {
    /// 以默认配置构造。
    pub fn new() -> Self {
        Self::default()
    }

    /// 以指定配置构造。
    pub fn with_config(config: SummerConfig) -> Self {
        Self {
            state: CaptureState::None,
            accumulator: Accumulator::new(config),
            lines: 0,
            line_open: false,
        }
    }

    /// 扫描一个字节块。
    pub fn feed(&mut self, chunk: &[u8]) -> crate::Result<()> {
        let mut rest = chunk;
        while let Some(pos) = rest.iter().position(|byte| *byte == LINE_TERMINATOR) {
            self.scan_segment(&rest[..pos]);
            self.end_line()?;
            rest = &rest[pos + 1..];
        }
        if !rest.is_empty() {
            self.line_open = true;
            self.scan_segment(rest);
        }
        Ok(())
    }

    /// 结算末行并返回总和。
    pub fn finish(mut self) -> crate::Result<i32> {
        // 空输入不计为一行；末尾已有换行时同理。
        if self.line_open {
            self.end_line()?;
        }
        tracing::debug!(
            lines = self.lines,
            sum = self.accumulator.sum(),
            "calibration summing finished"
        );
        Ok(self.accumulator.sum())
    }

    /// 当前累计值。
    pub fn sum(&self) -> i32 {
        self.accumulator.sum()
    }

    /// 已结算的行数；末尾未以换行结束的行在 [`finish`](Self::finish) 时计入。
    pub fn lines_seen(&self) -> u64 {
        self.lines
    }

    /// 当前行的捕获状态。
    pub fn state(&self) -> CaptureState {
        self.state
    }

    fn scan_segment(&mut self, segment: &[u8]) {
        for byte in segment {
            if let Some(digit) = Digit::from_ascii(*byte) {
                self.state = self.state.observe(digit);
            }
        }
    }

    fn end_line(&mut self) -> crate::Result<()> {
        let finished = core::mem::take(&mut self.state);
        self.line_open = false;
        self.lines += 1;
        let Some(calibration) = finished.finish() else {
            return Ok(());
        };
        let value = calibration.value();
        if let Err(err) = self.accumulator.add(value) {
            tracing::warn!(
                line = self.lines,
                value,
                sum = self.accumulator.sum(),
                "calibration sum overflow"
            );
            return Err(err);
        }
        tracing::trace!(line = self.lines, %calibration, "calibration line finalised");
        Ok(())
    }
}
