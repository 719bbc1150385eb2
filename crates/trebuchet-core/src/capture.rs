use crate::calibration::Calibration;
use crate::digit::Digit;

/// 单行内的数字捕获状态机。
///
/// # 状态转换（How）
/// - `None --digit--> One(first)`
/// - `One(first) --digit--> Two(first, digit)`
/// - `Two(first, _) --digit--> Two(first, digit)`：`last` 被每个新数字覆盖
/// - 行边界：[`finish`](Self::finish) 产出校准值，调用方随后回到 `None`
///
/// # 契约说明（What）
/// - 首尾数字保存在变体内部，`first` 一经写入不再改变；
/// - 状态本身不含 I/O，可以直接用字节序列驱动测试。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CaptureState {
    /// 本行尚未出现数字。
    #[default]
    None,
    /// 本行恰好出现一个数字。
    One(Digit),
    /// 本行至少出现两个数字：`(first, last)`。
    Two(Digit, Digit),
}

impl CaptureState {
    /// 记录一个数字并返回新状态。
    #[must_use]
    pub const fn observe(self, digit: Digit) -> Self {
        match self {
            CaptureState::None => CaptureState::One(digit),
            CaptureState::One(first) | CaptureState::Two(first, _) => {
                CaptureState::Two(first, digit)
            }
        }
    }

    /// 在行边界结算：无数字返回 `None`，单数字视为首尾相同。
    pub const fn finish(self) -> Option<Calibration> {
        match self {
            CaptureState::None => None,
            CaptureState::One(first) => Some(Calibration::repeated(first)),
            CaptureState::Two(first, last) => Some(Calibration::new(first, last)),
        }
    }
}
