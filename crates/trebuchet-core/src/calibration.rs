use core::fmt;

use crate::digit::Digit;

/// 一行文本的校准值：最左数字与最右数字组成的两位数。
///
/// # 契约说明（What）
/// - `first` 为该行第一个数字，`last` 为最后一个数字；单数字行两者相同；
/// - [`value`](Self::value) 直接以算术方式计算 `10 * first + last`，结果位于 `0..=99`。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Calibration {
    first: Digit,
    last: Digit,
}

impl Calibration {
    /// 由首尾数字构造校准值。
    pub const fn new(first: Digit, last: Digit) -> Self {
        Self { first, last }
    }

    /// 单数字行：首尾均为同一数字。
    pub const fn repeated(digit: Digit) -> Self {
        Self::new(digit, digit)
    }

    /// 最左数字。
    pub const fn first(&self) -> Digit {
        self.first
    }

    /// 最右数字。
    pub const fn last(&self) -> Digit {
        self.last
    }

    /// 两位数数值。
    pub const fn value(&self) -> i32 {
        10 * self.first.get() as i32 + self.last.get() as i32
    }
}

impl fmt::Display for Calibration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.last)
    }
}
