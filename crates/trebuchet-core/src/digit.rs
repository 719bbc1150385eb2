use core::fmt;

/// 单个十进制数字，取值保证位于 `0..=9`。
///
/// # 契约说明（What）
/// - 只能通过 [`Digit::from_ascii`] 构造，因此任何 `Digit` 都来自 ASCII `'0'..='9'`；
/// - 非 ASCII 字节（`>= 0x80`）与其他可见字符一律不被识别。
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    /// 将单个字节识别为数字；非 `b'0'..=b'9'` 返回 `None`。
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        if byte.is_ascii_digit() {
            Some(Self(byte - b'0'))
        } else {
            None
        }
    }

    /// 返回数字的数值。
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_every_ascii_digit() {
        for (offset, byte) in (b'0'..=b'9').enumerate() {
            let digit = Digit::from_ascii(byte).expect("ascii digit");
            assert_eq!(usize::from(digit.get()), offset);
        }
    }

    #[test]
    fn rejects_letters_whitespace_and_high_bytes() {
        for byte in [b'a', b'Z', b' ', b'\t', b'\n', b'\r', b'/', b':', 0x00, 0x80, 0xB2, 0xFF] {
            assert_eq!(Digit::from_ascii(byte), None, "byte {byte:#04x}");
        }
    }
}
