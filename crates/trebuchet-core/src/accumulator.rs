use crate::config::SummerConfig;
use crate::error::SumError;

/// 判断 `sum + candidate` 是否会超出 `limit`。
///
/// 比较写作 `candidate > limit - sum`：在 `0 <= sum <= limit` 的前提下减法本身不会溢出，
/// 因此检查过程与目标平台的整数溢出语义无关。
pub const fn would_overflow(sum: i32, candidate: i32, limit: i32) -> bool {
    candidate > limit - sum
}

/// 带溢出检测的单调累加器。
///
/// # 契约说明（What）
/// - 初始值为 0，只接受非负加数，因此总和单调不减；
/// - 溢出时返回 [`SumError::Overflow`]，累计值保持不变；
/// - 不变量：`0 <= sum <= limit`。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accumulator {
    sum: i32,
    limit: i32,
}

impl Accumulator {
    /// 按配置构造累加器。
    pub const fn new(config: SummerConfig) -> Self {
        Self {
            sum: 0,
            limit: config.limit(),
        }
    }

    /// 累加一个非负值，返回新的总和。
    pub fn add(&mut self, candidate: i32) -> crate::Result<i32> {
        debug_assert!(candidate >= 0, "calibration values are never negative");
        if would_overflow(self.sum, candidate, self.limit) {
            return Err(SumError::Overflow {
                sum: self.sum,
                addend: candidate,
                limit: self.limit,
            });
        }
        self.sum += candidate;
        Ok(self.sum)
    }

    /// 当前累计值。
    pub const fn sum(&self) -> i32 {
        self.sum
    }

    /// 上限。
    pub const fn limit(&self) -> i32 {
        self.limit
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new(SummerConfig::default())
    }
}
