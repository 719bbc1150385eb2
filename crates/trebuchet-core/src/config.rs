use crate::error::SumError;

/// 求和器配置。
///
/// # 契约说明（What）
/// - `limit`：总和允许达到的最大值，默认 `i32::MAX`；
/// - 上限必须非负，否则 [`with_limit`](Self::with_limit) 返回 [`SumError::InvalidLimit`]；
/// - 命令行工具始终使用默认值，较小的上限用于在小规模输入上复现溢出路径。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SummerConfig {
    limit: i32,
}

impl SummerConfig {
    /// 以指定上限构造配置。
    pub fn with_limit(limit: i32) -> crate::Result<Self> {
        if limit < 0 {
            return Err(SumError::InvalidLimit { limit });
        }
        Ok(Self { limit })
    }

    /// 当前上限。
    pub const fn limit(&self) -> i32 {
        self.limit
    }
}

impl Default for SummerConfig {
    fn default() -> Self {
        Self { limit: i32::MAX }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limit_is_platform_int_max() {
        assert_eq!(SummerConfig::default().limit(), i32::MAX);
    }

    #[test]
    fn negative_limit_is_rejected() {
        let err = SummerConfig::with_limit(-1).expect_err("negative limit");
        assert!(matches!(err, SumError::InvalidLimit { limit: -1 }));
        assert_eq!(SummerConfig::with_limit(0).expect("zero ok").limit(), 0);
    }
}
