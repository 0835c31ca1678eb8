use crate::error::{HanoiError, Operation, Result};
use crate::generator::MAX_RECURSIVE_DEPTH;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default cap for materializing or animating every move (2^15 - 1 = 32767 moves)
pub const DEFAULT_MAX_VISUAL_N: u32 = 15;
/// Default cap for the timing sweep
pub const DEFAULT_MAX_TIMING_N: u32 = 25;
/// Default cap for the growth curve series
pub const DEFAULT_MAX_GROWTH_N: u32 = 100;
/// Default pause between animation steps
pub const DEFAULT_ANIMATION_DELAY_MS: u64 = 80;
/// Hard ceiling on timed disk counts: the counting traversals total in a `u64`
pub const MAX_TIMING_DISKS: u32 = 63;

/// Limits and pacing handed to the engine by its caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HanoiConfig {
    /// Largest disk count for full move materialization and animation
    pub max_visual_n: u32,
    /// Largest disk count swept by the timing comparison, never above
    /// [`MAX_TIMING_DISKS`]
    pub max_timing_n: u32,
    /// Largest disk count in the growth curve
    pub max_growth_n: u32,
    /// Pause between replay steps in milliseconds
    pub animation_delay_ms: u64,
}

impl Default for HanoiConfig {
    fn default() -> Self {
        Self {
            max_visual_n: DEFAULT_MAX_VISUAL_N,
            max_timing_n: DEFAULT_MAX_TIMING_N,
            max_growth_n: DEFAULT_MAX_GROWTH_N,
            animation_delay_ms: DEFAULT_ANIMATION_DELAY_MS,
        }
    }
}

impl HanoiConfig {
    pub fn animation_delay(&self) -> Duration {
        Duration::from_millis(self.animation_delay_ms)
    }

    /// Effective timing limit: `max_timing_n` clamped to [`MAX_TIMING_DISKS`]
    pub fn timing_limit(&self) -> u32 {
        self.max_timing_n.min(MAX_TIMING_DISKS)
    }

    /// Refuse `disks` up front if it exceeds the limit for `operation`.
    pub fn check_limit(&self, disks: u32, operation: Operation) -> Result<()> {
        let limit = match operation {
            Operation::Materialize | Operation::Animate => self.max_visual_n,
            Operation::Timing => self.timing_limit(),
            Operation::Recursion => MAX_RECURSIVE_DEPTH,
        };
        if disks > limit {
            log::warn!(
                "refusing {} for {} disks (limit {})",
                operation,
                disks,
                limit
            );
            return Err(HanoiError::ResourceLimitExceeded {
                requested: disks,
                limit,
                operation,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HanoiConfig::default();
        assert_eq!(config.max_visual_n, 15);
        assert_eq!(config.max_timing_n, 25);
        assert_eq!(config.animation_delay(), Duration::from_millis(80));
    }

    #[test]
    fn test_check_limit() {
        let config = HanoiConfig::default();
        assert!(config.check_limit(15, Operation::Animate).is_ok());
        assert_eq!(
            config.check_limit(16, Operation::Materialize),
            Err(HanoiError::ResourceLimitExceeded {
                requested: 16,
                limit: 15,
                operation: Operation::Materialize,
            })
        );
        assert!(config.check_limit(25, Operation::Timing).is_ok());
        assert!(config.check_limit(26, Operation::Timing).is_err());
    }

    #[test]
    fn test_timing_limit_is_clamped() {
        let config = HanoiConfig {
            max_timing_n: 200,
            ..HanoiConfig::default()
        };
        assert_eq!(config.timing_limit(), MAX_TIMING_DISKS);
        assert!(config.check_limit(63, Operation::Timing).is_ok());
        assert_eq!(
            config.check_limit(64, Operation::Timing),
            Err(HanoiError::ResourceLimitExceeded {
                requested: 64,
                limit: 63,
                operation: Operation::Timing,
            })
        );
        assert_eq!(HanoiConfig::default().timing_limit(), DEFAULT_MAX_TIMING_N);
    }

    #[test]
    fn test_recursion_limit_ignores_config() {
        let config = HanoiConfig {
            max_visual_n: 0,
            ..HanoiConfig::default()
        };
        assert!(config
            .check_limit(MAX_RECURSIVE_DEPTH, Operation::Recursion)
            .is_ok());
        assert!(config
            .check_limit(MAX_RECURSIVE_DEPTH + 1, Operation::Recursion)
            .is_err());
    }

    #[test]
    fn test_sparse_json_uses_defaults() {
        let config: HanoiConfig = serde_json::from_str(r#"{"max_visual_n": 8}"#).unwrap();
        assert_eq!(config.max_visual_n, 8);
        assert_eq!(config.max_timing_n, DEFAULT_MAX_TIMING_N);
        assert_eq!(config.animation_delay_ms, DEFAULT_ANIMATION_DELAY_MS);
    }
}
