//! Host configuration: grid size and animation pacing.

use std::time::Duration;

/// Animation pacing. All values are milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationConfig {
    /// Pause between two search steps.
    pub delay_ms: u64,
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    /// Amount [`faster`](Self::faster) and [`slower`](Self::slower) adjust by.
    pub step_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            delay_ms: 10,
            min_delay_ms: 1,
            max_delay_ms: 100,
            step_ms: 5,
        }
    }
}

impl AnimationConfig {
    /// Shorten the step delay, not below the minimum.
    pub fn faster(&mut self) {
        self.delay_ms = self
            .delay_ms
            .saturating_sub(self.step_ms)
            .clamp(self.min_delay_ms, self.max_delay_ms);
    }

    /// Lengthen the step delay, not above the maximum.
    pub fn slower(&mut self) {
        self.delay_ms = self
            .delay_ms
            .saturating_add(self.step_ms)
            .clamp(self.min_delay_ms, self.max_delay_ms);
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Path nodes are revealed at half speed, never faster than 20 ms.
    pub fn path_delay(&self) -> Duration {
        Duration::from_millis((self.delay_ms * 2).max(20))
    }
}

/// Everything a [`Session`](crate::Session) needs at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub rows: i32,
    pub cols: i32,
    pub animation: AnimationConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: 50,
            cols: 50,
            animation: AnimationConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_is_clamped() {
        let mut a = AnimationConfig::default();
        a.faster();
        assert_eq!(a.delay_ms, 5);
        a.faster();
        assert_eq!(a.delay_ms, 1);
        a.faster();
        assert_eq!(a.delay_ms, 1);

        a.delay_ms = 98;
        a.slower();
        assert_eq!(a.delay_ms, 100);
    }

    #[test]
    fn path_delay_has_a_floor() {
        let mut a = AnimationConfig::default();
        assert_eq!(a.path_delay(), Duration::from_millis(20));
        a.delay_ms = 40;
        assert_eq!(a.path_delay(), Duration::from_millis(80));
        assert_eq!(a.step_delay(), Duration::from_millis(40));
    }
}
