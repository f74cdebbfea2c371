//! Time-based interpolation primitives.
//!
//! A [`Tween`] moves an `f32` from one value to another over a fixed duration.
//! It is driven by frame deltas through [`Tween::tick`], so tests can step time
//! deterministically.

use std::time::Duration;

/// Easing curve applied to normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed
    #[default]
    Linear,
    /// Slow end
    EaseOut,
}

impl Easing {
    /// Map `t` in [0, 1] to eased progress in [0, 1].
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

/// Interpolates between `from` and `to` over `duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    elapsed: Duration,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    /// A linear tween. A zero duration completes on the first tick.
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
            duration: if duration.is_zero() {
                Duration::from_nanos(1)
            } else {
                duration
            },
            easing: Easing::Linear,
        }
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Linear progress before easing, in [0, 1].
    pub fn progress(&self) -> f32 {
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (t as f32).clamp(0.0, 1.0)
    }

    /// Current interpolated value.
    pub fn value(&self) -> f32 {
        if self.is_complete() {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(self.progress())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOut] {
            assert!(easing.apply(0.0).abs() < EPS, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < EPS, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_ease_out_leads_linear() {
        assert!(Easing::EaseOut.apply(0.5) > Easing::Linear.apply(0.5));
        assert!((Easing::EaseOut.apply(0.5) - 0.75).abs() < EPS);
    }

    #[test]
    fn test_tween_halfway() {
        let mut t = Tween::new(40.0, 100.0, Duration::from_millis(200));
        t.tick(Duration::from_millis(100));
        assert!((t.value() - 70.0).abs() < EPS);
        assert!(!t.is_complete());
    }

    #[test]
    fn test_tween_lands_exactly_on_target() {
        let mut t = Tween::new(0.0, -180.0, Duration::from_millis(200)).easing(Easing::EaseOut);
        t.tick(Duration::from_millis(250));
        assert!(t.is_complete());
        assert_eq!(t.value(), -180.0);
    }

    #[test]
    fn test_zero_duration_completes_on_first_tick() {
        let mut t = Tween::new(1.0, 0.0, Duration::ZERO);
        assert!(!t.is_complete());
        t.tick(Duration::from_nanos(1));
        assert!(t.is_complete());
        assert_eq!(t.value(), 0.0);
    }
}
