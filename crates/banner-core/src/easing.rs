//! Easing curves mapping progress in \[0, 1\] to eased progress.
//!
//! `ElasticOut` overshoots past 1.0 before settling, so callers must not clamp
//! the eased value.

use crate::constants::ELASTIC_PERIOD;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Quadratic ease-out. Default for lever and recoil motion.
    #[default]
    PowerOut,
    /// Overshoot-and-settle, used for the particles' return to origin.
    ElasticOut,
}

impl Easing {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::PowerOut => power_out(t),
            Easing::ElasticOut => elastic_out(t),
        }
    }
}

/// f(t) = 1 - (1-t)²
#[inline]
fn power_out(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv
}

/// f(t) = 2^(-10t) · sin((t - p/4) · 2π / p) + 1
#[inline]
fn elastic_out(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let p = ELASTIC_PERIOD;
    let s = p / 4.0;
    2.0_f32.powf(-10.0 * t) * ((t - s) * TAU / p).sin() + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        for easing in [Easing::Linear, Easing::PowerOut, Easing::ElasticOut] {
            assert!(easing.apply(0.0).abs() < 1e-6, "{:?} at t=0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn elastic_out_overshoots_then_settles() {
        let peak = (1..100)
            .map(|i| Easing::ElasticOut.apply(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0, "expected overshoot, peak was {}", peak);
        assert!((Easing::ElasticOut.apply(0.9) - 1.0).abs() < 0.01);
    }

    #[test]
    fn power_out_is_monotonic() {
        let mut prev = 0.0;
        for i in 0..=20 {
            let v = Easing::PowerOut.apply(i as f32 / 20.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn progress_outside_unit_range_is_clamped() {
        assert_eq!(Easing::Linear.apply(-0.5), 0.0);
        assert_eq!(Easing::Linear.apply(1.5), 1.0);
    }
}
