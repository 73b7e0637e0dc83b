//! Closed/open ranges over ray parameters and color channels.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Every non-negative ray parameter, `[0, +inf]`.
    pub const FORWARD: Interval = Interval {
        min: 0.0,
        max: f64::INFINITY,
    };

    /// Displayable color channel range, `[0, 1]`.
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `min <= x <= max`
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// `min < x < max`; used for shadow spans that must exclude both the
    /// shaded point and the light itself.
    #[inline]
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    /// Clamp into the range. NaN clamps to `min`.
    #[inline]
    pub fn clamp(&self, x: f64) -> f64 {
        x.max(self.min).min(self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_accepts_zero_and_far_hits() {
        assert!(Interval::FORWARD.contains(0.0));
        assert!(Interval::FORWARD.contains(1e300));
        assert!(Interval::FORWARD.contains(f64::INFINITY));
        assert!(!Interval::FORWARD.contains(-1e-9));
        assert!(!Interval::FORWARD.contains(f64::NAN));
    }

    #[test]
    fn test_shadow_span_excludes_endpoints() {
        let span = Interval::new(1e-6, 4.0);

        assert!(!span.surrounds(1e-6));
        assert!(!span.surrounds(4.0));
        assert!(!span.surrounds(0.0));
        assert!(span.surrounds(2.0));
        assert!(!span.surrounds(4.5));
    }

    #[test]
    fn test_channel_clamp() {
        assert_eq!(Interval::UNIT.clamp(-5.0), 0.0);
        assert_eq!(Interval::UNIT.clamp(0.5), 0.5);
        assert_eq!(Interval::UNIT.clamp(15.0), 1.0);
    }
}
