//! Easing functions for timeline interpolation.
//!
//! Curves map normalized progress in [0, 1] to eased progress in [0, 1].
//! The `power1` family is quadratic; `power2` is cubic.

/// Easing function variants for tween curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end). `power1.in`.
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end). `power1.out`, the default.
    #[default]
    QuadraticOut,
    /// Quadratic ease-in-out. `power1.inOut`.
    QuadraticInOut,
    /// Cubic ease-out. `power2.out`.
    CubicOut,
}

impl EasingFunction {
    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::QuadraticIn => t * t,
            Self::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Self::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let omt = 1.0 - t;
                    1.0 - 2.0 * omt * omt
                }
            }
            Self::CubicOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt * omt
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_input_clamping() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(-0.5), 0.0);
        assert_eq!(linear.evaluate(1.5), 1.0);

        let out = EasingFunction::QuadraticOut;
        assert_eq!(out.evaluate(-0.5), 0.0);
        assert_eq!(out.evaluate(1.5), 1.0);
    }

    #[test]
    fn test_quadratic_in() {
        let quad_in = EasingFunction::QuadraticIn;
        assert_eq!(quad_in.evaluate(0.0), 0.0);
        assert_eq!(quad_in.evaluate(0.5), 0.25);
        assert_eq!(quad_in.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_quadratic_out() {
        let quad_out = EasingFunction::QuadraticOut;
        assert_eq!(quad_out.evaluate(0.0), 0.0);
        assert_eq!(quad_out.evaluate(0.5), 0.75); // 1 - (1-0.5)² = 0.75
        assert_eq!(quad_out.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_quadratic_in_out_is_symmetric() {
        let f = EasingFunction::QuadraticInOut;
        assert_eq!(f.evaluate(0.5), 0.5);
        assert!((f.evaluate(0.25) + f.evaluate(0.75) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cubic_out() {
        let f = EasingFunction::CubicOut;
        assert_eq!(f.evaluate(0.5), 0.875);
        assert_eq!(f.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_ease_out_decelerates() {
        let f = EasingFunction::QuadraticOut;
        let first_half = f.evaluate(0.5) - f.evaluate(0.0);
        let second_half = f.evaluate(1.0) - f.evaluate(0.5);
        assert!(first_half > second_half);
    }

    #[test]
    fn test_default_is_power1_out() {
        assert_eq!(EasingFunction::default(), EasingFunction::QuadraticOut);
    }
}
