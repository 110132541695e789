use std::cmp::Ordering;

use thiserror::Error;

/// Errors that can occur when validating the endpoints of a bracket.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    #[error("bracket endpoints must be finite")]
    NonFinite,

    #[error("bracket endpoints must differ")]
    ZeroWidth,
}

/// Checks that both endpoints are finite and distinct, returning them as
/// `[a, b]` with `a < b`.
pub(super) fn ordered(bracket: [f64; 2]) -> Result<[f64; 2], BracketError> {
    let [x, y] = bracket;
    if !x.is_finite() || !y.is_finite() {
        return Err(BracketError::NonFinite);
    }

    match x.partial_cmp(&y) {
        Some(Ordering::Less) => Ok([x, y]),
        Some(Ordering::Greater) => Ok([y, x]),
        _ => Err(BracketError::ZeroWidth),
    }
}

/// Sign of a function value, with zero kept apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    fn of(value: f64) -> Self {
        if value > 0.0 {
            Self::Positive
        } else if value < 0.0 {
            Self::Negative
        } else {
            Self::Zero
        }
    }
}

/// The shrinking interval `[a, b]` and the sign of `f(a)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Interval {
    a: f64,
    b: f64,
    sign_a: Sign,
}

impl Interval {
    /// Returns `None` when `fa` and `fb` are both strictly positive or both
    /// strictly negative. A zero at either end is accepted.
    pub(super) fn new([a, b]: [f64; 2], fa: f64, fb: f64) -> Option<Self> {
        let (sign_a, sign_b) = (Sign::of(fa), Sign::of(fb));
        if sign_a == sign_b && sign_a != Sign::Zero {
            return None;
        }
        Some(Self { a, b, sign_a })
    }

    pub(super) fn ends(&self) -> [f64; 2] {
        [self.a, self.b]
    }

    pub(super) fn midpoint(&self) -> f64 {
        (self.a + self.b) / 2.0
    }

    /// Error estimate for the midpoint.
    pub(super) fn half_width(&self) -> f64 {
        (self.b - self.a).abs() / 2.0
    }

    /// Moves `a` to `c` when `f(c)` shares the sign of `f(a)`, otherwise
    /// moves `b` to `c`.
    pub(super) fn keep_half(&mut self, c: f64, fc: f64) {
        if Sign::of(fc) == self.sign_a {
            self.a = c;
        } else {
            self.b = c;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn orders_endpoints() {
        assert_eq!(ordered([3.0, 1.0]), Ok([1.0, 3.0]));
        assert_eq!(ordered([-1.0, 1.0]), Ok([-1.0, 1.0]));
    }

    #[test]
    fn rejects_bad_endpoints() {
        assert_eq!(ordered([f64::NAN, 1.0]), Err(BracketError::NonFinite));
        assert_eq!(ordered([0.0, f64::NEG_INFINITY]), Err(BracketError::NonFinite));
        assert_eq!(ordered([2.0, 2.0]), Err(BracketError::ZeroWidth));
    }

    #[test]
    fn needs_a_sign_change() {
        assert!(Interval::new([0.0, 1.0], 2.0, 0.5).is_none());
        assert!(Interval::new([0.0, 1.0], -2.0, -0.5).is_none());
        assert!(Interval::new([0.0, 1.0], -2.0, 0.5).is_some());
    }

    #[test]
    fn zero_at_an_end_is_a_sign_change() {
        assert!(Interval::new([0.0, 1.0], 0.0, 3.0).is_some());
        assert!(Interval::new([0.0, 1.0], -3.0, 0.0).is_some());
        assert!(Interval::new([0.0, 1.0], 0.0, 0.0).is_some());
    }

    #[test]
    fn keeps_the_half_with_the_sign_change() {
        let mut interval = Interval::new([0.0, 2.0], -1.0, 1.0).unwrap();
        assert_relative_eq!(interval.half_width(), 1.0);

        interval.keep_half(1.0, -0.5);
        assert_eq!(interval.ends(), [1.0, 2.0]);

        interval.keep_half(1.5, 0.25);
        assert_eq!(interval.ends(), [1.0, 1.5]);
        assert_relative_eq!(interval.midpoint(), 1.25);
        assert_relative_eq!(interval.half_width(), 0.25);
    }

    #[test]
    fn zero_at_a_pulls_b_inward() {
        let mut interval = Interval::new([0.0, 1.0], 0.0, 1.0).unwrap();
        interval.keep_half(0.5, 0.25);
        assert_eq!(interval.ends(), [0.0, 0.5]);
    }
}
