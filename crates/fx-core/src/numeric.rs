//! Float helpers for exported and written values.

use crate::error::{FxError, FxResult};

/// Floating point type used throughout the exchange layer.
pub type Real = f64;

/// Two values match when they differ by at most `abs`, or by at most `rel`
/// of the larger magnitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Tolerances {
    /// Tolerance for unit conversion round trips.
    pub const ROUND_TRIP: Self = Self {
        abs: 1e-12,
        rel: 1e-9,
    };

    /// Purely relative tolerance.
    pub const fn relative(rel: Real) -> Self {
        Self { abs: 0.0, rel }
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::ROUND_TRIP
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    diff <= tol.abs || diff <= tol.rel * a.abs().max(b.abs())
}

/// Reject NaN and infinities before they are written anywhere.
pub fn ensure_finite(v: Real, what: &'static str) -> FxResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(FxError::NonFinite { what, value: v })
    }
}

/// The value if it is worth exporting.
///
/// NaN and the infinities are what simulators report for "not calculated",
/// so readers drop them instead of failing.
#[inline]
pub fn meaningful(v: Real) -> Option<Real> {
    v.is_finite().then_some(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn tolerance_bands() {
        let tol = Tolerances::ROUND_TRIP;
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
        assert!(nearly_equal(1e5, 1e5 + 0.5, Tolerances::relative(1e-5)));
        assert!(!nearly_equal(0.0, 1e-300, Tolerances::relative(1e-5)));
    }

    #[test]
    fn ensure_finite_names_the_value() {
        let err = ensure_finite(Real::NAN, "mole fraction").unwrap_err();
        assert!(err.to_string().contains("mole fraction"));
        assert_eq!(ensure_finite(2.5, "x"), Ok(2.5));
    }

    #[test]
    fn only_finite_values_are_meaningful() {
        assert_eq!(meaningful(0.0), Some(0.0));
        assert_eq!(meaningful(-1e300), Some(-1e300));
        assert_eq!(meaningful(Real::NAN), None);
        assert_eq!(meaningful(Real::INFINITY), None);
        assert_eq!(meaningful(Real::NEG_INFINITY), None);
    }

    proptest! {
        #[test]
        fn nearly_equal_is_symmetric(a in -1e12f64..1e12, b in -1e12f64..1e12) {
            let tol = Tolerances::default();
            prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
        }
    }
}
