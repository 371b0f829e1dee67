use core::fmt::Debug;

use num_traits::{Bounded, Num};

use crate::GkError;

/// Floating point type used for ranks and tolerances.
pub type Real = f64;

/// Numeric bound for edge weights, capacities and distances.
///
/// `Bounded::max_value()` doubles as the "infinite" distance sentinel.
pub trait Scalar: Copy + PartialOrd + Num + Bounded + Debug + Send + Sync + 'static {}

impl<T> Scalar for T where T: Copy + PartialOrd + Num + Bounded + Debug + Send + Sync + 'static {}

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, GkError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(GkError::NonFinite { what, value: v })
    }
}

/// Total order over a partially ordered scalar; incomparable values (NaN) compare equal.
pub fn cmp_scalar<T: PartialOrd>(a: &T, b: &T) -> core::cmp::Ordering {
    a.partial_cmp(b).unwrap_or(core::cmp::Ordering::Equal)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn nearly_equal_is_symmetric(a in -1e6_f64..1e6, b in -1e6_f64..1e6) {
            let tol = Tolerances { abs: 1e-9, rel: 1e-6 };
            prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
            prop_assert!(nearly_equal(a, a, tol));
        }

        #[test]
        fn cmp_scalar_matches_partial_order_on_finite(a in -1e6_f64..1e6, b in -1e6_f64..1e6) {
            prop_assert_eq!(Some(cmp_scalar(&a, &b)), a.partial_cmp(&b));
        }
    }
}
