//! Per-edge property records.
//!
//! Algorithms name the property they consume through a capability trait
//! instead of indexing into a positional tuple.

use gk_core::Scalar;

/// Edge properties that carry a numeric weight.
pub trait EdgeWeight {
    type Weight: Scalar;

    fn weight(&self) -> Self::Weight;
}

macro_rules! impl_scalar_weight {
    ($($t:ty),* $(,)?) => {
        $(
            impl EdgeWeight for $t {
                type Weight = $t;

                #[inline]
                fn weight(&self) -> $t {
                    *self
                }
            }
        )*
    };
}

impl_scalar_weight!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

/// Unweighted edges count as weight one.
impl EdgeWeight for () {
    type Weight = u32;

    #[inline]
    fn weight(&self) -> u32 {
        1
    }
}

/// Capacity/flow pair consumed by max-flow.
///
/// `flow` may go negative on a reverse arc while flow is being cancelled;
/// it never exceeds `capacity`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowEdge<C> {
    pub capacity: C,
    pub flow: C,
}

impl<C: Scalar> FlowEdge<C> {
    /// A fresh arc carrying no flow.
    pub fn with_capacity(capacity: C) -> Self {
        Self {
            capacity,
            flow: C::zero(),
        }
    }

    /// Capacity minus current flow.
    #[inline]
    pub fn residual(&self) -> C {
        self.capacity - self.flow
    }
}

impl<C: Scalar> EdgeWeight for FlowEdge<C> {
    type Weight = C;

    #[inline]
    fn weight(&self) -> C {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_weight_is_itself() {
        assert_eq!(7_u32.weight(), 7);
        assert_eq!(2.5_f64.weight(), 2.5);
    }

    #[test]
    fn unit_weight_is_one() {
        assert_eq!(().weight(), 1);
    }

    #[test]
    fn flow_edge_residual() {
        let mut e = FlowEdge::with_capacity(10_i64);
        assert_eq!(e.residual(), 10);
        e.flow = 4;
        assert_eq!(e.residual(), 6);
        e.flow = -3;
        assert_eq!(e.residual(), 13);
        assert_eq!(e.weight(), 10);
    }
}
