//! Approximate comparison of quantities

use super::{Promote, Quantity, Scalar};
use crate::dimension::Dimension;
use approx::{AbsDiffEq, RelativeEq, UlpsEq};

/// How the tolerance of [`Quantity::approx_eq`] is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComparisonMode {
    /// `|a - b| <= tolerance`
    #[default]
    AbsoluteError,
    /// `|a - b| <= tolerance * max(|a|, |b|)`
    RelativeError,
}

impl<D: Dimension, V: Scalar> Quantity<D, V> {
    /// Compare magnitudes within `tolerance` under `mode`
    pub fn approx_eq(&self, other: &Self, tolerance: V, mode: ComparisonMode) -> bool {
        match mode {
            ComparisonMode::AbsoluteError => self.value.abs_diff_eq(&other.value, tolerance),
            ComparisonMode::RelativeError => {
                self.value
                    .relative_eq(&other.value, V::default_epsilon(), tolerance)
            }
        }
    }
}

impl<D: Dimension, V: Promote<V>> AbsDiffEq for Quantity<D, V> {
    type Epsilon = V;

    fn default_epsilon() -> V {
        V::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: V) -> bool {
        self.value.abs_diff_eq(&other.value, epsilon)
    }
}

impl<D: Dimension, V: Promote<V>> RelativeEq for Quantity<D, V> {
    fn default_max_relative() -> V {
        V::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: V, max_relative: V) -> bool {
        self.value.relative_eq(&other.value, epsilon, max_relative)
    }
}

impl<D: Dimension, V: Promote<V>> UlpsEq for Quantity<D, V> {
    fn default_max_ulps() -> u32 {
        V::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: V, max_ulps: u32) -> bool {
        self.value.ulps_eq(&other.value, epsilon, max_ulps)
    }
}
