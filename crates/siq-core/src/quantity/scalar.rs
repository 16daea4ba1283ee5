//! Numeric representations a quantity can be stored in

use approx::{RelativeEq, UlpsEq};
use num_traits::Float;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};

/// Floating-point representation backing a [`Quantity`](super::Quantity).
pub trait Scalar:
    Float
    + RelativeEq<Epsilon = Self>
    + UlpsEq<Epsilon = Self>
    + Debug
    + Display
    + Default
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    /// Name used for reflection, e.g. "f64"
    const NAME: &'static str;

    fn from_f64(value: f64) -> Self;

    fn to_f64(self) -> f64;
}

impl Scalar for f64 {
    const NAME: &'static str = "f64";

    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64(self) -> f64 {
        self
    }
}

impl Scalar for f32 {
    const NAME: &'static str = "f32";

    #[allow(clippy::cast_possible_truncation)]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

/// Common representation of two operands.
///
/// Mixing `f32` and `f64` always widens to `f64`.
pub trait Promote<Rhs: Scalar>: Scalar {
    type Output: Scalar + From<Self> + From<Rhs>;
}

impl Promote<f32> for f32 {
    type Output = f32;
}

impl Promote<f64> for f32 {
    type Output = f64;
}

impl Promote<f32> for f64 {
    type Output = f64;
}

impl Promote<f64> for f64 {
    type Output = f64;
}

/// Shorthand for `<L as Promote<R>>::Output`
pub type Promoted<L, R> = <L as Promote<R>>::Output;
