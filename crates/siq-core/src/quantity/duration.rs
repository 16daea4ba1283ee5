//! Interop between time quantities and [`std::time::Duration`]
//!
//! Conversions go through an integer count of nanoseconds and truncate to
//! that resolution in both directions.

use super::{Quantity, Scalar};
use crate::dimension::{Product, ProductOf, Quotient, QuotientOf};
use crate::error::Error;
use crate::units::Second;
use std::ops::{Add, Div, Mul, Sub};
use std::time::Duration;

const NANOS_PER_SECOND: f64 = 1e9;

impl<V: Scalar> Quantity<Second, V> {
    /// Exact nanosecond count of `duration`, expressed in seconds
    pub fn from_duration(duration: Duration) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let nanos = duration.as_nanos() as f64;
        Self::new(V::from_f64(nanos / NANOS_PER_SECOND))
    }

    /// Convert to a duration, truncating below one nanosecond.
    ///
    /// Fails for negative times and times beyond the range of `Duration`.
    pub fn to_duration(&self) -> Result<Duration, Error> {
        let seconds = self.value.to_f64();
        let nanos = (seconds * NANOS_PER_SECOND).trunc();
        #[allow(clippy::cast_precision_loss)]
        let max = u64::MAX as f64;
        if !nanos.is_finite() || nanos < 0.0 || nanos >= max {
            return Err(Error::DurationOutOfRange { seconds });
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Ok(Duration::from_nanos(nanos as u64))
    }
}

impl<V: Scalar> From<Duration> for Quantity<Second, V> {
    fn from(duration: Duration) -> Self {
        Self::from_duration(duration)
    }
}

impl<V: Scalar> TryFrom<Quantity<Second, V>> for Duration {
    type Error = Error;

    fn try_from(time: Quantity<Second, V>) -> Result<Self, Self::Error> {
        time.to_duration()
    }
}

impl<V: Scalar> Add<Duration> for Quantity<Second, V> {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        Quantity::new(self.value + Self::from_duration(rhs).value)
    }
}

impl<V: Scalar> Add<Quantity<Second, V>> for Duration {
    type Output = Quantity<Second, V>;

    fn add(self, rhs: Quantity<Second, V>) -> Self::Output {
        Quantity::new(Quantity::<Second, V>::from_duration(self).value + rhs.value)
    }
}

impl<V: Scalar> Sub<Duration> for Quantity<Second, V> {
    type Output = Self;

    fn sub(self, rhs: Duration) -> Self {
        Quantity::new(self.value - Self::from_duration(rhs).value)
    }
}

impl<V: Scalar> Sub<Quantity<Second, V>> for Duration {
    type Output = Quantity<Second, V>;

    fn sub(self, rhs: Quantity<Second, V>) -> Self::Output {
        Quantity::new(Quantity::<Second, V>::from_duration(self).value - rhs.value)
    }
}

/// Same as multiplying by the equivalent time quantity
impl<D, V> Mul<Duration> for Quantity<D, V>
where
    D: Product<Second>,
    V: Scalar,
{
    type Output = Quantity<ProductOf<D, Second>, V>;

    fn mul(self, rhs: Duration) -> Self::Output {
        Quantity::new(self.value * Quantity::<Second, V>::from_duration(rhs).value)
    }
}

/// Same as dividing by the equivalent time quantity
impl<D, V> Div<Duration> for Quantity<D, V>
where
    D: Quotient<Second>,
    V: Scalar,
{
    type Output = Quantity<QuotientOf<D, Second>, V>;

    fn div(self, rhs: Duration) -> Self::Output {
        Quantity::new(self.value / Quantity::<Second, V>::from_duration(rhs).value)
    }
}
