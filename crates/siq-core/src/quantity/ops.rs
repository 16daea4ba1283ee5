//! Arithmetic and comparison operators
//!
//! Addition, subtraction and comparison exist only for identical
//! dimensions; there is simply no impl for anything else, so mixing a
//! length with a time does not compile. Multiplication and division combine
//! dimensions through [`Product`] and [`Quotient`].

use super::{Promote, Promoted, Quantity, Scalar};
use crate::dimension::{Dimension, Product, ProductOf, Quotient, QuotientOf};
use crate::units::Dimensionless;
use std::cmp::Ordering;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl<D, L, R> Add<Quantity<D, R>> for Quantity<D, L>
where
    D: Dimension,
    L: Promote<R>,
    R: Scalar,
{
    type Output = Quantity<D, Promoted<L, R>>;

    fn add(self, rhs: Quantity<D, R>) -> Self::Output {
        let left: Promoted<L, R> = self.value.into();
        let right: Promoted<L, R> = rhs.value.into();
        Quantity::new(left + right)
    }
}

impl<D, L, R> Sub<Quantity<D, R>> for Quantity<D, L>
where
    D: Dimension,
    L: Promote<R>,
    R: Scalar,
{
    type Output = Quantity<D, Promoted<L, R>>;

    fn sub(self, rhs: Quantity<D, R>) -> Self::Output {
        let left: Promoted<L, R> = self.value.into();
        let right: Promoted<L, R> = rhs.value.into();
        Quantity::new(left - right)
    }
}

impl<D: Dimension, V: Scalar> AddAssign for Quantity<D, V> {
    fn add_assign(&mut self, rhs: Self) {
        *self = Quantity::new(self.value + rhs.value);
    }
}

impl<D: Dimension, V: Scalar> SubAssign for Quantity<D, V> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Quantity::new(self.value - rhs.value);
    }
}

impl<D: Dimension, V: Scalar> Neg for Quantity<D, V> {
    type Output = Self;

    fn neg(self) -> Self {
        Quantity::new(-self.value)
    }
}

impl<D: Dimension, V: Scalar> Sum for Quantity<D, V> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, q| Quantity::new(acc.value + q.value))
    }
}

impl<Dl, Dr, L, R> Mul<Quantity<Dr, R>> for Quantity<Dl, L>
where
    Dl: Product<Dr>,
    Dr: Dimension,
    L: Promote<R>,
    R: Scalar,
{
    type Output = Quantity<ProductOf<Dl, Dr>, Promoted<L, R>>;

    fn mul(self, rhs: Quantity<Dr, R>) -> Self::Output {
        let left: Promoted<L, R> = self.value.into();
        let right: Promoted<L, R> = rhs.value.into();
        Quantity::new(left * right)
    }
}

impl<Dl, Dr, L, R> Div<Quantity<Dr, R>> for Quantity<Dl, L>
where
    Dl: Quotient<Dr>,
    Dr: Dimension,
    L: Promote<R>,
    R: Scalar,
{
    type Output = Quantity<QuotientOf<Dl, Dr>, Promoted<L, R>>;

    fn div(self, rhs: Quantity<Dr, R>) -> Self::Output {
        let left: Promoted<L, R> = self.value.into();
        let right: Promoted<L, R> = rhs.value.into();
        Quantity::new(left / right)
    }
}

/// Scaling by a bare number, in both operand orders
macro_rules! scalar_ops {
    ($($scalar:ty),*) => {$(
        impl<D: Dimension> Mul<$scalar> for Quantity<D, $scalar> {
            type Output = Self;

            fn mul(self, rhs: $scalar) -> Self {
                Quantity::new(self.value * rhs)
            }
        }

        impl<D: Dimension> Mul<Quantity<D, $scalar>> for $scalar {
            type Output = Quantity<D, $scalar>;

            fn mul(self, rhs: Quantity<D, $scalar>) -> Self::Output {
                Quantity::new(self * rhs.value)
            }
        }

        impl<D: Dimension> Div<$scalar> for Quantity<D, $scalar> {
            type Output = Self;

            fn div(self, rhs: $scalar) -> Self {
                Quantity::new(self.value / rhs)
            }
        }

        /// A number divided by a quantity has the reciprocal dimension
        impl<D> Div<Quantity<D, $scalar>> for $scalar
        where
            D: Dimension,
            Dimensionless: Quotient<D>,
        {
            type Output = Quantity<QuotientOf<Dimensionless, D>, $scalar>;

            fn div(self, rhs: Quantity<D, $scalar>) -> Self::Output {
                Quantity::new(self / rhs.value)
            }
        }

        impl<D: Dimension> MulAssign<$scalar> for Quantity<D, $scalar> {
            fn mul_assign(&mut self, rhs: $scalar) {
                *self = Quantity::new(self.value * rhs);
            }
        }

        impl<D: Dimension> DivAssign<$scalar> for Quantity<D, $scalar> {
            fn div_assign(&mut self, rhs: $scalar) {
                *self = Quantity::new(self.value / rhs);
            }
        }
    )*};
}

scalar_ops!(f32, f64);

impl<D, L, R> PartialEq<Quantity<D, R>> for Quantity<D, L>
where
    D: Dimension,
    L: Promote<R>,
    R: Scalar,
{
    fn eq(&self, other: &Quantity<D, R>) -> bool {
        let left: Promoted<L, R> = self.value.into();
        let right: Promoted<L, R> = other.value.into();
        left == right
    }
}

impl<D, L, R> PartialOrd<Quantity<D, R>> for Quantity<D, L>
where
    D: Dimension,
    L: Promote<R>,
    R: Scalar,
{
    fn partial_cmp(&self, other: &Quantity<D, R>) -> Option<Ordering> {
        let left: Promoted<L, R> = self.value.into();
        let right: Promoted<L, R> = other.value.into();
        left.partial_cmp(&right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::Exponents;
    use crate::units::{Frequency, Length, MeterPerSecond, Temperature, Time, Velocity};

    #[test]
    fn test_add_sub_round_trip() {
        let a = Length::<f64>::new(10.0);
        let b = Length::<f64>::new(2.5);
        assert_eq!((a + b) - b, a);
        assert_eq!((a - b).value(), 7.5);
    }

    #[test]
    fn test_division_changes_dimension() {
        let length = Length::<f64>::new(10.0);
        let time = Time::<f64>::new(2.0);
        let velocity: Velocity = length / time;
        assert_eq!(velocity, Velocity::<f64>::new(5.0));
        assert_eq!(
            <MeterPerSecond as Dimension>::EXPONENTS,
            Exponents::new([1, 0, -1, 0, 0, 0, 0])
        );
    }

    #[test]
    fn test_scalar_multiplication_commutes() {
        let velocity = Velocity::<f64>::new(5.0);
        assert_eq!(0.5 * velocity, velocity * 0.5);
        assert_eq!(0.5 * velocity, Velocity::<f64>::new(2.5));
        assert_eq!(velocity / 2.0, Velocity::<f64>::new(2.5));
    }

    #[test]
    fn test_mixed_representations_promote() {
        let length = Length::<f64>::new(10.0);
        let time = Time::<f32>::new(2.0);
        let velocity: Velocity<f64> = length / time;
        assert_eq!(velocity, Velocity::<f64>::new(5.0));

        let sum: Length<f64> = Length::<f32>::new(1.5) + Length::<f64>::new(1.0);
        assert_eq!(sum.value(), 2.5);
    }

    #[test]
    fn test_reciprocal_of_time_is_frequency() {
        let frequency: Frequency = 1.0 / Time::<f64>::new(0.5);
        assert_eq!(frequency.value(), 2.0);
    }

    #[test]
    fn test_negation_and_ordering() {
        let t = Temperature::<f64>::new(3.0);
        assert_eq!((-t).value(), -3.0);
        assert!(-t < t);
        assert!(t >= Temperature::<f32>::new(3.0));
        assert!(t != Temperature::<f64>::new(3.5));
    }

    #[test]
    fn test_assign_ops_and_sum() {
        let mut length = Length::<f64>::new(1.0);
        length += Length::<f64>::new(2.0);
        length -= Length::<f64>::new(0.5);
        length *= 4.0;
        length /= 2.0;
        assert_eq!(length.value(), 5.0);

        let total: Length = [1.0, 2.0, 3.0].into_iter().map(Length::new).sum();
        assert_eq!(total.value(), 6.0);
    }
}
