//! Compile-time product and quotient of dimensions

use super::{Dimension, SiUnit};
use std::ops::{Add, Sub};
use typenum::{Diff, Integer, Sum};

/// Dimension of `Self * Rhs`: exponents are added element-wise.
pub trait Product<Rhs: Dimension>: Dimension {
    type Output: Dimension;
}

/// Dimension of `Self / Rhs`: exponents are subtracted element-wise.
pub trait Quotient<Rhs: Dimension>: Dimension {
    type Output: Dimension;
}

/// Shorthand for `<A as Product<B>>::Output`
pub type ProductOf<A, B> = <A as Product<B>>::Output;

/// Shorthand for `<A as Quotient<B>>::Output`
pub type QuotientOf<A, B> = <A as Quotient<B>>::Output;

impl<L1, M1, T1, I1, Th1, N1, J1, L2, M2, T2, I2, Th2, N2, J2>
    Product<SiUnit<L2, M2, T2, I2, Th2, N2, J2>> for SiUnit<L1, M1, T1, I1, Th1, N1, J1>
where
    SiUnit<L1, M1, T1, I1, Th1, N1, J1>: Dimension,
    SiUnit<L2, M2, T2, I2, Th2, N2, J2>: Dimension,
    L1: Add<L2>,
    M1: Add<M2>,
    T1: Add<T2>,
    I1: Add<I2>,
    Th1: Add<Th2>,
    N1: Add<N2>,
    J1: Add<J2>,
    Sum<L1, L2>: Integer + Send + Sync + 'static,
    Sum<M1, M2>: Integer + Send + Sync + 'static,
    Sum<T1, T2>: Integer + Send + Sync + 'static,
    Sum<I1, I2>: Integer + Send + Sync + 'static,
    Sum<Th1, Th2>: Integer + Send + Sync + 'static,
    Sum<N1, N2>: Integer + Send + Sync + 'static,
    Sum<J1, J2>: Integer + Send + Sync + 'static,
{
    type Output = SiUnit<
        Sum<L1, L2>,
        Sum<M1, M2>,
        Sum<T1, T2>,
        Sum<I1, I2>,
        Sum<Th1, Th2>,
        Sum<N1, N2>,
        Sum<J1, J2>,
    >;
}

impl<L1, M1, T1, I1, Th1, N1, J1, L2, M2, T2, I2, Th2, N2, J2>
    Quotient<SiUnit<L2, M2, T2, I2, Th2, N2, J2>> for SiUnit<L1, M1, T1, I1, Th1, N1, J1>
where
    SiUnit<L1, M1, T1, I1, Th1, N1, J1>: Dimension,
    SiUnit<L2, M2, T2, I2, Th2, N2, J2>: Dimension,
    L1: Sub<L2>,
    M1: Sub<M2>,
    T1: Sub<T2>,
    I1: Sub<I2>,
    Th1: Sub<Th2>,
    N1: Sub<N2>,
    J1: Sub<J2>,
    Diff<L1, L2>: Integer + Send + Sync + 'static,
    Diff<M1, M2>: Integer + Send + Sync + 'static,
    Diff<T1, T2>: Integer + Send + Sync + 'static,
    Diff<I1, I2>: Integer + Send + Sync + 'static,
    Diff<Th1, Th2>: Integer + Send + Sync + 'static,
    Diff<N1, N2>: Integer + Send + Sync + 'static,
    Diff<J1, J2>: Integer + Send + Sync + 'static,
{
    type Output = SiUnit<
        Diff<L1, L2>,
        Diff<M1, M2>,
        Diff<T1, T2>,
        Diff<I1, I2>,
        Diff<Th1, Th2>,
        Diff<N1, N2>,
        Diff<J1, J2>,
    >;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::Exponents;
    use crate::units::{
        Ampere, Candela, Dimensionless, Hertz, Kelvin, Kilogram, Meter, MeterPerSecond, Mole,
        Newton, Second,
    };
    use std::marker::PhantomData;

    fn same_type<T>(_: PhantomData<T>, _: PhantomData<T>) {}

    #[test]
    fn test_quotient_of_length_and_time() {
        assert_eq!(
            <QuotientOf<Meter, Second>>::EXPONENTS,
            Exponents::new([1, 0, -1, 0, 0, 0, 0])
        );
        same_type(
            PhantomData::<QuotientOf<Meter, Second>>,
            PhantomData::<MeterPerSecond>,
        );
    }

    #[test]
    fn test_product_of_force_and_length() {
        assert_eq!(
            <ProductOf<Newton, Meter>>::EXPONENTS,
            Exponents::new([2, 1, -2, 0, 0, 0, 0])
        );
    }

    #[test]
    fn test_reciprocal() {
        same_type(
            PhantomData::<QuotientOf<Dimensionless, Second>>,
            PhantomData::<Hertz>,
        );
    }

    #[test]
    fn test_product_then_quotient_round_trips() {
        fn round_trip<A, B>() -> Exponents
        where
            A: Product<B>,
            B: Dimension,
            ProductOf<A, B>: Quotient<B>,
        {
            <QuotientOf<ProductOf<A, B>, B>>::EXPONENTS
        }

        assert_eq!(round_trip::<Newton, Meter>(), Newton::EXPONENTS);
        assert_eq!(round_trip::<Kelvin, Hertz>(), Kelvin::EXPONENTS);
        assert_eq!(round_trip::<Kilogram, Ampere>(), Kilogram::EXPONENTS);
        assert_eq!(round_trip::<Mole, Candela>(), Mole::EXPONENTS);
        assert_eq!(round_trip::<Dimensionless, Newton>(), Dimensionless::EXPONENTS);

        same_type(
            PhantomData::<QuotientOf<ProductOf<Newton, Meter>, Meter>>,
            PhantomData::<Newton>,
        );
    }
}
