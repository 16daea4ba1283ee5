//! SI dimensions as types
//!
//! A dimension is the vector of exponents over the seven SI base dimensions.
//! At the type level it is an [`SiUnit`] whose parameters are `typenum`
//! integers, so the compiler can tell a length from a time. At runtime the
//! same vector is available as [`Exponents`] through [`Dimension::EXPONENTS`].

mod algebra;

pub use algebra::{Product, ProductOf, Quotient, QuotientOf};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Index, Neg, Sub};
use typenum::Integer;

/// Number of SI base dimensions
pub const BASE_DIMENSIONS: usize = 7;

/// Largest absolute exponent accepted from configuration files and the
/// command line
pub const MAX_EXPONENT: i32 = 1000;

/// The seven SI base dimensions, in exponent order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseDimension {
    Length,
    Mass,
    Time,
    ElectricCurrent,
    Temperature,
    AmountOfSubstance,
    LuminousIntensity,
}

impl BaseDimension {
    /// All base dimensions in exponent order
    pub const ALL: [BaseDimension; BASE_DIMENSIONS] = [
        BaseDimension::Length,
        BaseDimension::Mass,
        BaseDimension::Time,
        BaseDimension::ElectricCurrent,
        BaseDimension::Temperature,
        BaseDimension::AmountOfSubstance,
        BaseDimension::LuminousIntensity,
    ];

    /// Position of this dimension inside an exponent vector
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Runtime dimension vector: one exponent per base dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Exponents([i32; BASE_DIMENSIONS]);

impl Exponents {
    /// The dimension of a pure number
    pub const DIMENSIONLESS: Exponents = Exponents([0; BASE_DIMENSIONS]);

    pub const fn new(exponents: [i32; BASE_DIMENSIONS]) -> Self {
        Self(exponents)
    }

    /// Vector with exponent 1 for `dimension` and 0 elsewhere
    pub const fn base(dimension: BaseDimension) -> Self {
        let mut exponents = [0; BASE_DIMENSIONS];
        exponents[dimension.index()] = 1;
        Self(exponents)
    }

    pub const fn as_array(&self) -> &[i32; BASE_DIMENSIONS] {
        &self.0
    }

    pub fn get(&self, dimension: BaseDimension) -> i32 {
        self.0[dimension.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.0.iter().copied()
    }

    pub fn is_dimensionless(&self) -> bool {
        self.0.iter().all(|e| *e == 0)
    }

    /// Sum of the absolute exponents; how "complex" a unit is
    pub fn total_magnitude(&self) -> u64 {
        self.0.iter().map(|e| u64::from(e.unsigned_abs())).sum()
    }
}

impl From<[i32; BASE_DIMENSIONS]> for Exponents {
    fn from(exponents: [i32; BASE_DIMENSIONS]) -> Self {
        Self(exponents)
    }
}

impl Index<BaseDimension> for Exponents {
    type Output = i32;

    fn index(&self, dimension: BaseDimension) -> &i32 {
        &self.0[dimension.index()]
    }
}

impl Add for Exponents {
    type Output = Exponents;

    fn add(self, rhs: Exponents) -> Exponents {
        Exponents(std::array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}

impl Sub for Exponents {
    type Output = Exponents;

    fn sub(self, rhs: Exponents) -> Exponents {
        Exponents(std::array::from_fn(|i| self.0[i] - rhs.0[i]))
    }
}

impl Neg for Exponents {
    type Output = Exponents;

    fn neg(self) -> Exponents {
        Exponents(self.0.map(|e| -e))
    }
}

impl fmt::Display for Exponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{e}")?;
        }
        write!(f, ")")
    }
}

/// A dimension known at compile time.
///
/// Implemented by [`SiUnit`]; the associated types are the `typenum`
/// exponents, [`Dimension::EXPONENTS`] is their runtime value.
pub trait Dimension: Copy + Send + Sync + 'static {
    type Length: Integer;
    type Mass: Integer;
    type Time: Integer;
    type ElectricCurrent: Integer;
    type Temperature: Integer;
    type AmountOfSubstance: Integer;
    type LuminousIntensity: Integer;

    const EXPONENTS: Exponents = Exponents([
        <Self::Length as Integer>::I32,
        <Self::Mass as Integer>::I32,
        <Self::Time as Integer>::I32,
        <Self::ElectricCurrent as Integer>::I32,
        <Self::Temperature as Integer>::I32,
        <Self::AmountOfSubstance as Integer>::I32,
        <Self::LuminousIntensity as Integer>::I32,
    ]);
}

/// Type-level dimension vector.
///
/// Parameters are exponents of length, mass, time, electric current,
/// temperature, amount of substance and luminous intensity.
pub struct SiUnit<L, M, T, I, Th, N, J>(PhantomData<(L, M, T, I, Th, N, J)>);

impl<L, M, T, I, Th, N, J> SiUnit<L, M, T, I, Th, N, J> {
    pub const fn new() -> Self {
        SiUnit(PhantomData)
    }
}

impl<L, M, T, I, Th, N, J> Clone for SiUnit<L, M, T, I, Th, N, J> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L, M, T, I, Th, N, J> Copy for SiUnit<L, M, T, I, Th, N, J> {}

impl<L, M, T, I, Th, N, J> Default for SiUnit<L, M, T, I, Th, N, J> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L, M, T, I, Th, N, J> fmt::Debug for SiUnit<L, M, T, I, Th, N, J>
where
    Self: Dimension,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SiUnit{}", Self::EXPONENTS)
    }
}

impl<L, M, T, I, Th, N, J> Dimension for SiUnit<L, M, T, I, Th, N, J>
where
    L: Integer + Send + Sync + 'static,
    M: Integer + Send + Sync + 'static,
    T: Integer + Send + Sync + 'static,
    I: Integer + Send + Sync + 'static,
    Th: Integer + Send + Sync + 'static,
    N: Integer + Send + Sync + 'static,
    J: Integer + Send + Sync + 'static,
{
    type Length = L;
    type Mass = M;
    type Time = T;
    type ElectricCurrent = I;
    type Temperature = Th;
    type AmountOfSubstance = N;
    type LuminousIntensity = J;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Hertz, Kelvin, Meter, Mole, Newton, Pascal};

    #[test]
    fn test_type_level_exponents() {
        assert_eq!(Meter::EXPONENTS, Exponents::new([1, 0, 0, 0, 0, 0, 0]));
        assert_eq!(Kelvin::EXPONENTS, Exponents::base(BaseDimension::Temperature));
        assert_eq!(Mole::EXPONENTS[BaseDimension::AmountOfSubstance], 1);
        assert_eq!(Hertz::EXPONENTS, Exponents::new([0, 0, -1, 0, 0, 0, 0]));
        assert_eq!(Pascal::EXPONENTS, Exponents::new([-1, 1, -2, 0, 0, 0, 0]));
    }

    #[test]
    fn test_runtime_algebra() {
        let force = Newton::EXPONENTS;
        let length = Meter::EXPONENTS;
        assert_eq!(force + length - length, force);
        assert_eq!(-(force + length), Exponents::new([-2, -1, 2, 0, 0, 0, 0]));
    }

    #[test]
    fn test_total_magnitude() {
        assert_eq!(Exponents::DIMENSIONLESS.total_magnitude(), 0);
        assert_eq!(Newton::EXPONENTS.total_magnitude(), 4);
        assert!(Exponents::DIMENSIONLESS.is_dimensionless());
        assert!(!Hertz::EXPONENTS.is_dimensionless());
        assert_eq!(
            Exponents::new([i32::MAX, i32::MAX, i32::MIN, 0, 0, 0, 0]).total_magnitude(),
            3 * 2_147_483_647 + 1
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Pascal::EXPONENTS.to_string(), "(-1, 1, -2, 0, 0, 0, 0)");
    }
}
