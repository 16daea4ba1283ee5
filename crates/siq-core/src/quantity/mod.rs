//! Quantities: a magnitude tagged with its dimension
//!
//! The magnitude is always stored in base SI units (meters, kilograms,
//! seconds, ...). The dimension lives only in the type, so a
//! `Quantity<D, f64>` is exactly as large as an `f64`.

mod duration;
mod ops;
mod scalar;
mod tolerance;

pub use scalar::{Promote, Promoted, Scalar};
pub use tolerance::ComparisonMode;

use crate::dimension::Dimension;
use crate::error::Error;
use crate::parser::parse_literal;
use crate::symbols::{parse, SymbolRegistry};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// A value of dimension `D` stored as `V` in base SI units
pub struct Quantity<D: Dimension, V = f64> {
    value: V,
    dimension: PhantomData<D>,
}

impl<D: Dimension, V: Scalar> Quantity<D, V> {
    /// Create a quantity from a magnitude already in base units
    pub fn new(value: V) -> Self {
        debug_assert!(
            value.is_finite(),
            "quantity magnitude must be finite, got {value}"
        );
        Self {
            value,
            dimension: PhantomData,
        }
    }

    /// Magnitude in base units
    pub fn value(&self) -> V {
        self.value
    }

    /// Same quantity stored in another representation
    pub fn cast<W: Scalar>(self) -> Quantity<D, W> {
        Quantity::new(W::from_f64(self.value.to_f64()))
    }
}

impl<D: Dimension, V: Scalar> Clone for Quantity<D, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Dimension, V: Scalar> Copy for Quantity<D, V> {}

impl<D: Dimension, V: Scalar> Default for Quantity<D, V> {
    fn default() -> Self {
        Self::new(V::zero())
    }
}

impl<D: Dimension, V: Scalar> fmt::Debug for Quantity<D, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("value", &self.value)
            .field("dimension", &D::EXPONENTS)
            .finish()
    }
}

impl<D: Dimension, V: Scalar> Quantity<D, V> {
    /// Parse a literal, accepting the symbols of `registry` rather than the
    /// global ones
    pub fn parse_with(s: &str, registry: &SymbolRegistry) -> Result<Self, Error> {
        Self::from_literal(s, |token| {
            parse::factor_to_base_with(registry, D::EXPONENTS, token)
        })
    }

    fn from_literal(
        s: &str,
        factor_to_base: impl FnOnce(&str) -> Result<f64, Error>,
    ) -> Result<Self, Error> {
        let literal = parse_literal(s)?;
        let number: f64 = literal
            .number
            .parse()
            .map_err(|e| Error::invalid_literal(s, e))?;
        let factor = match literal.symbol {
            Some(symbol) => factor_to_base(symbol)?,
            None => 1.0,
        };
        let value = V::from_f64(number * factor);
        if !value.is_finite() {
            return Err(Error::invalid_literal(s, "magnitude out of range"));
        }
        Ok(Self::new(value))
    }
}

/// Magnitude, one space, then the symbol from the global registry.
/// Width and precision apply to the magnitude.
impl<D: Dimension, V: Scalar> fmt::Display for Quantity<D, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = SymbolRegistry::global().lock().format(D::EXPONENTS, None);
        fmt::Display::fmt(&self.value, f)?;
        write!(f, " {symbol}")
    }
}

/// Symbols unknown to the parse rules are checked against the global
/// registry, which is locked for that. Use [`Quantity::parse_with`] while
/// holding the global lock.
impl<D: Dimension, V: Scalar> FromStr for Quantity<D, V> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_literal(s, |token| parse::factor_to_base(D::EXPONENTS, token))
    }
}

impl<D: Dimension, V: Scalar> Serialize for Quantity<D, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, D: Dimension, V: Scalar> Deserialize<'de> for Quantity<D, V> {
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        V::deserialize(deserializer).map(Self::new)
    }
}
