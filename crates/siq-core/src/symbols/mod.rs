//! Unit symbols
//!
//! A [`Symbol`] maps a dimension vector to its display text. The built-in
//! tables below are always present; everything else lives in a
//! [`SymbolRegistry`], either globally or scoped to one [`UnitStream`].
//!
//! To add a built-in derived symbol, add an entry to
//! [`DERIVED_UNIT_SYMBOLS`]. Formatting picks it up automatically.

mod format;
pub mod parse;
mod registry;
mod stream;

pub use format::{canonical_symbol, decompose, Decomposition, Factor};
pub use registry::{Persistence, StreamKey, SymbolRegistry};
pub use stream::{UnitStream, UseSymbol};

use crate::dimension::{BaseDimension, Dimension, Exponents};
use crate::units::{Newton, Pascal};
use std::borrow::Cow;
use std::fmt;

/// Display text for one dimension vector
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    exponents: Exponents,
    text: Cow<'static, str>,
}

/// Ordering key used to pick formatting candidates: total exponent
/// magnitude first, then the absolute exponents in dimension order.
///
/// A unit and its reciprocal share a rank.
pub(crate) type Rank = (u64, [u32; crate::dimension::BASE_DIMENSIONS]);

impl Symbol {
    pub const fn builtin(exponents: Exponents, text: &'static str) -> Self {
        Self {
            exponents,
            text: Cow::Borrowed(text),
        }
    }

    pub fn new(exponents: Exponents, text: impl Into<Cow<'static, str>>) -> Self {
        Self {
            exponents,
            text: text.into(),
        }
    }

    /// Symbol for the dimension `D`
    pub fn of<D: Dimension>(text: impl Into<Cow<'static, str>>) -> Self {
        Self::new(D::EXPONENTS, text)
    }

    pub fn exponents(&self) -> Exponents {
        self.exponents
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn rank(&self) -> Rank {
        (
            self.exponents.total_magnitude(),
            self.exponents.as_array().map(i32::unsigned_abs),
        )
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Symbols of the SI base units
pub static BASIC_UNIT_SYMBOLS: &[Symbol] = &[
    Symbol::builtin(Exponents::base(BaseDimension::Length), "m"),
    Symbol::builtin(Exponents::base(BaseDimension::Mass), "kg"),
    Symbol::builtin(Exponents::base(BaseDimension::Time), "s"),
    Symbol::builtin(Exponents::base(BaseDimension::ElectricCurrent), "A"),
    Symbol::builtin(Exponents::base(BaseDimension::Temperature), "K"),
    Symbol::builtin(Exponents::base(BaseDimension::AmountOfSubstance), "mol"),
    Symbol::builtin(Exponents::base(BaseDimension::LuminousIntensity), "cd"),
];

/// Named derived units used when formatting.
///
/// Order matters: of two entries with the same rank only the first takes
/// part in compound formatting (newton wins over pascal).
pub static DERIVED_UNIT_SYMBOLS: &[Symbol] = &[
    Symbol::builtin(<Newton as Dimension>::EXPONENTS, "N"),
    Symbol::builtin(<Pascal as Dimension>::EXPONENTS, "Pa"),
];
