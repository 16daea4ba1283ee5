//! Resolving a textual symbol into a scale factor to base units
//!
//! To accept a new symbol for a quantity, add it to the `custom` list of
//! that dimension's entry in [`PARSE_RULES`]. Dimensions without an entry
//! accept only the symbol they are displayed with.

use super::{canonical_symbol, SymbolRegistry};
use crate::dimension::{Dimension, Exponents};
use crate::error::Error;
use crate::units::{
    prefix, Ampere, Candela, Hertz, Kelvin, Kilogram, Meter, MeterPerSecond, Mole, Newton, Pascal,
    Second,
};

/// How symbols of one dimension are parsed
pub struct ParseRule {
    pub dimension: Exponents,
    /// Symbol that SI prefixes attach to (e.g. "g" for mass)
    pub base_symbol: &'static str,
    /// Size of one `base_symbol` in base SI units
    pub base_factor: f64,
    /// Additional symbols with their size in `base_symbol` units
    pub custom: &'static [(&'static str, f64)],
}

pub static PARSE_RULES: &[ParseRule] = &[
    ParseRule {
        dimension: <Meter as Dimension>::EXPONENTS,
        base_symbol: "m",
        base_factor: 1.0,
        custom: &[],
    },
    ParseRule {
        dimension: <Kilogram as Dimension>::EXPONENTS,
        base_symbol: "g",
        base_factor: 1e-3,
        custom: &[("t", 1e6)],
    },
    ParseRule {
        dimension: <Second as Dimension>::EXPONENTS,
        base_symbol: "s",
        base_factor: 1.0,
        custom: &[("h", 3600.0), ("min", 60.0)],
    },
    ParseRule {
        dimension: <Ampere as Dimension>::EXPONENTS,
        base_symbol: "A",
        base_factor: 1.0,
        custom: &[],
    },
    ParseRule {
        dimension: <Kelvin as Dimension>::EXPONENTS,
        base_symbol: "K",
        base_factor: 1.0,
        custom: &[],
    },
    ParseRule {
        dimension: <Mole as Dimension>::EXPONENTS,
        base_symbol: "mol",
        base_factor: 1.0,
        custom: &[],
    },
    ParseRule {
        dimension: <Candela as Dimension>::EXPONENTS,
        base_symbol: "cd",
        base_factor: 1.0,
        custom: &[],
    },
    ParseRule {
        dimension: <Hertz as Dimension>::EXPONENTS,
        base_symbol: "Hz",
        base_factor: 1.0,
        custom: &[("1/s", 1.0)],
    },
    ParseRule {
        dimension: <Newton as Dimension>::EXPONENTS,
        base_symbol: "N",
        base_factor: 1.0,
        custom: &[],
    },
    ParseRule {
        dimension: <Pascal as Dimension>::EXPONENTS,
        base_symbol: "Pa",
        base_factor: 1.0,
        custom: &[],
    },
    ParseRule {
        dimension: <MeterPerSecond as Dimension>::EXPONENTS,
        base_symbol: "m/s",
        base_factor: 1.0,
        custom: &[("km/h", 1.0 / 3.6)],
    },
];

impl ParseRule {
    /// Factor of `token` in base SI units, `Ok(None)` if the rule does not
    /// know the token
    fn resolve(&self, token: &str) -> Result<Option<f64>, Error> {
        if token == self.base_symbol {
            return Ok(Some(self.base_factor));
        }

        if let Some(head) = token.strip_suffix(self.base_symbol) {
            let mut chars = head.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                return match prefix::factor(c) {
                    Some(factor) => Ok(Some(factor * self.base_factor)),
                    None => Err(Error::UnknownPrefix {
                        token: token.to_string(),
                    }),
                };
            }
            // ASCII spelling of micro
            if head == "mc" {
                return Ok(Some(prefix::MICRO * self.base_factor));
            }
        }

        Ok(self
            .custom
            .iter()
            .find(|(symbol, _)| *symbol == token)
            .map(|(_, factor)| factor * self.base_factor))
    }
}

/// Scale factor turning a number given in `token` units into base SI units
/// of dimension `exponents`.
///
/// A token that matches no rule is still accepted if it is how the global
/// registry displays `exponents`. Only then is the global registry locked,
/// so do not call this while holding that lock; use
/// [`factor_to_base_with`] instead.
pub fn factor_to_base(exponents: Exponents, token: &str) -> Result<f64, Error> {
    resolve_token(exponents, token, || {
        SymbolRegistry::global().lock().format(exponents, None)
    })
}

/// [`factor_to_base`] accepting the renderings of `registry` instead of the
/// global one
pub fn factor_to_base_with(
    registry: &SymbolRegistry,
    exponents: Exponents,
    token: &str,
) -> Result<f64, Error> {
    resolve_token(exponents, token, || registry.format(exponents, None))
}

fn resolve_token(
    exponents: Exponents,
    token: &str,
    registered: impl FnOnce() -> String,
) -> Result<f64, Error> {
    let token = token.trim();
    let rule = PARSE_RULES.iter().find(|rule| rule.dimension == exponents);

    let mut rejected = None;
    if let Some(rule) = rule {
        match rule.resolve(token) {
            Ok(Some(factor)) => return Ok(factor),
            Ok(None) => {}
            Err(e) => rejected = Some(e),
        }
    }

    // Whatever Display prints parses back
    if canonical_symbol(exponents) == token || registered() == token {
        return Ok(1.0);
    }

    Err(rejected.unwrap_or_else(|| Error::UnknownSymbol {
        token: token.to_string(),
        accepted: match rule {
            Some(rule) => rule.base_symbol.to_string(),
            None => canonical_symbol(exponents),
        },
    }))
}
