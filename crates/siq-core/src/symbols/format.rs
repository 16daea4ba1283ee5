//! Rendering a dimension vector as a symbol string
//!
//! Candidates come in priority order (most recently registered first,
//! built-in tables last). An exact match wins outright. Otherwise the vector
//! is decomposed greedily, most complex candidate first, into a nominator
//! and a denominator, e.g. `K/m^4` or `1/Nm`.

use super::{Symbol, BASIC_UNIT_SYMBOLS, DERIVED_UNIT_SYMBOLS};
use crate::dimension::Exponents;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use tracing::trace;

/// A symbol raised to a positive power
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Factor<'a> {
    pub symbol: &'a Symbol,
    pub power: u32,
}

impl fmt::Display for Factor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.power > 1 {
            write!(f, "{}^{}", self.symbol, self.power)
        } else {
            write!(f, "{}", self.symbol)
        }
    }
}

/// Result of [`decompose`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition<'a> {
    pub nominator: Vec<Factor<'a>>,
    pub denominator: Vec<Factor<'a>>,
    /// Whatever the candidates could not cover; zero whenever the basic
    /// unit symbols were among them
    pub remainder: Exponents,
}

impl fmt::Display for Decomposition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for factor in &self.nominator {
            write!(f, "{factor}")?;
        }
        if !self.denominator.is_empty() {
            f.write_str(if self.nominator.is_empty() { "1/" } else { "/" })?;
            for factor in &self.denominator {
                write!(f, "{factor}")?;
            }
        }
        Ok(())
    }
}

/// How often `candidate` can be taken out of `remaining` without any
/// exponent overshooting past zero. A `sign` of -1 takes it out of the
/// reciprocal instead.
fn multiplicity(candidate: Exponents, remaining: Exponents, sign: i64) -> u32 {
    candidate
        .iter()
        .zip(remaining.iter())
        .filter(|(c, _)| *c != 0)
        .map(|(c, r)| {
            let (c, r) = (sign * i64::from(c), i64::from(r));
            if c.signum() == r.signum() {
                r / c
            } else {
                0
            }
        })
        .min()
        .map_or(0, |power| u32::try_from(power).unwrap_or(u32::MAX))
}

/// Take `symbol` out of `remaining` as often as it fits
fn take<'a>(symbol: &'a Symbol, remaining: &mut Exponents, sign: i64) -> Option<Factor<'a>> {
    let power = multiplicity(symbol.exponents(), *remaining, sign);
    if power == 0 {
        return None;
    }
    let taken = symbol.exponents();
    let before = *remaining.as_array();
    *remaining = Exponents::new(std::array::from_fn(|i| {
        let left = i64::from(before[i]) - sign * i64::from(taken.as_array()[i]) * i64::from(power);
        // Lies between zero and the previous exponent
        i32::try_from(left).unwrap_or(0)
    }));
    Some(Factor { symbol, power })
}

/// Greedy decomposition of `exponents` over `candidates`, tried in the
/// given order.
///
/// Each candidate is first taken into the nominator as often as it fits,
/// then into the denominator. Stops as soon as nothing remains.
/// Dimensionless candidates are ignored.
pub fn decompose<'a>(
    exponents: Exponents,
    candidates: impl IntoIterator<Item = &'a Symbol>,
) -> Decomposition<'a> {
    let mut remaining = exponents;
    let mut nominator = Vec::new();
    let mut denominator = Vec::new();

    for candidate in candidates {
        if remaining.is_dimensionless() {
            break;
        }
        if candidate.exponents().is_dimensionless() {
            continue;
        }
        nominator.extend(take(candidate, &mut remaining, 1));
        denominator.extend(take(candidate, &mut remaining, -1));
    }

    Decomposition {
        nominator,
        denominator,
        remainder: remaining,
    }
}

/// Candidates ordered most complex first, keeping only the first of any
/// run of equal rank
fn ranked<'a>(candidates: impl IntoIterator<Item = &'a Symbol>) -> Vec<&'a Symbol> {
    let mut slots = BTreeMap::new();
    for candidate in candidates {
        if let Entry::Vacant(slot) = slots.entry(candidate.rank()) {
            slot.insert(candidate);
        }
    }
    slots.into_values().rev().collect()
}

/// Render `exponents` with `candidates` in priority order
pub(crate) fn format_with<'a, I>(exponents: Exponents, candidates: I) -> String
where
    I: IntoIterator<Item = &'a Symbol>,
    I::IntoIter: Clone,
{
    if exponents.is_dimensionless() {
        return String::new();
    }

    let candidates = candidates.into_iter();
    if let Some(exact) = candidates
        .clone()
        .find(|candidate| candidate.exponents() == exponents)
    {
        trace!(%exponents, symbol = exact.text(), "exact symbol match");
        return exact.text().to_string();
    }

    let decomposition = decompose(exponents, ranked(candidates));
    debug_assert!(
        decomposition.remainder.is_dimensionless(),
        "{exponents} not covered by the basic unit symbols"
    );
    let rendered = decomposition.to_string();
    trace!(%exponents, symbol = %rendered, "decomposed symbol");
    rendered
}

/// Symbol built from the built-in tables only, unaffected by any
/// registered symbol
pub fn canonical_symbol(exponents: Exponents) -> String {
    format_with(
        exponents,
        DERIVED_UNIT_SYMBOLS.iter().chain(BASIC_UNIT_SYMBOLS),
    )
}
