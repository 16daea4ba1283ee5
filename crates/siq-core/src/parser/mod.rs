//! Quantity literal parser using pest
//!
//! Only splits the text. Turning the number into a value and the symbol into
//! a scale factor is left to [`Quantity`](crate::Quantity)'s `FromStr`.

use crate::error::Error;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "parser/grammar.pest"]
struct QuantityParser;

/// A quantity literal split into its parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal<'a> {
    /// Numeric part, ready for `str::parse::<f64>`
    pub number: &'a str,
    /// Unit symbol, `None` when the literal is a bare number
    pub symbol: Option<&'a str>,
}

/// Split `input` into a number and an optional trailing symbol
pub fn parse_literal(input: &str) -> Result<Literal<'_>, Error> {
    let quantity = QuantityParser::parse(Rule::quantity, input)
        .map_err(|e| Error::invalid_literal(input, e.variant.message()))?
        .next()
        .ok_or_else(|| Error::invalid_literal(input, "empty input"))?;

    let mut literal = Literal {
        number: "",
        symbol: None,
    };
    for pair in quantity.into_inner() {
        match pair.as_rule() {
            Rule::number => literal.number = pair.as_str(),
            Rule::symbol => literal.symbol = Some(pair.as_str()),
            _ => {}
        }
    }
    Ok(literal)
}
