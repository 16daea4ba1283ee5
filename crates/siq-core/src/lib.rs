//! siq-core: SI quantities with dimensions checked at compile time
//!
//! A [`Quantity`] carries its SI dimension in its type. Adding a length to a
//! time does not compile, while multiplying and dividing compute the
//! resulting dimension. Quantities render with unit symbols and parse back
//! from text, including SI prefixes and user-registered symbols.
//!
//! # Example
//!
//! ```
//! use siq_core::units::{Length, Time, Velocity};
//!
//! let distance: Length = "3.6 km".parse().unwrap();
//! let time = Time::<f64>::new(3600.0);
//!
//! // Dimension of the result computed by the compiler
//! let speed: Velocity = distance / time;
//! assert_eq!(speed.to_string(), "1 m/s");
//!
//! // Does not compile: adding a length to a time
//! // let nonsense = distance + time;
//! ```

pub mod config;
pub mod dimension;
pub mod error;
pub mod parser;
pub mod quantity;
pub mod reflect;
pub mod symbols;
pub mod units;

pub use config::{SymbolConfig, SymbolEntry};
pub use dimension::{BaseDimension, Dimension, Exponents, Product, ProductOf, Quotient, QuotientOf, SiUnit};
pub use error::{Error, Result};
pub use quantity::{ComparisonMode, Promote, Promoted, Quantity, Scalar};
pub use reflect::{TypeEntry, TypeName, TypeRegistry};
pub use symbols::{Persistence, StreamKey, Symbol, SymbolRegistry, UnitStream, UseSymbol};
