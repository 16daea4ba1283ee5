//! Type names for reflection and serialization frameworks
//!
//! A quantity type is named after its canonical symbol and representation,
//! e.g. `Quantity<m/s, f64>`. Names come from the built-in symbol tables
//! only, so registering symbols never renames a type.

use crate::dimension::Dimension;
use crate::quantity::{Quantity, Scalar};
use crate::symbols::canonical_symbol;
use crate::units::{
    Acceleration, AmountOfSubstance, ElectricCurrent, Force, Frequency, Length, LuminousIntensity,
    Mass, Pressure, Temperature, Time, Velocity,
};
use tracing::debug;

/// Stable, human-readable name of a type
pub trait TypeName {
    fn type_name() -> String;
}

impl TypeName for f64 {
    fn type_name() -> String {
        <f64 as Scalar>::NAME.to_string()
    }
}

impl TypeName for f32 {
    fn type_name() -> String {
        <f32 as Scalar>::NAME.to_string()
    }
}

impl<D: Dimension, V: Scalar> TypeName for Quantity<D, V> {
    fn type_name() -> String {
        let symbol = canonical_symbol(D::EXPONENTS);
        // pure numbers have an empty symbol
        let symbol = if symbol.is_empty() { "1" } else { &symbol };
        format!("Quantity<{symbol}, {}>", V::NAME)
    }
}

/// A registered type name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeEntry {
    pub name: String,
    /// Older or friendlier name, e.g. "Length"
    pub alias: Option<String>,
}

/// Names of the quantity types known to a reflection layer
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    entries: Vec<TypeEntry>,
}

macro_rules! register_named {
    ($registry:expr, $($quantity:ident),* $(,)?) => {$(
        $registry.register_with_alias::<$quantity<f64>>(stringify!($quantity));
        $registry.register::<$quantity<f32>>();
    )*};
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every named quantity in [`units`](crate::units), for
    /// both `f64` (aliased by its plain name) and `f32`
    pub fn with_builtin_quantities() -> Self {
        let mut registry = Self::new();
        register_named!(
            registry,
            Length,
            Mass,
            Time,
            ElectricCurrent,
            Temperature,
            AmountOfSubstance,
            LuminousIntensity,
            Frequency,
            Force,
            Pressure,
            Velocity,
            Acceleration,
        );
        registry
    }

    /// Register `T` under its [`TypeName`]. Registering twice is a no-op.
    pub fn register<T: TypeName>(&mut self) -> &TypeEntry {
        self.insert(T::type_name(), None)
    }

    /// Register `T`, also findable as `alias`. An existing entry gets the
    /// alias if it had none.
    pub fn register_with_alias<T: TypeName>(&mut self, alias: &str) -> &TypeEntry {
        self.insert(T::type_name(), Some(alias.to_string()))
    }

    fn insert(&mut self, name: String, alias: Option<String>) -> &TypeEntry {
        let index = match self.entries.iter().position(|e| e.name == name) {
            Some(index) => {
                let entry = &mut self.entries[index];
                if entry.alias.is_none() {
                    entry.alias = alias;
                }
                index
            }
            None => {
                debug!(%name, ?alias, "registering type");
                self.entries.push(TypeEntry { name, alias });
                self.entries.len() - 1
            }
        };
        &self.entries[index]
    }

    /// Find an entry by name or alias
    pub fn lookup(&self, name: &str) -> Option<&TypeEntry> {
        self.entries
            .iter()
            .find(|e| e.name == name || e.alias.as_deref() == Some(name))
    }

    pub fn entries(&self) -> &[TypeEntry] {
        &self.entries
    }
}
