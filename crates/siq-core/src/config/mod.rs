//! User symbol configuration
//!
//! Symbols are read from `~/.config/siq/symbols.json` (or platform
//! equivalent) and registered globally:
//!
//! ```json
//! {
//!   "symbols": [
//!     { "symbol": "Hz", "time": -1 },
//!     { "symbol": "J", "length": 2, "mass": 1, "time": -2 }
//!   ]
//! }
//! ```
//!
//! Exponents that are left out are zero. Each must lie within
//! `-MAX_EXPONENT..=MAX_EXPONENT`.

use crate::dimension::{Exponents, MAX_EXPONENT};
use crate::error::Error;
use crate::symbols::{Symbol, SymbolRegistry};
use directories::ProjectDirs;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One configured symbol
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SymbolEntry {
    pub symbol: String,
    #[serde(default, deserialize_with = "bounded_exponent")]
    pub length: i32,
    #[serde(default, deserialize_with = "bounded_exponent")]
    pub mass: i32,
    #[serde(default, deserialize_with = "bounded_exponent")]
    pub time: i32,
    #[serde(default, deserialize_with = "bounded_exponent")]
    pub electric_current: i32,
    #[serde(default, deserialize_with = "bounded_exponent")]
    pub temperature: i32,
    #[serde(default, deserialize_with = "bounded_exponent")]
    pub amount_of_substance: i32,
    #[serde(default, deserialize_with = "bounded_exponent")]
    pub luminous_intensity: i32,
}

fn bounded_exponent<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    let exponent = i32::deserialize(deserializer)?;
    if exponent.unsigned_abs() > MAX_EXPONENT.unsigned_abs() {
        return Err(de::Error::custom(format_args!(
            "exponent {exponent} outside -{MAX_EXPONENT}..={MAX_EXPONENT}"
        )));
    }
    Ok(exponent)
}

impl SymbolEntry {
    pub fn exponents(&self) -> Exponents {
        Exponents::new([
            self.length,
            self.mass,
            self.time,
            self.electric_current,
            self.temperature,
            self.amount_of_substance,
            self.luminous_intensity,
        ])
    }

    pub fn to_symbol(&self) -> Symbol {
        Symbol::new(self.exponents(), self.symbol.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolConfig {
    #[serde(default)]
    pub symbols: Vec<SymbolEntry>,
}

impl SymbolConfig {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&content)?;
        debug!(path = %path.display(), symbols = config.symbols.len(), "loaded symbol configuration");
        Ok(config)
    }

    /// Load from [`default_path`](Self::default_path). A missing file is an
    /// empty configuration.
    pub fn load_default() -> Result<Self, Error> {
        let Some(path) = Self::default_path() else {
            return Ok(Self::default());
        };
        match Self::load(&path) {
            Err(Error::ConfigRead { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no symbol configuration");
                Ok(Self::default())
            }
            result => result,
        }
    }

    /// Get the configuration file path
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "siq").map(|dirs| dirs.config_dir().join("symbols.json"))
    }

    /// Register every entry in `registry`, in file order
    pub fn apply(&self, registry: &mut SymbolRegistry) {
        for entry in &self.symbols {
            registry.register(entry.to_symbol());
        }
    }
}
