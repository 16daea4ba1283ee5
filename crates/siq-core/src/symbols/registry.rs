//! Registered unit symbols
//!
//! On top of the built-in tables a registry holds user symbols in three
//! scopes: global, per-stream persistent and per-stream one-shot. When
//! formatting, candidates are tried in that order with the most recently
//! registered symbol of each list first, and the built-in derived and basic
//! tables last.

use super::format::format_with;
use super::{Symbol, BASIC_UNIT_SYMBOLS, DERIVED_UNIT_SYMBOLS};
use crate::dimension::Exponents;
use crate::error::Error;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use std::num::NonZeroUsize;
use tracing::{debug, warn};

static GLOBAL: Lazy<Mutex<SymbolRegistry>> = Lazy::new(|| Mutex::new(SymbolRegistry::new()));

/// Identifies the symbol slot of one output stream. Keys start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StreamKey(NonZeroUsize);

impl StreamKey {
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl fmt::Display for StreamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How long a stream symbol stays registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Persistence {
    /// Until the stream's symbols are cleared or the stream is dropped
    Persistent,
    /// Until the next quantity rendered on the stream
    Once,
}

#[derive(Debug, Clone, Default)]
struct StreamSymbols {
    persistent: Vec<Symbol>,
    temporary: Vec<Symbol>,
}

#[derive(Debug, Clone, Default)]
pub struct SymbolRegistry {
    global: Vec<Symbol>,
    /// Live streams only; retiring removes the entry
    streams: HashMap<StreamKey, StreamSymbols>,
    /// Number of keys handed out so far
    issued_keys: usize,
}

impl SymbolRegistry {
    /// Registry holding only the built-in symbols
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry used by `Display` and [`UnitStream::new`](super::UnitStream::new)
    pub fn global() -> &'static Mutex<SymbolRegistry> {
        &GLOBAL
    }

    pub fn register(&mut self, symbol: Symbol) {
        debug!(symbol = symbol.text(), exponents = %symbol.exponents(), "registering global symbol");
        self.global.push(symbol);
    }

    /// Remove the first global symbol equal to `symbol`.
    ///
    /// Returns `false` if there was none.
    pub fn unregister(&mut self, symbol: &Symbol) -> bool {
        match self.global.iter().position(|s| s == symbol) {
            Some(index) => {
                self.global.remove(index);
                debug!(symbol = symbol.text(), "unregistered global symbol");
                true
            }
            None => false,
        }
    }

    /// Allocate a fresh stream slot
    pub fn next_stream_key(&mut self) -> StreamKey {
        let key = StreamKey(NonZeroUsize::MIN.saturating_add(self.issued_keys));
        self.issued_keys = self.issued_keys.saturating_add(1);
        self.streams.insert(key, StreamSymbols::default());
        debug!(%key, "allocated stream key");
        key
    }

    pub fn register_for_stream(
        &mut self,
        key: StreamKey,
        symbol: Symbol,
        persistence: Persistence,
    ) -> Result<(), Error> {
        let stream = self.stream_mut(key)?;
        debug!(%key, symbol = symbol.text(), ?persistence, "registering stream symbol");
        match persistence {
            Persistence::Persistent => stream.persistent.push(symbol),
            Persistence::Once => stream.temporary.push(symbol),
        }
        Ok(())
    }

    pub fn clear_temporary_stream_symbols(&mut self, key: StreamKey) -> Result<(), Error> {
        self.stream_mut(key)?.temporary.clear();
        Ok(())
    }

    /// Drop both the persistent and the one-shot symbols of a stream
    pub fn clear_stream_symbols(&mut self, key: StreamKey) -> Result<(), Error> {
        let stream = self.stream_mut(key)?;
        stream.persistent.clear();
        stream.temporary.clear();
        debug!(%key, "cleared stream symbols");
        Ok(())
    }

    /// Drop the symbols of a stream that is going away. The key is never
    /// handed out again.
    pub fn retire_stream(&mut self, key: StreamKey) {
        match self.streams.remove(&key) {
            Some(_) => debug!(%key, "retired stream"),
            None => warn!(%key, "retiring unknown stream"),
        }
    }

    /// Whether `key` was handed out and not retired yet
    pub fn has_stream(&self, key: StreamKey) -> bool {
        self.streams.contains_key(&key)
    }

    pub fn global_symbols(&self) -> &[Symbol] {
        &self.global
    }

    /// Empty for unknown or retired keys
    pub fn persistent_stream_symbols(&self, key: StreamKey) -> &[Symbol] {
        match self.stream(key) {
            Some(stream) => &stream.persistent,
            None => &[],
        }
    }

    /// Empty for unknown or retired keys
    pub fn temporary_stream_symbols(&self, key: StreamKey) -> &[Symbol] {
        match self.stream(key) {
            Some(stream) => &stream.temporary,
            None => &[],
        }
    }

    /// Symbol text for `exponents`, using the symbols of `stream` on top of
    /// the global and built-in ones
    pub fn format(&self, exponents: Exponents, stream: Option<StreamKey>) -> String {
        let stream_symbols = match stream {
            Some(key) => {
                let symbols = self.stream(key);
                if symbols.is_none() {
                    warn!(%key, "formatting for unknown stream");
                }
                symbols
            }
            None => None,
        };
        let (temporary, persistent): (&[Symbol], &[Symbol]) = match stream_symbols {
            Some(s) => (s.temporary.as_slice(), s.persistent.as_slice()),
            None => (&[], &[]),
        };

        let candidates = temporary
            .iter()
            .rev()
            .chain(persistent.iter().rev())
            .chain(self.global.iter().rev())
            .chain(DERIVED_UNIT_SYMBOLS)
            .chain(BASIC_UNIT_SYMBOLS);
        format_with(exponents, candidates)
    }

    /// [`format`](Self::format), then forget the stream's one-shot symbols
    pub fn render(&mut self, exponents: Exponents, stream: Option<StreamKey>) -> String {
        let rendered = self.format(exponents, stream);
        if let Some(stream) = stream.and_then(|key| self.stream_mut(key).ok()) {
            stream.temporary.clear();
        }
        rendered
    }

    fn stream(&self, key: StreamKey) -> Option<&StreamSymbols> {
        self.streams.get(&key)
    }

    fn stream_mut(&mut self, key: StreamKey) -> Result<&mut StreamSymbols, Error> {
        self.streams.get_mut(&key).ok_or_else(|| {
            warn!(%key, "unknown stream key");
            Error::UnknownStream { key }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::Dimension;
    use crate::units::{Hertz, Meter, Newton, Pascal, Second};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_formatting() {
        let registry = SymbolRegistry::new();
        assert_eq!(registry.format(Hertz::EXPONENTS, None), "1/s");
        assert_eq!(registry.format(Pascal::EXPONENTS, None), "Pa");
        assert_eq!(registry.format(Newton::EXPONENTS + Meter::EXPONENTS, None), "Nm");
    }

    #[test]
    fn test_global_symbol_shadows_builtin() {
        let mut registry = SymbolRegistry::new();
        let hertz = Symbol::of::<Hertz>("Hz");
        registry.register(hertz.clone());
        assert_eq!(registry.format(Hertz::EXPONENTS, None), "Hz");
        // exact match still finds the second
        assert_eq!(registry.format(Second::EXPONENTS, None), "s");
        // but compound units only see the first of equal rank
        assert_eq!(registry.format(Meter::EXPONENTS - Second::EXPONENTS, None), "mHz");

        assert!(registry.unregister(&hertz));
        assert!(!registry.unregister(&hertz));
        assert_eq!(registry.format(Hertz::EXPONENTS, None), "1/s");
    }

    #[test]
    fn test_latest_registration_wins() {
        let mut registry = SymbolRegistry::new();
        registry.register(Symbol::of::<Hertz>("Hz"));
        registry.register(Symbol::of::<Hertz>("Bq"));
        assert_eq!(registry.format(Hertz::EXPONENTS, None), "Bq");
    }

    #[test]
    fn test_stream_keys_are_one_based_and_unique() {
        let mut registry = SymbolRegistry::new();
        let first = registry.next_stream_key();
        let second = registry.next_stream_key();
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 2);
        registry.retire_stream(first);
        assert_eq!(registry.next_stream_key().get(), 3);
    }

    #[test]
    fn test_retiring_frees_the_stream_entry() {
        let mut registry = SymbolRegistry::new();
        for _ in 0..100 {
            let key = registry.next_stream_key();
            registry
                .register_for_stream(key, Symbol::of::<Hertz>("Hz"), Persistence::Persistent)
                .unwrap();
            assert!(registry.has_stream(key));
            registry.retire_stream(key);
            assert!(!registry.has_stream(key));
        }
        assert!(registry.streams.is_empty());
        assert_eq!(registry.next_stream_key().get(), 101);
    }

    #[test]
    fn test_one_shot_symbols_cleared_by_render() {
        let mut registry = SymbolRegistry::new();
        let key = registry.next_stream_key();
        registry
            .register_for_stream(key, Symbol::of::<Hertz>("Hz"), Persistence::Once)
            .unwrap();
        assert_eq!(registry.temporary_stream_symbols(key).len(), 1);
        assert_eq!(registry.render(Hertz::EXPONENTS, Some(key)), "Hz");
        assert!(registry.temporary_stream_symbols(key).is_empty());
        assert_eq!(registry.render(Hertz::EXPONENTS, Some(key)), "1/s");
    }

    #[test]
    fn test_stream_symbols_are_scoped() {
        let mut registry = SymbolRegistry::new();
        let key = registry.next_stream_key();
        let other = registry.next_stream_key();
        registry
            .register_for_stream(key, Symbol::of::<Hertz>("Hz"), Persistence::Persistent)
            .unwrap();
        assert_eq!(registry.render(Hertz::EXPONENTS, Some(key)), "Hz");
        assert_eq!(registry.render(Hertz::EXPONENTS, Some(key)), "Hz");
        assert_eq!(registry.render(Hertz::EXPONENTS, Some(other)), "1/s");
        assert_eq!(registry.render(Hertz::EXPONENTS, None), "1/s");

        registry.clear_stream_symbols(key).unwrap();
        assert!(registry.persistent_stream_symbols(key).is_empty());
        assert_eq!(registry.render(Hertz::EXPONENTS, Some(key)), "1/s");
    }

    #[test]
    fn test_retired_and_unknown_streams_are_rejected() {
        let mut registry = SymbolRegistry::new();
        let key = registry.next_stream_key();
        registry.retire_stream(key);
        let result = registry.register_for_stream(key, Symbol::of::<Hertz>("Hz"), Persistence::Once);
        assert!(matches!(result, Err(Error::UnknownStream { .. })));

        let mut other = SymbolRegistry::new();
        let result = other.clear_temporary_stream_symbols(key);
        assert!(matches!(result, Err(Error::UnknownStream { .. })));
        assert!(other.persistent_stream_symbols(key).is_empty());
    }
}
