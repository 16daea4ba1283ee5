//! Output streams with their own symbols
//!
//! ```
//! use siq_core::units::{Frequency, Hertz};
//! use siq_core::{UnitStream, UseSymbol};
//!
//! let mut out = UnitStream::new(String::new());
//! out.use_symbol(UseSymbol::once::<Hertz>("Hz"));
//! out.write_quantity(&Frequency::<f64>::new(50.0)).unwrap();
//! assert_eq!(out.into_inner(), "50 Hz");
//! ```

use super::{Persistence, StreamKey, Symbol, SymbolRegistry};
use crate::dimension::Dimension;
use crate::quantity::{Quantity, Scalar};
use parking_lot::Mutex;
use std::borrow::Cow;
use std::fmt;
use tracing::warn;

/// Directive registering a symbol for one stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UseSymbol {
    symbol: Symbol,
    persistence: Persistence,
}

impl UseSymbol {
    pub fn new<D: Dimension>(text: impl Into<Cow<'static, str>>, persistence: Persistence) -> Self {
        Self {
            symbol: Symbol::of::<D>(text),
            persistence,
        }
    }

    /// Symbol used for the next quantity written only
    pub fn once<D: Dimension>(text: impl Into<Cow<'static, str>>) -> Self {
        Self::new::<D>(text, Persistence::Once)
    }

    /// Symbol used for the rest of the stream's life
    pub fn persistent<D: Dimension>(text: impl Into<Cow<'static, str>>) -> Self {
        Self::new::<D>(text, Persistence::Persistent)
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn persistence(&self) -> Persistence {
        self.persistence
    }
}

/// Stream key of a [`UnitStream`], retired when the stream goes away
struct StreamSlot<'r> {
    registry: &'r Mutex<SymbolRegistry>,
    key: Option<StreamKey>,
}

impl Drop for StreamSlot<'_> {
    fn drop(&mut self) {
        if let Some(key) = self.key.take() {
            self.registry.lock().retire_stream(key);
        }
    }
}

/// Text sink that renders quantities with stream-scoped symbols.
///
/// The stream only takes a key from its registry on the first
/// [`use_symbol`](Self::use_symbol), so plain streams cost nothing.
pub struct UnitStream<'r, W> {
    inner: W,
    slot: StreamSlot<'r>,
    precision: Option<usize>,
}

impl<W: fmt::Write> UnitStream<'static, W> {
    /// Stream backed by the process-wide registry
    pub fn new(inner: W) -> Self {
        Self::with_registry(inner, SymbolRegistry::global())
    }
}

impl<'r, W: fmt::Write> UnitStream<'r, W> {
    pub fn with_registry(inner: W, registry: &'r Mutex<SymbolRegistry>) -> Self {
        Self {
            inner,
            slot: StreamSlot {
                registry,
                key: None,
            },
            precision: None,
        }
    }

    /// Digits after the decimal point for every magnitude written from now
    /// on; `None` writes the shortest exact representation
    pub fn set_precision(&mut self, precision: Option<usize>) -> &mut Self {
        self.precision = precision;
        self
    }

    pub fn precision(&self) -> Option<usize> {
        self.precision
    }

    /// Register a symbol for this stream.
    ///
    /// If the stream's key was retired through the registry in the
    /// meantime, a fresh key is taken.
    pub fn use_symbol(&mut self, directive: UseSymbol) -> &mut Self {
        let mut registry = self.slot.registry.lock();
        let key = match self.slot.key {
            Some(key) if registry.has_stream(key) => key,
            stale => {
                if let Some(key) = stale {
                    warn!(%key, "stream key retired behind the stream's back");
                }
                let key = registry.next_stream_key();
                self.slot.key = Some(key);
                key
            }
        };
        if let Err(error) = registry.register_for_stream(key, directive.symbol, directive.persistence) {
            warn!(%error, "stream symbol not registered");
        }
        drop(registry);
        self
    }

    /// Write `quantity` as magnitude, space, symbol
    pub fn write_quantity<D: Dimension, V: Scalar>(
        &mut self,
        quantity: &Quantity<D, V>,
    ) -> fmt::Result {
        let symbol = self.slot.registry.lock().render(D::EXPONENTS, self.slot.key);
        match self.precision {
            Some(precision) => write!(self.inner, "{:.*} {}", precision, quantity.value(), symbol),
            None => write!(self.inner, "{} {}", quantity.value(), symbol),
        }
    }

    /// Forget every symbol registered on this stream
    pub fn clear_symbols(&mut self) {
        let Some(key) = self.slot.key else {
            return;
        };
        let mut registry = self.slot.registry.lock();
        // A retired key has nothing left to clear
        if registry.has_stream(key) {
            if let Err(error) = registry.clear_stream_symbols(key) {
                warn!(%error, "stream symbols not cleared");
            }
        }
    }

    /// Registry key, allocated by the first [`use_symbol`](Self::use_symbol)
    pub fn key(&self) -> Option<StreamKey> {
        self.slot.key
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Give back the sink; the stream's symbols are dropped
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: fmt::Write> fmt::Write for UnitStream<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_str(s)
    }
}
