//! Lookup wrapper recording calls with `tracing`.

use rollcall_core::{Lookup, LookupError, TypeDescriptor, Value};

/// A [`Lookup`] wrapper that instruments every call with a `tracing` span.
///
/// Without the `tracing` feature it forwards calls unchanged, so it can stay
/// in place regardless of how the crate is built.
///
/// # Example
///
/// ```rust,ignore
/// let lookup = TracingLookup::new(container, "app-container");
/// let checker = ConfigurationChecker::new(lookup);
/// ```
pub struct TracingLookup<L> {
    inner: L,
    name: &'static str,
}

impl<L> TracingLookup<L> {
    /// Create a new `TracingLookup` wrapper around a lookup.
    pub const fn new(inner: L, name: &'static str) -> Self {
        Self { inner, name }
    }

    /// Name attached to every recorded span.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The wrapped lookup.
    pub fn inner(&self) -> &L {
        &self.inner
    }
}

impl<L: Clone> Clone for TracingLookup<L> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            name: self.name,
        }
    }
}

impl<L: Lookup> Lookup for TracingLookup<L> {
    fn has(&self, id: &str) -> bool {
        let found = self.inner.has(id);
        #[cfg(feature = "tracing")]
        tracing::trace!(lookup = %self.name, id, found, "lookup has");
        found
    }

    #[cfg(feature = "tracing")]
    fn get(&self, id: &str) -> Result<Value, LookupError> {
        let span = tracing::debug_span!("lookup_get", lookup = %self.name, id);
        let _entered = span.enter();

        let result = self.inner.get(id);
        match &result {
            Ok(value) => tracing::debug!(kind = %value.kind(), "lookup resolved"),
            Err(error) => tracing::warn!(%error, "lookup failed"),
        }
        result
    }

    #[cfg(not(feature = "tracing"))]
    fn get(&self, id: &str) -> Result<Value, LookupError> {
        self.inner.get(id)
    }

    fn describe(&self, class: &str) -> Option<&TypeDescriptor> {
        let descriptor = self.inner.describe(class);
        #[cfg(feature = "tracing")]
        tracing::trace!(lookup = %self.name, class, known = descriptor.is_some(), "lookup describe");
        descriptor
    }
}
