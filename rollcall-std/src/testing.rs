//! Testing utilities for rollcall.
//!
//! This module provides utilities to make testing listener configurations easier.
//!
//! # Features
//!
//! - [`RecordingLookup`]: A lookup wrapper that records every call it receives
//! - [`FailingLookup`]: A lookup that claims every identifier but fails to build any
//! - [`PlainObject`]: An instance with no methods and no invocation entry point
//! - [`InvokableObject`]: An instance with the invocation entry point

use rollcall_core::{
    BoxError, Invoke, ListenerResult, Lookup, LookupError, Object, TypeDescriptor, Value,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ============================================================================
// Recording Lookup
// ============================================================================

/// A call received by a [`RecordingLookup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupCall {
    /// `has(id)`.
    Has(String),
    /// `get(id)`.
    Get(String),
    /// `describe(class)`.
    Describe(String),
}

/// A lookup wrapper that records all calls it receives.
///
/// Useful for verifying that a declaration was (or was not) looked up.
///
/// # Example
///
/// ```rust,ignore
/// let lookup = RecordingLookup::new(container);
/// let recorder = lookup.clone();
///
/// ConfigurationChecker::new(lookup).check(&configuration)?;
///
/// assert_eq!(recorder.count(), 0);
/// ```
pub struct RecordingLookup<L> {
    inner: Arc<L>,
    calls: Arc<Mutex<Vec<LookupCall>>>,
}

impl<L> RecordingLookup<L> {
    /// Wrap a lookup.
    pub fn new(inner: L) -> Self {
        Self {
            inner: Arc::new(inner),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the recorded calls.
    pub fn calls(&self) -> Vec<LookupCall> {
        lock(&self.calls).clone()
    }

    /// Get the number of recorded calls.
    pub fn count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Get the number of recorded `get` calls.
    pub fn get_count(&self) -> usize {
        lock(&self.calls)
            .iter()
            .filter(|call| matches!(call, LookupCall::Get(_)))
            .count()
    }

    /// Clear all recorded calls.
    pub fn clear(&self) {
        lock(&self.calls).clear();
    }

    fn record(&self, call: LookupCall) {
        lock(&self.calls).push(call);
    }
}

impl<L> Clone for RecordingLookup<L> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            calls: self.calls.clone(),
        }
    }
}

impl<L: Lookup> Lookup for RecordingLookup<L> {
    fn has(&self, id: &str) -> bool {
        self.record(LookupCall::Has(id.to_string()));
        self.inner.has(id)
    }

    fn get(&self, id: &str) -> Result<Value, LookupError> {
        self.record(LookupCall::Get(id.to_string()));
        self.inner.get(id)
    }

    fn describe(&self, class: &str) -> Option<&TypeDescriptor> {
        self.record(LookupCall::Describe(class.to_string()));
        self.inner.describe(class)
    }
}

// ============================================================================
// Failing Lookup
// ============================================================================

/// A lookup that claims to provide every identifier but fails to build any.
///
/// Stands in for a container whose definitions are broken.
#[derive(Debug, Default)]
pub struct FailingLookup {
    types: Vec<TypeDescriptor>,
}

impl FailingLookup {
    /// Create a failing lookup that knows no types.
    pub fn new() -> Self {
        Self { types: Vec::new() }
    }

    /// Make a class name known, so declarations naming it are classified as classes.
    pub fn with_type(mut self, descriptor: TypeDescriptor) -> Self {
        self.types.push(descriptor);
        self
    }
}

impl Lookup for FailingLookup {
    fn has(&self, _id: &str) -> bool {
        true
    }

    fn get(&self, id: &str) -> Result<Value, LookupError> {
        let source: BoxError = format!("definition for \"{id}\" is broken").into();
        Err(LookupError::Build {
            id: id.to_string(),
            source,
        })
    }

    fn describe(&self, class: &str) -> Option<&TypeDescriptor> {
        self.types.iter().find(|d| d.name() == class)
    }
}

// ============================================================================
// Object fixtures
// ============================================================================

/// An instance with no public methods and no invocation entry point.
#[derive(Debug, Clone)]
pub struct PlainObject {
    class: String,
}

impl PlainObject {
    /// Create a plain object of the given class.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
        }
    }
}

impl Object for PlainObject {
    fn class_name(&self) -> &str {
        &self.class
    }

    fn has_method(&self, _method: &str) -> bool {
        false
    }

    fn call_method(&self, method: &str, _args: &[Value]) -> ListenerResult {
        Err(format!("\"{method}\" method is not defined in \"{}\" class", self.class).into())
    }
}

/// An instance carrying the invocation entry point, plus optional named methods.
///
/// Every call returns [`Value::Null`].
#[derive(Debug, Clone)]
pub struct InvokableObject {
    class: String,
    methods: Vec<String>,
}

impl InvokableObject {
    /// Create an invokable object of the given class.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            methods: Vec::new(),
        }
    }

    /// Add a public method.
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.methods.push(method.into());
        self
    }

    /// Type metadata matching this object.
    pub fn descriptor(&self) -> TypeDescriptor {
        self.methods
            .iter()
            .fold(TypeDescriptor::new(self.class.clone()), |d, m| {
                d.method(m.clone())
            })
            .invokable()
    }
}

impl Invoke for InvokableObject {
    fn invoke(&self, _args: &[Value]) -> ListenerResult {
        Ok(Value::Null)
    }
}

impl Object for InvokableObject {
    fn class_name(&self) -> &str {
        &self.class
    }

    fn has_method(&self, method: &str) -> bool {
        self.methods.iter().any(|m| m == method)
    }

    fn call_method(&self, method: &str, _args: &[Value]) -> ListenerResult {
        if self.has_method(method) {
            Ok(Value::Null)
        } else {
            Err(format!("\"{method}\" method is not defined in \"{}\" class", self.class).into())
        }
    }

    fn as_invoke(&self) -> Option<&dyn Invoke> {
        Some(self)
    }
}
