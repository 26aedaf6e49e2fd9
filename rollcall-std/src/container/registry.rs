//! Container module for service and type registration.
//!
//! This module provides a builder pattern for registering listener services
//! and type metadata, and a frozen container implementing [`Lookup`].

use rollcall_core::{BoxError, Lookup, LookupError, Object, TypeDescriptor, Value};
use std::{collections::HashMap, fmt, sync::Arc};

type Factory = Arc<dyn Fn() -> Result<Value, BoxError> + Send + Sync>;

/// How a registered service is provided.
#[derive(Clone)]
enum Entry {
    /// A value handed out as is (instances are shared through `Arc`).
    Value(Value),
    /// Built on every `get`; may fail.
    Factory(Factory),
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Entry::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}

// ============================================================================
// ContainerBuilder - for constructing containers
// ============================================================================

/// Builder for constructing a [`Container`].
///
/// Register services and type metadata, then call `.build()` to create an
/// immutable, thread-safe `Container`.
///
/// # Example
/// ```ignore
/// let container = ContainerBuilder::new()
///     .service(Mailer::descriptor(), Mailer::default())
///     .value("listener.audit", Value::callable(|_| Ok(Value::Null)))
///     .factory("listener.slow", || build_slow_listener())
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct ContainerBuilder {
    services: HashMap<String, Entry>,
    types: HashMap<String, TypeDescriptor>,
}

impl ContainerBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            services: HashMap::new(),
            types: HashMap::new(),
        }
    }

    /// Register an instance under `id`.
    pub fn instance<O: Object>(mut self, id: impl Into<String>, object: O) -> Self {
        self.value_mut(id, Value::object(object));
        self
    }

    /// Register any value under `id`.
    pub fn value(mut self, id: impl Into<String>, value: impl Into<Value>) -> Self {
        self.value_mut(id, value);
        self
    }

    /// Register any value under `id` (mutable version).
    pub fn value_mut(&mut self, id: impl Into<String>, value: impl Into<Value>) {
        self.services.insert(id.into(), Entry::Value(value.into()));
    }

    /// Register a factory building the value for `id` on every lookup.
    pub fn factory<F>(mut self, id: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        self.factory_mut(id, factory);
        self
    }

    /// Register a factory (mutable version).
    pub fn factory_mut<F>(&mut self, id: impl Into<String>, factory: F)
    where
        F: Fn() -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        self.services.insert(id.into(), Entry::Factory(Arc::new(factory)));
    }

    /// Register type metadata, making its name a known class.
    pub fn register_type(mut self, descriptor: TypeDescriptor) -> Self {
        self.register_type_mut(descriptor);
        self
    }

    /// Register type metadata (mutable version).
    pub fn register_type_mut(&mut self, descriptor: TypeDescriptor) {
        self.types.insert(descriptor.name().to_string(), descriptor);
    }

    /// Register type metadata together with an instance under the class name.
    pub fn service<O: Object>(self, descriptor: TypeDescriptor, object: O) -> Self {
        let id = descriptor.name().to_string();
        self.register_type(descriptor).instance(id, object)
    }

    /// Register every type submitted through `inventory`.
    #[cfg(feature = "inventory")]
    pub fn collect_types(mut self) -> Self {
        for descriptor in super::collected::collected_types() {
            self.register_type_mut(descriptor);
        }
        self
    }

    /// Build the immutable Container.
    pub fn build(self) -> Container {
        Container {
            services: self.services,
            types: self.types,
        }
    }

    /// Get the number of registered services.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Check if the builder has no services.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

// ============================================================================
// Container - immutable, thread-safe service storage
// ============================================================================

/// An immutable, thread-safe service container.
///
/// Created by calling `ContainerBuilder::build()`. Values are cloned out on
/// every `get` (instances share their `Arc`); factories run on every `get`.
#[derive(Debug, Clone, Default)]
pub struct Container {
    services: HashMap<String, Entry>,
    types: HashMap<String, TypeDescriptor>,
}

impl Container {
    /// Start building a container.
    pub fn builder() -> ContainerBuilder {
        ContainerBuilder::new()
    }

    /// Get the number of registered services.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Check if the container is empty.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Iterate over known type names.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }
}

impl Lookup for Container {
    fn has(&self, id: &str) -> bool {
        self.services.contains_key(id)
    }

    fn get(&self, id: &str) -> Result<Value, LookupError> {
        match self.services.get(id) {
            Some(Entry::Value(value)) => Ok(value.clone()),
            Some(Entry::Factory(factory)) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(id, "building service from factory");
                factory().map_err(|source| LookupError::Build {
                    id: id.to_string(),
                    source,
                })
            }
            None => Err(LookupError::NotFound(id.to_string())),
        }
    }

    fn describe(&self, class: &str) -> Option<&TypeDescriptor> {
        self.types.get(class)
    }
}
