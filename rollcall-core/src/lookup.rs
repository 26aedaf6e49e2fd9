//! # Lookup Capability
//!
//! The external service-location mechanism that turns a class name or
//! identifier into a value, plus the reflection metadata the resolver needs
//! for `[class, method]` pairs.
//!
//! rollcall never owns a container. A [`Lookup`] is handed to the resolver at
//! construction time; `rollcall-std` ships a ready-made implementation.

use crate::{error::LookupError, object::StaticFn, value::Value};
use std::{fmt, sync::Arc};

/// Service lookup consumed by the resolver.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Lookup`",
    label = "missing `Lookup` implementation",
    note = "A lookup must answer `has` and `get` for listener identifiers."
)]
pub trait Lookup: Send + Sync {
    /// Whether the lookup can provide something for `id`.
    fn has(&self, id: &str) -> bool;

    /// Provides the value registered for `id`.
    fn get(&self, id: &str) -> Result<Value, LookupError>;

    /// Reflection metadata for a known class.
    ///
    /// Returning `None` means `class` is not a known type name. The default
    /// knows no types at all.
    fn describe(&self, class: &str) -> Option<&TypeDescriptor> {
        let _ = class;
        None
    }
}

impl<L: Lookup + ?Sized> Lookup for &L {
    fn has(&self, id: &str) -> bool {
        (**self).has(id)
    }

    fn get(&self, id: &str) -> Result<Value, LookupError> {
        (**self).get(id)
    }

    fn describe(&self, class: &str) -> Option<&TypeDescriptor> {
        (**self).describe(class)
    }
}

impl<L: Lookup + ?Sized> Lookup for Box<L> {
    fn has(&self, id: &str) -> bool {
        (**self).has(id)
    }

    fn get(&self, id: &str) -> Result<Value, LookupError> {
        (**self).get(id)
    }

    fn describe(&self, class: &str) -> Option<&TypeDescriptor> {
        (**self).describe(class)
    }
}

impl<L: Lookup + ?Sized> Lookup for Arc<L> {
    fn has(&self, id: &str) -> bool {
        (**self).has(id)
    }

    fn get(&self, id: &str) -> Result<Value, LookupError> {
        (**self).get(id)
    }

    fn describe(&self, class: &str) -> Option<&TypeDescriptor> {
        (**self).describe(class)
    }
}

/// How a method is called.
#[derive(Clone, Copy)]
pub enum Receiver {
    /// Needs an instance.
    Instance,
    /// Callable without an instance.
    Static(StaticFn),
}

impl fmt::Debug for Receiver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Receiver::Instance => f.write_str("Instance"),
            Receiver::Static(_) => f.write_str("Static"),
        }
    }
}

/// A public method declared on a type.
#[derive(Debug, Clone)]
pub struct MethodDescriptor {
    name: String,
    receiver: Receiver,
}

impl MethodDescriptor {
    /// The method name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How the method is called.
    pub fn receiver(&self) -> Receiver {
        self.receiver
    }
}

/// Reflection metadata for a class.
///
/// # Example
///
/// ```rust,ignore
/// let descriptor = TypeDescriptor::new("Handler")
///     .method("on_created")
///     .static_method("handle_static", Handler::handle_static);
/// ```
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    name: String,
    methods: Vec<MethodDescriptor>,
    invokable: bool,
}

impl TypeDescriptor {
    /// Describes a class with no public methods.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
            invokable: false,
        }
    }

    /// Declares a public instance method.
    pub fn method(mut self, name: impl Into<String>) -> Self {
        self.methods.push(MethodDescriptor {
            name: name.into(),
            receiver: Receiver::Instance,
        });
        self
    }

    /// Declares a public static method.
    pub fn static_method(mut self, name: impl Into<String>, function: StaticFn) -> Self {
        self.methods.push(MethodDescriptor {
            name: name.into(),
            receiver: Receiver::Static(function),
        });
        self
    }

    /// Marks instances of the class as carrying the invocation entry point.
    pub fn invokable(mut self) -> Self {
        self.invokable = true;
        self
    }

    /// The class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared public methods, in declaration order.
    pub fn methods(&self) -> &[MethodDescriptor] {
        &self.methods
    }

    /// Whether `method` is declared, static or not.
    pub fn has_method(&self, method: &str) -> bool {
        self.methods.iter().any(|m| m.name == method)
    }

    /// The function behind a static method named `method`.
    pub fn static_method_fn(&self, method: &str) -> Option<StaticFn> {
        self.methods
            .iter()
            .filter(|m| m.name == method)
            .find_map(|m| match m.receiver {
                Receiver::Static(function) => Some(function),
                Receiver::Instance => None,
            })
    }

    /// Whether instances carry the invocation entry point.
    pub fn is_invokable(&self) -> bool {
        self.invokable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ListenerResult;

    fn noop(_args: &[Value]) -> ListenerResult {
        Ok(Value::Null)
    }

    #[test]
    fn descriptor_separates_static_methods() {
        let descriptor = TypeDescriptor::new("Handler")
            .method("handle")
            .static_method("handle_static", noop);

        assert!(descriptor.has_method("handle"));
        assert!(descriptor.has_method("handle_static"));
        assert!(descriptor.static_method_fn("handle").is_none());
        assert!(descriptor.static_method_fn("handle_static").is_some());
        assert!(!descriptor.is_invokable());
        assert_eq!(descriptor.methods().len(), 2);
    }

    struct Empty;

    impl Lookup for Empty {
        fn has(&self, _id: &str) -> bool {
            false
        }

        fn get(&self, id: &str) -> Result<Value, LookupError> {
            Err(LookupError::NotFound(id.to_string()))
        }
    }

    #[test]
    fn default_lookup_knows_no_types() {
        let lookup = Arc::new(Empty);
        assert!(lookup.describe("Handler").is_none());
        assert!(!(&lookup).has("Handler"));
        assert!(matches!(lookup.get("x"), Err(LookupError::NotFound(id)) if id == "x"));
    }
}
