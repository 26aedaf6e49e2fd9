//! # Listener Resolution
//!
//! Turns one listener declaration into a [`Callable`] without calling it.
//!
//! Resolution classifies the raw [`Value`] into a [`ListenerDeclaration`]
//! and handles each shape on its own:
//!
//! | Shape | Succeeds when |
//! |---|---|
//! | closure | always |
//! | instance | it carries the invocation entry point |
//! | `[target, method]` | the provided target exposes `method`, or its type declares `method` static |
//! | class name / service id | the lookup provides something invocable |
//! | anything else | never |
//!
//! The only side effects are those of the [`Lookup`] itself.

use rollcall_core::{Callable, InvalidListenerConfiguration, ListenerDeclaration, Lookup, Value};
use std::sync::Arc;

/// How many times a looked-up value may itself be resolved as a declaration.
pub const DEFAULT_MAX_INDIRECTION: usize = 1;

/// Resolves listener declarations against a lookup.
///
/// # Example
///
/// ```rust,ignore
/// let resolver = Resolver::new(container);
/// let callable = resolver.resolve(&Value::pair("Mailer", "send_welcome"))?;
/// ```
#[derive(Debug, Clone)]
pub struct Resolver<L> {
    lookup: L,
    max_indirection: usize,
}

impl<L: Lookup> Resolver<L> {
    /// Create a resolver backed by `lookup`.
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            max_indirection: DEFAULT_MAX_INDIRECTION,
        }
    }

    /// Set how many levels of service-to-declaration indirection are followed.
    pub fn with_max_indirection(mut self, depth: usize) -> Self {
        self.max_indirection = depth;
        self
    }

    /// The lookup this resolver consults.
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Resolves a listener declaration into a callable.
    pub fn resolve(&self, declaration: &Value) -> Result<Callable, InvalidListenerConfiguration> {
        self.resolve_at(declaration, 0)
    }

    fn resolve_at(
        &self,
        value: &Value,
        depth: usize,
    ) -> Result<Callable, InvalidListenerConfiguration> {
        let declaration = ListenerDeclaration::classify(value, &self.lookup);

        #[cfg(feature = "tracing")]
        tracing::trace!(kind = %declaration.kind(), depth, "resolving listener");

        match declaration {
            ListenerDeclaration::Invocable(f) => Ok(Callable::Closure(f.clone())),
            ListenerDeclaration::Instance(object) => match object.as_invoke() {
                Some(_) => Ok(Callable::Invokable(object.clone())),
                None => Err(InvalidListenerConfiguration::NotInvokable {
                    class: object.class_name().to_string(),
                }),
            },
            ListenerDeclaration::MethodPair { target, method } => {
                self.resolve_pair(target, method)
            }
            ListenerDeclaration::ClassName(name) | ListenerDeclaration::ServiceId(name) => {
                self.resolve_name(name, depth)
            }
            ListenerDeclaration::Invalid(value) => {
                Err(InvalidListenerConfiguration::shape(value.kind()))
            }
        }
    }

    fn resolve_pair(
        &self,
        target: &Value,
        method: &Value,
    ) -> Result<Callable, InvalidListenerConfiguration> {
        let Some(method) = method.as_str().filter(|m| !m.is_empty()) else {
            return Err(InvalidListenerConfiguration::shape("array"));
        };

        match target {
            Value::String(class) => {
                if let Some(descriptor) = self.lookup.describe(class) {
                    let static_fn = descriptor.static_method_fn(method).map(|function| {
                        Callable::Static {
                            class: class.clone(),
                            method: method.to_string(),
                            function,
                        }
                    });

                    if self.lookup.has(class) {
                        let instance = self.fetch(class, "array")?;
                        return match (bind(&instance, method, Some(class.as_str())), static_fn) {
                            (Err(InvalidListenerConfiguration::MissingMethod { .. }), Some(f)) => {
                                Ok(f)
                            }
                            (bound, _) => bound,
                        };
                    }
                    return static_fn.ok_or_else(|| {
                        InvalidListenerConfiguration::UnresolvableTarget {
                            target: class.clone(),
                            method: method.to_string(),
                        }
                    });
                }

                if self.lookup.has(class) {
                    let instance = self.fetch(class, "array")?;
                    return bind(&instance, method, None);
                }
                Err(InvalidListenerConfiguration::shape("array"))
            }
            Value::Object(_) => bind(target, method, None),
            _ => Err(InvalidListenerConfiguration::shape("array")),
        }
    }

    fn resolve_name(
        &self,
        name: &str,
        depth: usize,
    ) -> Result<Callable, InvalidListenerConfiguration> {
        if self.lookup.has(name) {
            let resolved = self.fetch(name, "string")?;
            return self.resolve_provided(&resolved, depth);
        }

        match self.lookup.describe(name) {
            Some(descriptor) if !descriptor.is_invokable() => {
                Err(InvalidListenerConfiguration::MissingInvokeMethod {
                    class: name.to_string(),
                })
            }
            _ => Err(InvalidListenerConfiguration::NotInstantiable {
                class: name.to_string(),
            }),
        }
    }

    fn resolve_provided(
        &self,
        resolved: &Value,
        depth: usize,
    ) -> Result<Callable, InvalidListenerConfiguration> {
        match resolved {
            Value::Callable(f) => Ok(Callable::Closure(f.clone())),
            Value::Object(object) => match object.as_invoke() {
                Some(_) => Ok(Callable::Invokable(object.clone())),
                None => Err(InvalidListenerConfiguration::MissingInvokeMethod {
                    class: object.class_name().to_string(),
                }),
            },
            Value::String(_) | Value::List(_) if depth < self.max_indirection => {
                self.resolve_at(resolved, depth + 1)
            }
            other => Err(InvalidListenerConfiguration::shape(other.kind())),
        }
    }

    /// Gets `id` from the lookup; `kind` describes the declaration for diagnostics.
    fn fetch(&self, id: &str, kind: &str) -> Result<Value, InvalidListenerConfiguration> {
        self.lookup
            .get(id)
            .map_err(|source| InvalidListenerConfiguration::Lookup {
                kind: kind.to_string(),
                source,
            })
    }
}

/// Binds `method` to a resolved pair target.
///
/// `class` overrides the class name reported when the method is missing.
fn bind(
    target: &Value,
    method: &str,
    class: Option<&str>,
) -> Result<Callable, InvalidListenerConfiguration> {
    let Value::Object(object) = target else {
        return Err(InvalidListenerConfiguration::shape("array"));
    };
    if !object.has_method(method) {
        return Err(InvalidListenerConfiguration::MissingMethod {
            method: method.to_string(),
            class: class.unwrap_or_else(|| object.class_name()).to_string(),
        });
    }
    Ok(Callable::Bound {
        target: Arc::clone(object),
        method: method.to_string(),
    })
}
