//! # Listener Declarations
//!
//! A configured listener can take several shapes. [`ListenerDeclaration`]
//! classifies a raw [`Value`] once, so that resolution is a plain `match`
//! instead of a chain of runtime type checks.
//!
//! Classification only needs the reflection half of a [`Lookup`]: a string is
//! a [`ClassName`](ListenerDeclaration::ClassName) when the lookup describes a
//! type under that name, and a [`ServiceId`](ListenerDeclaration::ServiceId)
//! otherwise. Nothing is instantiated here.

use crate::{
    lookup::Lookup,
    object::{Invoke, Object},
    value::Value,
};
use std::sync::Arc;

/// The recognised shapes of a listener declaration.
#[derive(Clone, Copy)]
pub enum ListenerDeclaration<'a> {
    /// A closure-like value.
    Invocable(&'a Arc<dyn Invoke>),
    /// An already constructed instance.
    Instance(&'a Arc<dyn Object>),
    /// A two-element `[target, method]` list. Neither side is validated yet.
    MethodPair {
        /// Class name, service identifier or instance.
        target: &'a Value,
        /// Method name.
        method: &'a Value,
    },
    /// A string naming a type known to the lookup.
    ClassName(&'a str),
    /// Any other string.
    ServiceId(&'a str),
    /// Nothing recognisable.
    Invalid(&'a Value),
}

impl<'a> ListenerDeclaration<'a> {
    /// Classifies `value`, consulting `lookup` for known class names only.
    pub fn classify<L: Lookup + ?Sized>(value: &'a Value, lookup: &L) -> Self {
        match value {
            Value::Callable(f) => ListenerDeclaration::Invocable(f),
            Value::Object(object) => ListenerDeclaration::Instance(object),
            Value::List(items) => match items.as_slice() {
                [target, method] => ListenerDeclaration::MethodPair { target, method },
                _ => ListenerDeclaration::Invalid(value),
            },
            Value::String(name) if lookup.describe(name).is_some() => {
                ListenerDeclaration::ClassName(name)
            }
            Value::String(id) => ListenerDeclaration::ServiceId(id),
            _ => ListenerDeclaration::Invalid(value),
        }
    }

    /// Kind of the declared value, as printed in diagnostics.
    pub fn kind(&self) -> String {
        match self {
            ListenerDeclaration::Invocable(_) => "Closure".to_string(),
            ListenerDeclaration::Instance(object) => object.class_name().to_string(),
            ListenerDeclaration::MethodPair { .. } => "array".to_string(),
            ListenerDeclaration::ClassName(_) | ListenerDeclaration::ServiceId(_) => {
                "string".to_string()
            }
            ListenerDeclaration::Invalid(value) => value.kind(),
        }
    }
}
