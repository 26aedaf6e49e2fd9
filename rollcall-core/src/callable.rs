//! Resolved listeners.

use crate::{
    object::{Invoke, ListenerResult, Object, StaticFn},
    value::Value,
};
use std::{fmt, sync::Arc};

/// A listener declaration confirmed to be invocable.
///
/// Producing a `Callable` never calls it; [`call`](Callable::call) is left to
/// whatever dispatches events later.
#[derive(Clone)]
pub enum Callable {
    /// A closure-like value.
    Closure(Arc<dyn Invoke>),
    /// An instance carrying the invocation entry point.
    Invokable(Arc<dyn Object>),
    /// A public method bound to an instance.
    Bound {
        /// The instance.
        target: Arc<dyn Object>,
        /// Name of the method.
        method: String,
    },
    /// A static method of a class.
    Static {
        /// The class name.
        class: String,
        /// Name of the method.
        method: String,
        /// The function behind the method.
        function: StaticFn,
    },
}

impl Callable {
    /// Calls the listener.
    pub fn call(&self, args: &[Value]) -> ListenerResult {
        match self {
            Callable::Closure(f) => f.invoke(args),
            Callable::Invokable(object) => match object.as_invoke() {
                Some(entry) => entry.invoke(args),
                None => Err(format!("{} has no invocation entry point", object.class_name()).into()),
            },
            Callable::Bound { target, method } => target.call_method(method, args),
            Callable::Static { function, .. } => function(args),
        }
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callable::Closure(_) => f.write_str("Closure"),
            Callable::Invokable(object) => {
                f.debug_tuple("Invokable").field(&object.class_name()).finish()
            }
            Callable::Bound { target, method } => f
                .debug_struct("Bound")
                .field("target", &target.class_name())
                .field("method", method)
                .finish(),
            Callable::Static { class, method, .. } => f
                .debug_struct("Static")
                .field("class", class)
                .field("method", method)
                .finish(),
        }
    }
}
