//! # Capability Traits (Object, Invoke)
//!
//! Listener declarations refer to things that can be called. Rather than
//! reflecting on method tables, rollcall asks two capability questions:
//!
//! - [`Invoke`]: the single invocation entry point. Closures get it for free.
//! - [`Object`]: a constructed instance that knows its class name, which public
//!   methods it exposes, and whether it carries the entry point.
//!
//! Both traits are object safe and are stored behind `Arc` inside [`Value`].

use crate::{error::BoxError, value::Value};

/// What a listener returns when it is eventually called.
pub type ListenerResult = Result<Value, BoxError>;

/// A function without receiver, as exposed by a static method.
pub type StaticFn = fn(&[Value]) -> ListenerResult;

/// The invocation entry point.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be invoked as a listener",
    label = "missing `Invoke` implementation",
    note = "Implement `Invoke`, or use a closure `Fn(&[Value]) -> ListenerResult`."
)]
pub trait Invoke: Send + Sync + 'static {
    /// Calls the listener.
    fn invoke(&self, args: &[Value]) -> ListenerResult;
}

impl<F> Invoke for F
where
    F: Fn(&[Value]) -> ListenerResult + Send + Sync + 'static,
{
    fn invoke(&self, args: &[Value]) -> ListenerResult {
        self(args)
    }
}

/// An already constructed instance.
///
/// `#[rollcall::service]` implements this from an `impl` block; hand-written
/// implementations only need to keep [`has_method`](Object::has_method) and
/// [`call_method`](Object::call_method) in agreement.
pub trait Object: Send + Sync + 'static {
    /// Name of the instance's class, used in diagnostics.
    fn class_name(&self) -> &str;

    /// Whether `method` is a public method of this instance.
    fn has_method(&self, method: &str) -> bool;

    /// Calls a public method by name.
    fn call_method(&self, method: &str, args: &[Value]) -> ListenerResult;

    /// The invocation entry point, if this instance has one.
    fn as_invoke(&self) -> Option<&dyn Invoke> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter;

    impl Object for Counter {
        fn class_name(&self) -> &str {
            "Counter"
        }

        fn has_method(&self, method: &str) -> bool {
            method == "count"
        }

        fn call_method(&self, method: &str, args: &[Value]) -> ListenerResult {
            match method {
                "count" => Ok(Value::Int(args.len() as i64)),
                other => Err(format!("no method {other}").into()),
            }
        }
    }

    #[test]
    fn closures_are_invokable() {
        let listener = |args: &[Value]| -> ListenerResult { Ok(Value::Int(args.len() as i64)) };
        let result = listener.invoke(&[Value::Null, Value::Null]).unwrap();
        assert!(matches!(result, Value::Int(2)));
    }

    #[test]
    fn objects_have_no_entry_point_by_default() {
        let counter = Counter;
        assert!(counter.as_invoke().is_none());
        assert!(counter.has_method("count"));
        assert!(matches!(
            counter.call_method("count", &[Value::Null]).unwrap(),
            Value::Int(1)
        ));
        assert!(counter.call_method("missing", &[]).is_err());
    }
}
