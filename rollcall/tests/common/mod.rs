#![allow(dead_code)]

use rollcall::{Container, Invoke, ListenerResult, Object, TypeDescriptor, Value};

// ============================================================================
// Listener Classes
// ============================================================================

/// An event class with a plain `register` method and no entry point.
pub struct Event;

impl Event {
    pub fn descriptor() -> TypeDescriptor {
        TypeDescriptor::new("Event").method("register")
    }
}

impl Object for Event {
    fn class_name(&self) -> &str {
        "Event"
    }

    fn has_method(&self, method: &str) -> bool {
        method == "register"
    }

    fn call_method(&self, method: &str, _args: &[Value]) -> ListenerResult {
        match method {
            "register" => Ok(Value::from("registered")),
            other => Err(format!("unknown method {other}").into()),
        }
    }
}

/// A handler class exposing one static and one instance method.
///
/// It is described to the container but never provided by it.
pub struct Handler;

impl Handler {
    pub fn descriptor() -> TypeDescriptor {
        TypeDescriptor::new("Handler")
            .method("handle")
            .static_method("handle_static", Handler::handle_static)
    }

    pub fn handle_static(_args: &[Value]) -> ListenerResult {
        Ok(Value::from("static"))
    }
}

/// A handler class carrying the invocation entry point.
pub struct HandlerInvokable;

impl HandlerInvokable {
    pub fn descriptor() -> TypeDescriptor {
        TypeDescriptor::new("HandlerInvokable").invokable()
    }
}

impl Invoke for HandlerInvokable {
    fn invoke(&self, args: &[Value]) -> ListenerResult {
        Ok(Value::Int(args.len() as i64))
    }
}

impl Object for HandlerInvokable {
    fn class_name(&self) -> &str {
        "HandlerInvokable"
    }

    fn has_method(&self, _method: &str) -> bool {
        false
    }

    fn call_method(&self, method: &str, _args: &[Value]) -> ListenerResult {
        Err(format!("unknown method {method}").into())
    }

    fn as_invoke(&self) -> Option<&dyn Invoke> {
        Some(self)
    }
}

/// A provided class that can be built but not invoked.
pub struct TestClass;

impl Object for TestClass {
    fn class_name(&self) -> &str {
        "TestClass"
    }

    fn has_method(&self, _method: &str) -> bool {
        false
    }

    fn call_method(&self, method: &str, _args: &[Value]) -> ListenerResult {
        Err(format!("unknown method {method}").into())
    }
}

/// An untyped bag of properties.
pub struct StdClass;

impl Object for StdClass {
    fn class_name(&self) -> &str {
        "stdClass"
    }

    fn has_method(&self, _method: &str) -> bool {
        false
    }

    fn call_method(&self, method: &str, _args: &[Value]) -> ListenerResult {
        Err(format!("unknown method {method}").into())
    }
}

// ============================================================================
// Containers
// ============================================================================

/// The container most scenarios run against.
///
/// - `Event`, `HandlerInvokable` and `TestClass` are provided
/// - `Handler` and `BadInvokableClass` are known types that cannot be built
/// - `handler.service` is an invokable service under a non-class identifier
/// - `handler.alias` names `HandlerInvokable`
/// - `int` and `string` hold scalars
pub fn container() -> Container {
    Container::builder()
        .service(Event::descriptor(), Event)
        .service(HandlerInvokable::descriptor(), HandlerInvokable)
        .service(TypeDescriptor::new("TestClass"), TestClass)
        .register_type(Handler::descriptor())
        .register_type(TypeDescriptor::new("BadInvokableClass").invokable())
        .instance("handler.service", HandlerInvokable)
        .value("handler.alias", "HandlerInvokable")
        .value("int", 7)
        .value("string", "test")
        .build()
}

/// A container whose `Event` definition fails to build.
pub fn broken_container() -> Container {
    Container::builder()
        .register_type(Event::descriptor())
        .factory("Event", || Err("constructor threw".into()))
        .build()
}

/// Listener declarations that must resolve against [`container`].
pub fn good_listeners() -> Vec<(&'static str, Value)> {
    vec![
        ("closure", Value::callable(|_| Ok(Value::Null))),
        ("invokable instance", Value::object(HandlerInvokable)),
        ("invokable class name", Value::from("HandlerInvokable")),
        ("invokable service", Value::from("handler.service")),
        ("aliased service", Value::from("handler.alias")),
        ("provided class pair", Value::pair("Event", "register")),
        (
            "instance pair",
            Value::pair(Value::object(Event), "register"),
        ),
        ("static pair", Value::pair("Handler", "handle_static")),
    ]
}

/// Listener declarations that must fail against [`container`], with the
/// message each produces.
pub fn bad_listeners() -> Vec<(Value, &'static str)> {
    vec![
        (Value::Int(1), "Listener must be a callable. Got int."),
        (Value::Null, "Listener must be a callable. Got null."),
        (Value::Float(1.5), "Listener must be a callable. Got float."),
        (Value::Bool(true), "Listener must be a callable. Got bool."),
        (
            Value::List(vec![]),
            "Listener must be a callable. Got array.",
        ),
        (
            Value::List(vec![Value::from("Event")]),
            "Listener must be a callable. Got array.",
        ),
        (
            Value::pair("test", "register"),
            "Listener must be a callable. Got array.",
        ),
        (
            Value::pair(Value::Int(1), "register"),
            "Listener must be a callable. Got array.",
        ),
        (
            Value::object(StdClass),
            "Listener must be a callable. Got stdClass.",
        ),
        (
            Value::object(Event),
            "Listener must be a callable. Got Event.",
        ),
        (
            Value::pair("Event", "nonExistentMethod"),
            "\"nonExistentMethod\" method is not defined in \"Event\" class.",
        ),
        (
            Value::pair("Handler", "handle"),
            "Could not instantiate \"Handler\" or \"handle\" method is not defined in this class.",
        ),
        (
            Value::from("TestClass"),
            "\"__invoke\" method is not defined in \"TestClass\" class.",
        ),
        (
            Value::from("BadInvokableClass"),
            "Failed to instantiate \"BadInvokableClass\" class.",
        ),
        (
            Value::from("test"),
            "Failed to instantiate \"test\" class.",
        ),
        (Value::from("int"), "Listener must be a callable. Got int."),
    ]
}
