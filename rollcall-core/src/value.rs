//! Dynamic values a raw listener configuration is made of.

use crate::object::{Invoke, ListenerResult, Object};
use std::{fmt, slice, sync::Arc};

/// A dynamically typed configuration value.
///
/// Configuration sources (files, builders, service containers) produce
/// `Value`s; the checker inspects their shape without converting them.
#[derive(Clone, Default)]
pub enum Value {
    /// Absence of a value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string: class name, service identifier or plain text.
    String(String),
    /// An ordered sequence.
    List(Vec<Value>),
    /// An ordered, string-keyed record.
    Map(Vec<(String, Value)>),
    /// An already constructed instance.
    Object(Arc<dyn Object>),
    /// A closure-like invocable value.
    Callable(Arc<dyn Invoke>),
}

impl Value {
    /// Wraps an instance.
    pub fn object<O: Object>(object: O) -> Self {
        Value::Object(Arc::new(object))
    }

    /// Wraps a closure.
    pub fn callable<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> ListenerResult + Send + Sync + 'static,
    {
        Value::Callable(Arc::new(f))
    }

    /// Builds a two-element `[target, method]` list.
    pub fn pair(target: impl Into<Value>, method: impl Into<Value>) -> Self {
        Value::List(vec![target.into(), method.into()])
    }

    /// Name of this value's type as printed in diagnostics.
    ///
    /// Lists and maps are both reported as `array`, objects by their class
    /// name and callables as `Closure`.
    pub fn kind(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(_) => "bool".to_string(),
            Value::Int(_) => "int".to_string(),
            Value::Float(_) => "float".to_string(),
            Value::String(_) => "string".to_string(),
            Value::List(_) | Value::Map(_) => "array".to_string(),
            Value::Object(object) => object.class_name().to_string(),
            Value::Callable(_) => "Closure".to_string(),
        }
    }

    /// Returns the string payload, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Whether the value can be traversed as a sequence of items.
    pub fn is_iterable(&self) -> bool {
        matches!(self, Value::List(_) | Value::Map(_))
    }

    /// Iterates the items of a list, or the values of a map, in order.
    ///
    /// Returns `None` for values that are not iterable.
    pub fn items(&self) -> Option<Items<'_>> {
        match self {
            Value::List(items) => Some(Items::List(items.iter())),
            Value::Map(entries) => Some(Items::Map(entries.iter())),
            _ => None,
        }
    }
}

/// Iterator over the items of an iterable [`Value`].
pub enum Items<'a> {
    /// Items of a list.
    List(slice::Iter<'a, Value>),
    /// Values of a map.
    Map(slice::Iter<'a, (String, Value)>),
}

impl<'a> Iterator for Items<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Items::List(iter) => iter.next(),
            Items::Map(iter) => iter.next().map(|(_, value)| value),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Items::List(iter) => iter.size_hint(),
            Items::Map(iter) => iter.size_hint(),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Value::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::List(items) => f.debug_tuple("List").field(items).finish(),
            Value::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
            Value::Object(object) => f.debug_tuple("Object").field(&object.class_name()).finish(),
            Value::Callable(_) => f.write_str("Callable(..)"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::List(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_diagnostic_names() {
        assert_eq!(Value::Null.kind(), "null");
        assert_eq!(Value::from(7).kind(), "int");
        assert_eq!(Value::from("x").kind(), "string");
        assert_eq!(Value::pair("A", "b").kind(), "array");
        assert_eq!(Value::Map(vec![]).kind(), "array");
        assert_eq!(Value::callable(|_| Ok(Value::Null)).kind(), "Closure");
    }

    #[test]
    fn map_items_yield_values_in_order() {
        let map = Value::Map(vec![
            ("first".into(), Value::from("a")),
            ("second".into(), Value::from("b")),
        ]);
        let items: Vec<_> = map.items().unwrap().filter_map(Value::as_str).collect();
        assert_eq!(items, ["a", "b"]);
    }

    #[test]
    fn scalars_are_not_iterable() {
        assert!(Value::from(1).items().is_none());
        assert!(!Value::from("list").is_iterable());
        assert!(Value::List(vec![]).is_iterable());
    }
}
