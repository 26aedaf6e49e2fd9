//! The event → listeners configuration map.

use crate::{error::InvalidEventConfigurationFormat, value::Value};
use std::fmt;

/// Key of a configuration entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventKey {
    /// An explicit event name.
    Named(String),
    /// An implicit position, produced by list-style entries.
    Index(usize),
}

impl EventKey {
    /// The event name, if the key is explicit.
    pub fn name(&self) -> Option<&str> {
        match self {
            EventKey::Named(name) => Some(name),
            EventKey::Index(_) => None,
        }
    }

    /// Key for a map entry. Integer-like keys (`"0"`, `"17"`, not `"017"`)
    /// become positions.
    pub fn from_map_key(key: String) -> Self {
        let integer_like = key.bytes().all(|b| b.is_ascii_digit())
            && (key == "0" || !key.starts_with('0'));
        match key.parse() {
            Ok(index) if integer_like => EventKey::Index(index),
            _ => EventKey::Named(key),
        }
    }
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKey::Named(name) => f.write_str(name),
            EventKey::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for EventKey {
    fn from(name: &str) -> Self {
        EventKey::Named(name.to_string())
    }
}

impl From<String> for EventKey {
    fn from(name: String) -> Self {
        EventKey::Named(name)
    }
}

impl From<usize> for EventKey {
    fn from(index: usize) -> Self {
        EventKey::Index(index)
    }
}

/// An ordered mapping from event keys to listener lists.
///
/// Keys are unique: inserting an existing key replaces its listeners in
/// place. Iteration follows first insertion order.
///
/// # Example
///
/// ```rust,ignore
/// let configuration = Configuration::new()
///     .on("user.created", vec![Value::pair("Mailer", "send_welcome")])
///     .on("user.deleted", vec![Value::from("AuditListener")]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Configuration {
    entries: Vec<(EventKey, Value)>,
}

impl Configuration {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds listeners for a named event.
    pub fn on(mut self, event: impl Into<String>, listeners: impl Into<Value>) -> Self {
        self.insert(EventKey::Named(event.into()), listeners);
        self
    }

    /// Appends listeners under the next free position, the way list-style
    /// entries end up keyed.
    pub fn push(mut self, listeners: impl Into<Value>) -> Self {
        let next = self
            .entries
            .iter()
            .filter_map(|(key, _)| match key {
                EventKey::Index(index) => Some(index + 1),
                EventKey::Named(_) => None,
            })
            .max()
            .unwrap_or(0);
        self.insert(EventKey::Index(next), listeners);
        self
    }

    /// Inserts or replaces the listeners under `key`.
    pub fn insert(&mut self, key: impl Into<EventKey>, listeners: impl Into<Value>) {
        let key = key.into();
        let listeners = listeners.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = listeners,
            None => self.entries.push((key, listeners)),
        }
    }

    /// Listeners registered under `key`.
    pub fn get(&self, key: &EventKey) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, listeners)| listeners)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&EventKey, &Value)> {
        self.entries.iter().map(|(key, listeners)| (key, listeners))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the configuration has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Value> for Configuration {
    type Error = InvalidEventConfigurationFormat;

    /// Maps keep their names unless a key is integer-like, lists are keyed
    /// by position.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let mut configuration = Configuration::new();
        match value {
            Value::Map(entries) => {
                for (event, listeners) in entries {
                    configuration.insert(EventKey::from_map_key(event), listeners);
                }
            }
            Value::List(items) => {
                for (index, listeners) in items.into_iter().enumerate() {
                    configuration.insert(EventKey::Index(index), listeners);
                }
            }
            other => {
                return Err(InvalidEventConfigurationFormat::NotAMap { kind: other.kind() });
            }
        }
        Ok(configuration)
    }
}

impl<K: Into<EventKey>, V: Into<Value>> FromIterator<(K, V)> for Configuration {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut configuration = Configuration::new();
        for (key, listeners) in iter {
            configuration.insert(key, listeners);
        }
        configuration
    }
}
