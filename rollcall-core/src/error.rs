//! Error types for rollcall.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`CheckError`] - Top-level error returned by a configuration check
//! - [`InvalidEventConfigurationFormat`] - The configuration map itself is malformed
//! - [`InvalidListenerConfiguration`] - A listener declaration cannot be resolved
//! - [`LookupError`] - Failures reported by a [`Lookup`] implementation
//!
//! Every error implements [`Diagnostic`] so a surrounding error-reporting layer
//! can render a short name and a remediation hint.
//!
//! [`Lookup`]: crate::Lookup

use std::fmt;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Expected configuration layout, shown in remediation hints.
const CONFIGURATION_FORMAT: &str = "\
The listener checker accepts a map in the following format:
    {
        eventName1: [listener1, listener2, ...],
        eventName2: [listener3, listener4, ...],
        ...
    }";

const LISTENER_FORMAT: &str = "\
A listener must be one of:
    - a closure or other callable value
    - an object exposing the invocation entry point
    - a class name or service identifier resolving to such an object
    - a [target, \"method\"] pair where target is a class name, a service
      identifier or an object, and method is a public method of it";

/// The failure taxonomy, independent of the concrete error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A map key is not an explicit event name, or a listener list is not iterable.
    ConfigurationFormatError,
    /// A listener declaration matches none of the recognised shapes.
    ShapeError,
    /// A pair target class cannot be looked up and has no such static method.
    UnresolvableTarget,
    /// A pair target was resolved but lacks the named method.
    MissingMethod,
    /// A resolved object or class lacks the invocation entry point.
    MissingInvokeMethod,
    /// The lookup failed or produced nothing usable.
    InstantiationFailure,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::ConfigurationFormatError => "configuration format error",
            ErrorKind::ShapeError => "shape error",
            ErrorKind::UnresolvableTarget => "unresolvable target",
            ErrorKind::MissingMethod => "missing method",
            ErrorKind::MissingInvokeMethod => "missing invoke method",
            ErrorKind::InstantiationFailure => "instantiation failure",
        };
        f.write_str(name)
    }
}

/// Human-facing description of a failure.
///
/// Friendly error renderers read [`name`](Diagnostic::name) as a headline and
/// [`solution`](Diagnostic::solution) as the suggested fix.
pub trait Diagnostic: std::error::Error {
    /// A short summary of what went wrong.
    fn name(&self) -> &'static str;

    /// A hint describing the expected configuration shape.
    fn solution(&self) -> Option<&'static str> {
        None
    }
}

/// Top-level error returned by a configuration check.
#[derive(Error, Debug)]
pub enum CheckError {
    /// The configuration map is malformed.
    #[error(transparent)]
    Format(#[from] InvalidEventConfigurationFormat),

    /// A listener declaration could not be resolved.
    #[error(transparent)]
    Listener(#[from] InvalidListenerConfiguration),
}

impl CheckError {
    /// The failure kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CheckError::Format(err) => err.kind(),
            CheckError::Listener(err) => err.kind(),
        }
    }
}

impl Diagnostic for CheckError {
    fn name(&self) -> &'static str {
        match self {
            CheckError::Format(err) => err.name(),
            CheckError::Listener(err) => err.name(),
        }
    }

    fn solution(&self) -> Option<&'static str> {
        match self {
            CheckError::Format(err) => err.solution(),
            CheckError::Listener(err) => err.solution(),
        }
    }
}

/// The shape of the configuration map is invalid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidEventConfigurationFormat {
    /// An entry was keyed by a position instead of an event name.
    #[error("Incorrect event listener format. Format with event name must be used. Got {key}.")]
    PositionalKey {
        /// The offending position.
        key: usize,
    },

    /// The listeners of an event are not an iterable collection.
    #[error("Event listeners for {event} must be an iterable, {kind} given.")]
    NotIterable {
        /// The event name.
        event: String,
        /// Kind of the value found instead.
        kind: String,
    },

    /// The configuration is neither a map nor a list.
    #[error("Event configuration must be a map, {kind} given.")]
    NotAMap {
        /// Kind of the value found instead.
        kind: String,
    },
}

impl InvalidEventConfigurationFormat {
    /// The failure kind.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::ConfigurationFormatError
    }
}

impl Diagnostic for InvalidEventConfigurationFormat {
    fn name(&self) -> &'static str {
        "Configuration format passed to the listener checker is invalid."
    }

    fn solution(&self) -> Option<&'static str> {
        Some(CONFIGURATION_FORMAT)
    }
}

/// A listener declaration cannot be turned into a callable.
#[derive(Error, Debug)]
pub enum InvalidListenerConfiguration {
    /// The declaration matches no recognised shape.
    #[error("Listener must be a callable. Got {kind}.")]
    Shape {
        /// Kind of the rejected value.
        kind: String,
    },

    /// A `[class, method]` target could not be provided and the method is not static.
    #[error(
        "Could not instantiate \"{target}\" or \"{method}\" method is not defined in this class."
    )]
    UnresolvableTarget {
        /// The class name.
        target: String,
        /// The method name.
        method: String,
    },

    /// A `[target, method]` target was resolved but has no such public method.
    #[error("\"{method}\" method is not defined in \"{class}\" class.")]
    MissingMethod {
        /// The method name.
        method: String,
        /// Class of the resolved target.
        class: String,
    },

    /// An object used directly as a listener has no invocation entry point.
    #[error("Listener must be a callable. Got {class}.")]
    NotInvokable {
        /// Class of the object.
        class: String,
    },

    /// A class or service resolved to something without the invocation entry point.
    #[error("\"__invoke\" method is not defined in \"{class}\" class.")]
    MissingInvokeMethod {
        /// Class of the resolved value.
        class: String,
    },

    /// The lookup raised while providing the listener.
    #[error(
        "Could not instantiate event listener or listener class has invalid configuration. Got {kind}."
    )]
    Lookup {
        /// Kind of the declaration being resolved.
        kind: String,
        /// The lookup failure.
        #[source]
        source: LookupError,
    },

    /// Nothing usable could be produced for the class or identifier.
    #[error("Failed to instantiate \"{class}\" class.")]
    NotInstantiable {
        /// The class name or identifier.
        class: String,
    },
}

impl InvalidListenerConfiguration {
    /// Shorthand for a [`Shape`](Self::Shape) error.
    pub fn shape(kind: impl Into<String>) -> Self {
        InvalidListenerConfiguration::Shape { kind: kind.into() }
    }

    /// The failure kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            InvalidListenerConfiguration::Shape { .. } => ErrorKind::ShapeError,
            InvalidListenerConfiguration::UnresolvableTarget { .. } => {
                ErrorKind::UnresolvableTarget
            }
            InvalidListenerConfiguration::MissingMethod { .. } => ErrorKind::MissingMethod,
            InvalidListenerConfiguration::NotInvokable { .. }
            | InvalidListenerConfiguration::MissingInvokeMethod { .. } => {
                ErrorKind::MissingInvokeMethod
            }
            InvalidListenerConfiguration::Lookup { .. }
            | InvalidListenerConfiguration::NotInstantiable { .. } => {
                ErrorKind::InstantiationFailure
            }
        }
    }
}

impl Diagnostic for InvalidListenerConfiguration {
    fn name(&self) -> &'static str {
        "Invalid event listener configuration."
    }

    fn solution(&self) -> Option<&'static str> {
        Some(LISTENER_FORMAT)
    }
}

/// Errors reported by a lookup implementation.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Nothing is registered under the identifier.
    #[error("no entry found for identifier \"{0}\"")]
    NotFound(String),

    /// The entry exists but building it failed.
    #[error("failed to build \"{id}\"")]
    Build {
        /// The identifier being built.
        id: String,
        /// Why the build failed.
        #[source]
        source: BoxError,
    },

    /// A custom lookup error.
    #[error(transparent)]
    Custom(BoxError),
}

// Convenience conversions
impl From<BoxError> for LookupError {
    fn from(err: BoxError) -> Self {
        LookupError::Custom(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_errors_name_the_offending_key() {
        let err = InvalidEventConfigurationFormat::PositionalKey { key: 0 };
        assert_eq!(
            err.to_string(),
            "Incorrect event listener format. Format with event name must be used. Got 0."
        );
        assert_eq!(err.kind(), ErrorKind::ConfigurationFormatError);
        assert!(err.solution().unwrap().contains("eventName1: [listener1, listener2, ...]"));
    }

    #[test]
    fn listener_errors_map_to_kinds() {
        let missing = InvalidListenerConfiguration::NotInvokable {
            class: "Plain".into(),
        };
        assert_eq!(missing.kind(), ErrorKind::MissingInvokeMethod);
        assert_eq!(missing.to_string(), "Listener must be a callable. Got Plain.");

        let lookup = InvalidListenerConfiguration::Lookup {
            kind: "array".into(),
            source: LookupError::NotFound("x".into()),
        };
        assert_eq!(lookup.kind(), ErrorKind::InstantiationFailure);
        assert!(std::error::Error::source(&lookup).is_some());
    }

    #[test]
    fn check_error_is_transparent() {
        let err: CheckError = InvalidListenerConfiguration::shape("int").into();
        assert_eq!(err.to_string(), "Listener must be a callable. Got int.");
        assert_eq!(err.kind(), ErrorKind::ShapeError);
        assert_eq!(err.name(), "Invalid event listener configuration.");
    }
}
