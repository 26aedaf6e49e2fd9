//! # Configuration Checking
//!
//! Walks an event → listeners configuration and proves every listener can be
//! resolved, so that a broken configuration fails at startup instead of when
//! an event fires.
//!
//! A check either validates the whole configuration or stops at the first
//! problem, in insertion order: events first, then the listeners of each
//! event in sequence. Failures are never accumulated.

use crate::resolver::Resolver;
use rollcall_core::{
    CheckError, Configuration, EventKey, InvalidEventConfigurationFormat, Lookup, Value,
};

/// Validates listener configurations against a lookup.
///
/// The checker keeps no state between calls; checking the same configuration
/// twice against a side-effect-free lookup gives the same answer.
///
/// # Example
///
/// ```rust,ignore
/// let checker = ConfigurationChecker::new(container);
/// checker.check(
///     &Configuration::new()
///         .on("user.created", vec![Value::pair("Mailer", "send_welcome")]),
/// )?;
/// ```
#[derive(Debug, Clone)]
pub struct ConfigurationChecker<L> {
    resolver: Resolver<L>,
}

impl<L: Lookup> ConfigurationChecker<L> {
    /// Create a checker with a default [`Resolver`] over `lookup`.
    pub fn new(lookup: L) -> Self {
        Self::with_resolver(Resolver::new(lookup))
    }

    /// Create a checker around a configured resolver.
    pub fn with_resolver(resolver: Resolver<L>) -> Self {
        Self { resolver }
    }

    /// The resolver used for each listener.
    pub fn resolver(&self) -> &Resolver<L> {
        &self.resolver
    }

    /// Checks every event and every listener of `configuration`.
    pub fn check(&self, configuration: &Configuration) -> Result<(), CheckError> {
        for (key, listeners) in configuration.iter() {
            if let Err(error) = self.check_event(key, listeners) {
                #[cfg(feature = "tracing")]
                tracing::warn!(event = %key, kind = %error.kind(), %error, "listener configuration rejected");
                return Err(error);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(events = configuration.len(), "listener configuration validated");
        Ok(())
    }

    /// Converts a raw value into a [`Configuration`], then checks it.
    pub fn check_value(&self, configuration: Value) -> Result<(), CheckError> {
        let configuration = Configuration::try_from(configuration)?;
        self.check(&configuration)
    }

    fn check_event(&self, key: &EventKey, listeners: &Value) -> Result<(), CheckError> {
        let event = match key {
            EventKey::Named(name) => name,
            EventKey::Index(index) => {
                return Err(InvalidEventConfigurationFormat::PositionalKey { key: *index }.into());
            }
        };

        let items = listeners
            .items()
            .ok_or_else(|| InvalidEventConfigurationFormat::NotIterable {
                event: event.clone(),
                kind: listeners.kind(),
            })?;

        #[cfg(feature = "tracing")]
        tracing::debug!(event = %event, "checking event listeners");

        for listener in items {
            self.resolver.resolve(listener)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollcall_core::ErrorKind;
    use rollcall_std::{Container, testing::PlainObject};

    #[test]
    fn empty_configuration_is_valid() {
        let checker = ConfigurationChecker::new(Container::default());
        assert!(checker.check(&Configuration::new()).is_ok());
    }

    #[test]
    fn events_are_checked_before_later_events() {
        let checker = ConfigurationChecker::new(Container::default());
        let configuration = Configuration::new()
            .on("first", vec![Value::Int(1)])
            .push(Value::List(vec![]));

        let err = checker.check(&configuration).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeError);
        assert_eq!(err.to_string(), "Listener must be a callable. Got int.");
    }

    #[test]
    fn listeners_stop_at_first_failure() {
        let checker = ConfigurationChecker::new(Container::default());
        let configuration = Configuration::new().on(
            "created",
            vec![
                Value::callable(|_| Ok(Value::Null)),
                Value::object(PlainObject::new("Data")),
                Value::Null,
            ],
        );

        let err = checker.check(&configuration).unwrap_err();
        assert_eq!(err.to_string(), "Listener must be a callable. Got Data.");
    }

    #[test]
    fn raw_values_must_be_maps() {
        let checker = ConfigurationChecker::new(Container::default());
        let err = checker.check_value(Value::from("events")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigurationFormatError);
    }
}
