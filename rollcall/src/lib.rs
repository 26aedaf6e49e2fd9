//! # rollcall - Fail-Fast Listener Configuration Checking
//!
//! `rollcall` verifies, before any event is dispatched, that every listener
//! declared in an event → listeners configuration can be resolved into
//! something callable. Nothing is invoked; the check only proves that it
//! could be.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rollcall::{Configuration, ConfigurationChecker, Container, Value};
//!
//! let container = Container::builder()
//!     .service(Mailer::descriptor(), Mailer::default())
//!     .build();
//!
//! let configuration = Configuration::new()
//!     .on("user.created", vec![Value::pair("Mailer", "send_welcome")])
//!     .on("user.deleted", vec![Value::callable(|_| Ok(Value::Null))]);
//!
//! ConfigurationChecker::new(container).check(&configuration)?;
//! ```
//!
//! ## Accepted Listener Shapes
//!
//! - closures (`Value::callable`)
//! - instances carrying the invocation entry point
//! - class names and service identifiers the lookup can provide
//! - `[target, "method"]` pairs, where the target is a class name, a service
//!   identifier or an instance
//!
//! Anything else is reported with a typed error implementing [`Diagnostic`].

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod checker;
mod resolver;

pub use checker::ConfigurationChecker;
pub use resolver::{DEFAULT_MAX_INDIRECTION, Resolver};

pub use rollcall_core::{
    // Errors
    BoxError,
    // Resolution
    Callable,
    CheckError,
    // Configuration
    Configuration,
    Diagnostic,
    ErrorKind,
    EventKey,
    InvalidEventConfigurationFormat,
    InvalidListenerConfiguration,
    // Capabilities
    Invoke,
    Items,
    ListenerDeclaration,
    ListenerResult,
    // Lookup
    Lookup,
    LookupError,
    MethodDescriptor,
    Object,
    Receiver,
    StaticFn,
    TypeDescriptor,
    Value,
};

// Standard lookup
pub use rollcall_std::{Container, ContainerBuilder, TracingLookup};

/// Service container support.
pub mod container {
    pub use rollcall_std::container::{Container, ContainerBuilder};

    #[cfg(feature = "inventory")]
    pub use rollcall_std::container::{CollectedType, collected_types};
}

/// JSON configuration ingestion.
#[cfg(feature = "json")]
pub mod json {
    pub use rollcall_std::json::{
        JsonConfigError, configuration_from_json, configuration_from_str, value_from_json,
    };
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use rollcall_std::testing::*;
}

/// Prelude module - common imports for rollcall.
///
/// # Usage
///
/// ```rust,ignore
/// use rollcall::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Resolution
        Callable,
        // Errors
        CheckError,
        // Configuration
        Configuration,
        ConfigurationChecker,
        // Lookup
        Container,
        Diagnostic,
        ErrorKind,
        // Capabilities
        Invoke,
        ListenerResult,
        Lookup,
        Object,
        Resolver,
        TypeDescriptor,
        Value,
    };
}

#[cfg(feature = "macros")]
pub use rollcall_macros::service;

#[cfg(feature = "inventory")]
pub use rollcall_std::inventory;
