//! # rollcall-core
//!
//! Core traits and value model for the rollcall listener configuration checker.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! containers and plugins that only need to describe what they provide,
//! without pulling in the resolver itself.
//!
//! # Building Blocks
//!
//! ## Values ([`Value`])
//!
//! Raw configuration is a tree of dynamic values: scalars, lists, maps,
//! constructed instances and closures. [`Configuration`] maps event keys to
//! such values.
//!
//! ## Capabilities ([`Object`], [`Invoke`])
//!
//! Instead of probing method tables at runtime, an instance states its class
//! name, its public methods, and whether it carries the single invocation
//! entry point.
//!
//! ## Lookup ([`Lookup`])
//!
//! The service-location collaborator: `has`/`get` for identifiers, plus
//! [`TypeDescriptor`] reflection metadata for class names.
//!
//! ## Declarations ([`ListenerDeclaration`])
//!
//! The tagged union a listener value is classified into before resolution.
//! A successful resolution yields a [`Callable`].
//!
//! # Error Types
//!
//! - [`CheckError`] - Top-level error of a configuration check
//! - [`InvalidEventConfigurationFormat`] - Malformed configuration map
//! - [`InvalidListenerConfiguration`] - Unresolvable listener declaration
//! - [`LookupError`] - Lookup failures

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod callable;
mod config;
mod declaration;
mod error;
mod lookup;
mod object;
mod value;

// Re-exports
pub use callable::Callable;
pub use config::{Configuration, EventKey};
pub use declaration::ListenerDeclaration;
pub use error::{
    BoxError, CheckError, Diagnostic, ErrorKind, InvalidEventConfigurationFormat,
    InvalidListenerConfiguration, LookupError,
};
pub use lookup::{Lookup, MethodDescriptor, Receiver, TypeDescriptor};
pub use object::{Invoke, ListenerResult, Object, StaticFn};
pub use value::{Items, Value};
