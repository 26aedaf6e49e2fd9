//! Service container support.
//!
//! This module provides the standard [`Lookup`](rollcall_core::Lookup)
//! implementation. Use it when listeners are registered in code; wrap your own
//! dependency-injection container in a `Lookup` impl otherwise.

#[cfg(feature = "inventory")]
pub mod collected;
pub mod registry;

#[cfg(feature = "inventory")]
pub use collected::{CollectedType, collected_types};
pub use registry::{Container, ContainerBuilder};
