//! # rollcall-std
//!
//! Standard implementations for the rollcall listener configuration checker.
//!
//! This crate provides:
//! - **Containers**: [`Container`], [`ContainerBuilder`]
//! - **Instrumentation**: [`TracingLookup`]
//! - **Collected types**: `CollectedType` via `inventory` (feature `inventory`)
//! - **JSON ingestion**: the `json` module (feature `json`)
//! - **Testing utilities**: [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use rollcall_core;

// Modules
pub mod container;
#[cfg(feature = "json")]
pub mod json;
pub mod testing;
mod traced;

pub use container::{Container, ContainerBuilder};
pub use traced::TracingLookup;

#[cfg(feature = "inventory")]
pub use inventory;
