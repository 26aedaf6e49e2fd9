//! Type metadata gathered with `inventory`.
//!
//! Crates defining listener types can submit their descriptors from anywhere:
//!
//! ```rust,ignore
//! rollcall_std::inventory::submit! {
//!     rollcall_std::container::CollectedType::new(Handler::descriptor)
//! }
//! ```
//!
//! [`ContainerBuilder::collect_types`](super::ContainerBuilder::collect_types)
//! then registers all of them at once.

use rollcall_core::TypeDescriptor;

/// A type descriptor constructor submitted via `inventory`.
pub struct CollectedType {
    /// Builds the descriptor.
    pub describe: fn() -> TypeDescriptor,
}

impl CollectedType {
    /// Create a new collected type entry.
    pub const fn new(describe: fn() -> TypeDescriptor) -> Self {
        Self { describe }
    }
}

inventory::collect!(CollectedType);

/// Builds every submitted descriptor, in no particular order.
pub fn collected_types() -> impl Iterator<Item = TypeDescriptor> {
    inventory::iter::<CollectedType>
        .into_iter()
        .map(|entry| (entry.describe)())
}
