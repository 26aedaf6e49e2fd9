//! Procedural macros for rollcall.
//!
//! Use them through the `rollcall` crate with the `macros` feature enabled.

use proc_macro::TokenStream;

mod service;

/// Turns an inherent `impl` block into a listener service.
///
/// Every `pub fn` of the block must have one of the listener signatures:
///
/// ```rust,ignore
/// pub fn on_created(&self, args: &[Value]) -> ListenerResult { ... }   // instance method
/// pub fn handle_static(args: &[Value]) -> ListenerResult { ... }       // static method
/// ```
///
/// The macro generates:
/// - `impl Object` listing those methods and dispatching `call_method` to them
/// - `impl Invoke` and the entry point, when a `pub fn invoke(&self, ..)` exists
/// - an associated `descriptor()` returning the matching `TypeDescriptor`
///
/// The class name defaults to the type name; override it with
/// `#[service(name = "App.Handler")]`.
#[proc_macro_attribute]
pub fn service(attr: TokenStream, item: TokenStream) -> TokenStream {
    service::service_impl(attr, item)
}
