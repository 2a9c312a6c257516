//! Compile-time dependency injection derives.
//!
//! - `#[derive(Context)]` makes every field of the root context extractable
//! - `#[derive(FromContext)]` builds a type by extracting each of its fields
//!
//! Generated code refers to `crate::FromRef`, so the consuming crate must
//! re-export its `FromRef` trait at the crate root.

use proc_macro::TokenStream;

mod context;
mod fields;
mod from_context;

/// Derives `FromRef<Self>` for the type of every field.
///
/// Field types must be `Clone` and pairwise distinct, since each one becomes
/// the key it is resolved by.
///
/// ```ignore
/// #[derive(Context, Clone)]
/// pub struct Context {
///     pub graph: AppGraph,
///     pub config: AppConfig,
/// }
///
/// // impl FromRef<Context> for AppGraph { .. ctx.graph.clone() }
/// // impl FromRef<Context> for AppConfig { .. ctx.config.clone() }
/// ```
#[proc_macro_derive(Context)]
pub fn derive_context(input: TokenStream) -> TokenStream {
    context::derive_context_impl(input)
}

/// Derives `FromRef<Context>` by resolving each field from the context.
///
/// The context type defaults to `Context` in scope at the derive site and can
/// be overridden with `#[from_context(Context = "path::To")]`.
///
/// ```ignore
/// #[derive(FromContext, Clone)]
/// pub struct PersonService {
///     persons: PersonRepository,
///     resources: ResourceRepository,
/// }
/// ```
#[proc_macro_derive(FromContext, attributes(from_context))]
pub fn derive_from_context(input: TokenStream) -> TokenStream {
    from_context::derive_from_context_impl(input)
}
