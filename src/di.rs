//! Dependency injection infrastructure.
//!
//! Compile-time wiring through the `FromRef` trait and the derives from
//! `di-macros`:
//!
//! - `#[derive(Context)]` on the root context makes every field extractable
//! - `#[derive(FromContext)]` on a repository or service builds it by
//!   extracting each of its fields from the context
//!
//! # Example
//!
//! ```ignore
//! use crate::context::{AppGraph, Context};
//! use crate::di::FromContext;
//!
//! #[derive(FromContext, Clone)]
//! pub struct PlaceRepository {
//!     graph: AppGraph, // AppGraph::from_ref(&ctx)
//! }
//!
//! #[derive(FromContext, Clone)]
//! pub struct PlaceService {
//!     places: PlaceRepository, // PlaceRepository::from_ref(&ctx)
//! }
//!
//! let service: PlaceService = ctx.resolve();
//! ```

/// Extracts a value from a reference to another type.
pub trait FromRef<T> {
    fn from_ref(input: &T) -> Self;
}

/// Any `Clone` type can be extracted from itself.
impl<T: Clone> FromRef<T> for T {
    fn from_ref(input: &T) -> Self {
        input.clone()
    }
}

pub use di_macros::{Context, FromContext};
