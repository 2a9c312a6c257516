//! Backend implementations for graph stores.
//!
//! Each backend implements the core traits from [`crate::graph::traits`]:
//!
//! - [`SparqlExecutor`](crate::graph::SparqlExecutor) - Required
//! - [`GraphClient`](crate::graph::GraphClient) - Required
//!
//! # Available Backends
//!
//! | Backend | Module | Status |
//! |---------|--------|--------|
//! | oxigraph (in-memory) | [`oxigraph`] | Available |

pub mod oxigraph;
