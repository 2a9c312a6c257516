//! Research explorer
//!
//! Read-only HTTP JSON API over an in-memory knowledge graph of persons,
//! works, places, subjects, languages and the scholarship about them.

pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod context;
pub mod di;
pub mod error;
pub mod filter;
pub mod graph;
pub mod models;
pub mod repositories;
pub mod services;
pub mod vocab;

// Re-export FromRef at crate root for di-macros generated code
pub use di::FromRef;
