//! Core types for the trirow layout engine.
//!
//! This crate provides the foundational types shared by the layout and CLI crates:
//! - Geometry value types (constraints, measured sizes, placements)
//! - Row configuration
//! - Error types
//!
//! It carries no layout logic of its own.

pub mod config;
pub mod errors;
pub mod types;

pub use config::RowConfig;
pub use errors::*;
pub use types::*;
