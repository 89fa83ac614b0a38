//! Error types for the trirow engine.

use thiserror::Error;

use crate::types::Slot;

/// Top-level error type for the trirow engine.
#[derive(Debug, Error)]
pub enum RowError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors during a layout pass.
///
/// Bad geometry never produces an error; only an unusable width bound does.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("{operation} requires a bounded max width")]
    UnboundedWidth { operation: &'static str },

    #[error("{operation} cannot place slots in a row {max_width}px wide (limit {limit}px)")]
    WidthOutOfRange {
        operation: &'static str,
        max_width: u32,
        limit: u32,
    },
}

/// Errors in a row description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid constraints: {reason}")]
    InvalidConstraints { reason: String },

    #[error("Invalid text style: {reason}")]
    InvalidTextStyle { reason: String },

    #[error("{kind} row is missing its {slot} slot")]
    MissingSlot { kind: &'static str, slot: Slot },
}
