//! Row layout for the trirow engine.
//!
//! This crate arranges a leading control, a centered glyph and a trailing
//! control inside a bounded horizontal strip, truncating labels that do not
//! fit rather than wrapping or overflowing.
//!
//! # Architecture
//!
//! 1. **Measurement**: every slot content implements [`Measure`]
//! 2. **Three-slot layout**: symmetric side budgets around an exactly centered glyph
//! 3. **Two-slot layout**: a filling leading control beside a wrapping trailing one
//! 4. **Text measurement**: single-line labels with ellipsis truncation
//!
//! # Example
//!
//! ```
//! use trirow_core::{BoxConstraints, RowConfig};
//! use trirow_layout::{layout_three_slot_row, Button, Icon};
//!
//! let outer = BoxConstraints::new(360, 360, 0, 100);
//! let result = layout_three_slot_row(
//!     outer,
//!     &Button::new("Very very long title that should truncate"),
//!     &Icon::default(),
//!     &Button::new("Action"),
//!     &RowConfig::default(),
//! )?;
//!
//! assert_eq!(result.total_width, 360);
//! assert_eq!(result.placements.center.x, 168);
//! # Ok::<(), trirow_core::LayoutError>(())
//! ```

mod measure;
mod slot;
mod text;
mod three_slot;
mod two_slot;

pub use measure::{FixedSize, Measure};
pub use slot::{Button, ButtonPadding, Icon, SlotContent};
pub use text::{display_width, measure_text, truncate_text, TextMetrics, TextStyle, ELLIPSIS};
pub use three_slot::{
    layout_three_slot_row, measure_three_slot_row, place_three_slot_row, side_budget,
    RowMeasurement,
};
pub use two_slot::{layout_two_slot_row, TwoSlotLayout};
