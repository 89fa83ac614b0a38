//! Two-slot row layout.
//!
//! The trailing control wraps its content; the leading control takes every
//! pixel that is left and truncates its label to fit.

use glam::IVec2;
use trirow_core::{BoxConstraints, LayoutError, Measured, Placement, Slot, SlotRect};

use crate::measure::Measure;
use crate::three_slot::{centered_offset, clamp_i32, require_placeable_width};

/// Output of one two-slot layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TwoSlotLayout {
    /// Always the incoming `max_width`.
    pub total_width: u32,
    pub total_height: u32,
    pub left: Placement,
    pub right: Placement,
    pub left_size: Measured,
    pub right_size: Measured,
}

impl TwoSlotLayout {
    /// Rectangle for a slot. A two-slot row has no center.
    pub fn rect(&self, slot: Slot) -> Option<SlotRect> {
        match slot {
            Slot::Left => Some(SlotRect::new(self.left, self.left_size)),
            Slot::Right => Some(SlotRect::new(self.right, self.right_size)),
            Slot::Center => None,
        }
    }

    /// Find the topmost slot under a point.
    pub fn slot_at(&self, point: IVec2) -> Option<Slot> {
        [Slot::Right, Slot::Left]
            .into_iter()
            .find(|&slot| self.rect(slot).is_some_and(|r| r.contains(point)))
    }
}

/// Lay out a two-slot row.
///
/// `right` is measured first with the full width less `spacing`; `left` is
/// then measured with a tight width equal to whatever remains.
pub fn layout_two_slot_row<L, R>(
    outer: BoxConstraints,
    left: &L,
    right: &R,
    spacing: u32,
) -> Result<TwoSlotLayout, LayoutError>
where
    L: Measure + ?Sized,
    R: Measure + ?Sized,
{
    require_placeable_width(outer, "two-slot row layout")?;

    let loose = outer.relax();

    let right_constraints = loose.with_max_width(outer.max_width.saturating_sub(spacing));
    let right_size = right.measure(right_constraints);
    tracing::trace!(?right_constraints, ?right_size, "measured right slot");

    let remaining = outer
        .max_width
        .saturating_sub(right_size.width)
        .saturating_sub(spacing);
    let left_constraints = loose.with_tight_width(remaining);
    let left_size = left.measure(left_constraints);
    tracing::trace!(?left_constraints, ?left_size, "measured left slot");

    let height = left_size.height.max(right_size.height).max(outer.min_height);
    tracing::debug!(remaining, height, "resolved two-slot row");

    let right_x = left_size.width as i64 + spacing as i64;

    Ok(TwoSlotLayout {
        total_width: outer.max_width,
        total_height: height,
        left: Placement::new(0, centered_offset(height, left_size.height)),
        right: Placement::new(clamp_i32(right_x), centered_offset(height, right_size.height)),
        left_size,
        right_size,
    })
}
