//! Three-slot row layout.
//!
//! Lays out a leading control, a fixed-size center glyph and a trailing
//! control inside a bounded horizontal strip:
//!
//! 1. **Measure center** under the relaxed outer constraints, height-capped.
//! 2. **Budget sides**: whatever width the center leaves is halved, less
//!    spacing, and the same budget goes to both sides so the center stays
//!    centered however long either label is.
//! 3. **Measure sides** under that budget. Content is trusted to truncate
//!    itself to fit.
//! 4. **Place** all three, each vertically centered in the resolved height.
//!
//! The measure and place phases are separate functions so each can be
//! exercised on its own; [`layout_three_slot_row`] runs both.

use trirow_core::{
    BoxConstraints, LayoutError, LayoutResult, Measured, Placement, RowConfig, Slots,
};

use crate::measure::Measure;

/// Everything the measure phase learns about a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowMeasurement {
    /// Constraints the row was measured against
    pub outer: BoxConstraints,
    /// Outer constraints with both minimums dropped
    pub loose: BoxConstraints,
    /// Half of the width the center leaves free
    pub half_available: u32,
    /// Width budget given to each side slot
    pub side_max_width: u32,
    /// Measured size of each slot
    pub sizes: Slots<Measured>,
    /// Resolved row height
    pub height: u32,
}

/// Compute `(half_available, side_max_width)` for a row.
///
/// Both are floored at zero, so a center wider than the row, or spacing
/// wider than the free half, leaves the sides with nothing.
pub fn side_budget(max_width: u32, center_width: u32, spacing: u32) -> (u32, u32) {
    let half_available = max_width.saturating_sub(center_width) / 2;
    let side_max_width = half_available.saturating_sub(spacing);
    (half_available, side_max_width)
}

/// Run the measure phase of a three-slot row.
pub fn measure_three_slot_row<L, C, R>(
    outer: BoxConstraints,
    left: &L,
    center: &C,
    right: &R,
    config: &RowConfig,
) -> Result<RowMeasurement, LayoutError>
where
    L: Measure + ?Sized,
    C: Measure + ?Sized,
    R: Measure + ?Sized,
{
    require_placeable_width(outer, "three-slot row layout")?;

    let loose = outer.relax();

    let center_constraints = loose.with_max_height(loose.max_height.min(config.center_max_height));
    let center_size = center.measure(center_constraints);
    tracing::trace!(?center_constraints, ?center_size, "measured center slot");

    let (half_available, side_max_width) =
        side_budget(outer.max_width, center_size.width, config.spacing);
    tracing::debug!(
        max_width = outer.max_width,
        center_width = center_size.width,
        spacing = config.spacing,
        half_available,
        side_max_width,
        "computed side budget"
    );

    let side_constraints = loose.with_max_width(side_max_width);
    let left_size = left.measure(side_constraints);
    tracing::trace!(?side_constraints, ?left_size, "measured left slot");
    let right_size = right.measure(side_constraints);
    tracing::trace!(?side_constraints, ?right_size, "measured right slot");

    if left_size.width > side_max_width || right_size.width > side_max_width {
        tracing::warn!(
            side_max_width,
            left_width = left_size.width,
            right_width = right_size.width,
            "side slot measured wider than its budget"
        );
    }

    let height = left_size
        .height
        .max(center_size.height)
        .max(right_size.height)
        .max(outer.min_height);
    tracing::debug!(height, "resolved row height");

    Ok(RowMeasurement {
        outer,
        loose,
        half_available,
        side_max_width,
        sizes: Slots::new(left_size, center_size, right_size),
        height,
    })
}

/// Run the place phase of a three-slot row.
///
/// Positions are computed against the constraints the row was measured
/// with, so the side budgets and the placements always agree.
pub fn place_three_slot_row(measurement: &RowMeasurement) -> LayoutResult {
    let max_width = measurement.outer.max_width as i64;
    let height = measurement.height;
    let sizes = measurement.sizes;

    let center = Placement::new(
        clamp_i32((max_width - sizes.center.width as i64).div_euclid(2)),
        centered_offset(height, sizes.center.height),
    );
    let left = Placement::new(0, centered_offset(height, sizes.left.height));
    let right = Placement::new(
        clamp_i32(max_width - sizes.right.width as i64),
        centered_offset(height, sizes.right.height),
    );

    LayoutResult {
        total_width: measurement.outer.max_width,
        total_height: height,
        placements: Slots::new(left, center, right),
        sizes,
    }
}

/// Lay out a three-slot row.
///
/// Fails only when `outer` has no width bound or one wider than
/// [`BoxConstraints::MAX_ROW_WIDTH`]; any other geometry, however
/// degenerate, produces a result.
pub fn layout_three_slot_row<L, C, R>(
    outer: BoxConstraints,
    left: &L,
    center: &C,
    right: &R,
    config: &RowConfig,
) -> Result<LayoutResult, LayoutError>
where
    L: Measure + ?Sized,
    C: Measure + ?Sized,
    R: Measure + ?Sized,
{
    let measurement = measure_three_slot_row(outer, left, center, right, config)?;
    Ok(place_three_slot_row(&measurement))
}

/// Reject width bounds a row cannot be placed against.
pub(crate) fn require_placeable_width(
    outer: BoxConstraints,
    operation: &'static str,
) -> Result<(), LayoutError> {
    if !outer.has_bounded_width() {
        return Err(LayoutError::UnboundedWidth { operation });
    }
    if !outer.has_placeable_width() {
        return Err(LayoutError::WidthOutOfRange {
            operation,
            max_width: outer.max_width,
            limit: BoxConstraints::MAX_ROW_WIDTH,
        });
    }
    Ok(())
}

/// Top offset that centers `child` within `container`, floored, never negative.
pub(crate) fn centered_offset(container: u32, child: u32) -> i32 {
    clamp_i32((container.saturating_sub(child) / 2) as i64)
}

pub(crate) fn clamp_i32(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
