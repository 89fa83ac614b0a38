//! Geometry value types for row layout.
//!
//! All lengths are whole device-independent pixels. Sizes are unsigned;
//! placements are signed because a center slot wider than its row is
//! centered by overflowing both edges equally.

use std::fmt;

use glam::IVec2;

use crate::errors::ConfigError;

/// Min/max bounds a slot's content is measured within.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxConstraints {
    pub min_width: u32,
    pub max_width: u32,
    pub min_height: u32,
    pub max_height: u32,
}

impl BoxConstraints {
    /// Sentinel for an axis with no upper bound.
    pub const INFINITY: u32 = u32::MAX;

    /// Widest bounded row that can be laid out. Every edge of a row this
    /// wide, and every offset within it, fits in an `i32` placement.
    pub const MAX_ROW_WIDTH: u32 = i32::MAX as u32;

    /// Create constraints. Callers must keep `min <= max` on both axes.
    pub fn new(min_width: u32, max_width: u32, min_height: u32, max_height: u32) -> Self {
        debug_assert!(min_width <= max_width, "min_width exceeds max_width");
        debug_assert!(min_height <= max_height, "min_height exceeds max_height");
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Create constraints, rejecting inverted bounds.
    pub fn try_new(
        min_width: u32,
        max_width: u32,
        min_height: u32,
        max_height: u32,
    ) -> Result<Self, ConfigError> {
        if min_width > max_width {
            return Err(ConfigError::InvalidConstraints {
                reason: format!("min_width {min_width} exceeds max_width {max_width}"),
            });
        }
        if min_height > max_height {
            return Err(ConfigError::InvalidConstraints {
                reason: format!("min_height {min_height} exceeds max_height {max_height}"),
            });
        }
        Ok(Self::new(min_width, max_width, min_height, max_height))
    }

    /// Constraints that allow anything from zero up to the given size.
    pub fn loose(max_width: u32, max_height: u32) -> Self {
        Self::new(0, max_width, 0, max_height)
    }

    /// Whether the width axis has a finite upper bound.
    pub fn has_bounded_width(&self) -> bool {
        self.max_width != Self::INFINITY
    }

    /// Whether the width bound is small enough to place slots against.
    pub fn has_placeable_width(&self) -> bool {
        self.max_width <= Self::MAX_ROW_WIDTH
    }

    /// Drop both minimums to zero, keeping the maximums.
    pub fn relax(&self) -> Self {
        Self {
            min_width: 0,
            min_height: 0,
            ..*self
        }
    }

    /// Replace the maximum width, pulling the minimum down if needed.
    pub fn with_max_width(&self, max_width: u32) -> Self {
        Self {
            min_width: self.min_width.min(max_width),
            max_width,
            ..*self
        }
    }

    /// Replace the maximum height, pulling the minimum down if needed.
    pub fn with_max_height(&self, max_height: u32) -> Self {
        Self {
            min_height: self.min_height.min(max_height),
            max_height,
            ..*self
        }
    }

    /// Fix the width to exactly `width`.
    pub fn with_tight_width(&self, width: u32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            ..*self
        }
    }

    /// Clamp a size into these constraints.
    pub fn constrain(&self, size: Measured) -> Measured {
        Measured {
            width: size.width.clamp(self.min_width, self.max_width),
            height: size.height.clamp(self.min_height, self.max_height),
        }
    }
}

/// The size a slot's content occupies after measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measured {
    pub width: u32,
    pub height: u32,
}

impl Measured {
    pub const ZERO: Measured = Measured { width: 0, height: 0 };

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Top-left offset of a slot relative to the row's origin.
///
/// Row widths are capped at [`BoxConstraints::MAX_ROW_WIDTH`], so an offset
/// measured from either edge of a row is always representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub x: i32,
    pub y: i32,
}

impl Placement {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// One of the three logical positions in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Slot {
    Left,
    Center,
    Right,
}

impl Slot {
    /// Slots in the order they are placed (and therefore drawn).
    pub const PLACEMENT_ORDER: [Slot; 3] = [Slot::Center, Slot::Left, Slot::Right];

    pub fn name(self) -> &'static str {
        match self {
            Slot::Left => "left",
            Slot::Center => "center",
            Slot::Right => "right",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One value per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slots<T> {
    pub left: T,
    pub center: T,
    pub right: T,
}

impl<T> Slots<T> {
    pub fn new(left: T, center: T, right: T) -> Self {
        Self { left, center, right }
    }

    pub fn get(&self, slot: Slot) -> &T {
        match slot {
            Slot::Left => &self.left,
            Slot::Center => &self.center,
            Slot::Right => &self.right,
        }
    }
}

/// Axis-aligned rectangle occupied by a placed slot.
///
/// Half-open on both axes: the right and bottom edges are outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl SlotRect {
    pub fn new(placement: Placement, size: Measured) -> Self {
        Self {
            x: placement.x,
            y: placement.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Right edge (x + width), exclusive.
    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Bottom edge (y + height), exclusive.
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a point is inside the rectangle.
    pub fn contains(&self, point: IVec2) -> bool {
        let (px, py) = (point.x as i64, point.y as i64);
        px >= self.x as i64 && px < self.right() && py >= self.y as i64 && py < self.bottom()
    }

    /// Check whether two rectangles share any area.
    pub fn overlaps(&self, other: &SlotRect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        (self.x as i64) < other.right()
            && (other.x as i64) < self.right()
            && (self.y as i64) < other.bottom()
            && (other.y as i64) < self.bottom()
    }
}

/// Output of one three-slot layout pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutResult {
    /// Always the incoming `max_width`.
    pub total_width: u32,
    pub total_height: u32,
    pub placements: Slots<Placement>,
    /// Measured size of each slot, kept so hosts can build hit-test geometry.
    pub sizes: Slots<Measured>,
}

impl LayoutResult {
    pub fn rect(&self, slot: Slot) -> SlotRect {
        SlotRect::new(*self.placements.get(slot), *self.sizes.get(slot))
    }

    /// Find the topmost slot under a point.
    ///
    /// Later-placed slots draw over earlier ones, so they are checked first.
    pub fn slot_at(&self, point: IVec2) -> Option<Slot> {
        Slot::PLACEMENT_ORDER
            .iter()
            .rev()
            .copied()
            .find(|&slot| self.rect(slot).contains(point))
    }

    /// Whether either side slot visually collides with the center slot.
    pub fn has_overlap(&self) -> bool {
        let center = self.rect(Slot::Center);
        self.rect(Slot::Left).overlaps(&center) || self.rect(Slot::Right).overlaps(&center)
    }
}
