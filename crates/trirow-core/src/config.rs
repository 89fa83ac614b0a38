//! Row configuration.

/// Geometry inputs for a three-slot row.
///
/// Passed explicitly to every layout pass; nothing is read from ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RowConfig {
    /// Gap kept between each side slot and the center slot
    pub spacing: u32,
    /// Upper bound on the center slot's height
    pub center_max_height: u32,
}

impl Default for RowConfig {
    fn default() -> Self {
        Self {
            spacing: 8,
            center_max_height: 32,
        }
    }
}

impl RowConfig {
    pub fn new(spacing: u32, center_max_height: u32) -> Self {
        Self {
            spacing,
            center_max_height,
        }
    }

    /// Set the spacing.
    pub fn with_spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the center height cap.
    pub fn with_center_max_height(mut self, center_max_height: u32) -> Self {
        self.center_max_height = center_max_height;
        self
    }
}
