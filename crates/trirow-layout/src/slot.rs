//! The closed set of contents a row slot can hold.
//!
//! A row's center holds an [`Icon`]; its sides hold [`Button`]s. Both are
//! rebuilt for every layout pass and carry no identity between passes.

use trirow_core::{BoxConstraints, Measured};

use crate::measure::Measure;
use crate::text::{measure_text, TextMetrics, TextStyle};

/// A glyph with an intrinsic size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Icon {
    pub width: u32,
    pub height: u32,
}

impl Default for Icon {
    fn default() -> Self {
        Self {
            width: 24,
            height: 24,
        }
    }
}

impl Icon {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Measure for Icon {
    fn measure(&self, constraints: BoxConstraints) -> Measured {
        constraints.constrain(Measured::new(self.width, self.height))
    }
}

/// Padding between a button's edge and its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ButtonPadding {
    pub horizontal: u32,
    pub vertical: u32,
}

impl Default for ButtonPadding {
    fn default() -> Self {
        Self {
            horizontal: 24,
            vertical: 8,
        }
    }
}

/// A clickable control with a single-line label.
///
/// The label ellipsizes to whatever width the constraints leave after
/// padding. The minimum size is a preference and yields to constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Button {
    pub label: String,
    pub style: TextStyle,
    pub padding: ButtonPadding,
    pub min_width: u32,
    pub min_height: u32,
}

impl Default for Button {
    fn default() -> Self {
        Self {
            label: String::new(),
            style: TextStyle::default(),
            padding: ButtonPadding::default(),
            min_width: 58,
            min_height: 40,
        }
    }
}

impl Button {
    /// Create a button with default styling.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    fn horizontal_padding(&self) -> u32 {
        self.padding.horizontal.saturating_mul(2)
    }

    fn vertical_padding(&self) -> u32 {
        self.padding.vertical.saturating_mul(2)
    }

    /// Measure the label as it renders under `constraints`.
    pub fn label_metrics(&self, constraints: BoxConstraints) -> TextMetrics {
        let max_text_width = constraints
            .has_bounded_width()
            .then(|| constraints.max_width.saturating_sub(self.horizontal_padding()));
        measure_text(&self.label, &self.style, max_text_width)
    }
}

impl Measure for Button {
    fn measure(&self, constraints: BoxConstraints) -> Measured {
        let text = self.label_metrics(constraints);
        let width = text
            .width
            .saturating_add(self.horizontal_padding())
            .max(self.min_width);
        let height = text
            .height
            .saturating_add(self.vertical_padding())
            .max(self.min_height);
        constraints.constrain(Measured::new(width, height))
    }
}

/// Content for one slot of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum SlotContent {
    Icon(Icon),
    Button(Button),
}

impl SlotContent {
    /// The label this content renders under `constraints`, if it has one.
    pub fn label_metrics(&self, constraints: BoxConstraints) -> Option<TextMetrics> {
        match self {
            SlotContent::Icon(_) => None,
            SlotContent::Button(button) => Some(button.label_metrics(constraints)),
        }
    }
}

impl Measure for SlotContent {
    fn measure(&self, constraints: BoxConstraints) -> Measured {
        match self {
            SlotContent::Icon(icon) => icon.measure(constraints),
            SlotContent::Button(button) => button.measure(constraints),
        }
    }
}

impl From<Icon> for SlotContent {
    fn from(icon: Icon) -> Self {
        SlotContent::Icon(icon)
    }
}

impl From<Button> for SlotContent {
    fn from(button: Button) -> Self {
        SlotContent::Button(button)
    }
}
