//! Row description files.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use trirow_core::{BoxConstraints, ConfigError, RowConfig, Slot};
use trirow_layout::{Button, Icon};

/// Which layout a row description asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowKind {
    #[default]
    ThreeSlot,
    TwoSlot,
}

impl RowKind {
    pub fn name(self) -> &'static str {
        match self {
            RowKind::ThreeSlot => "three-slot",
            RowKind::TwoSlot => "two-slot",
        }
    }
}

/// The `[row]` table: kind and outer constraints.
///
/// A missing `max_width` or `max_height` leaves that axis unbounded.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RowSpec {
    pub kind: RowKind,
    pub min_width: u32,
    pub max_width: Option<u32>,
    pub min_height: u32,
    pub max_height: Option<u32>,
}

impl RowSpec {
    pub fn constraints(&self) -> Result<BoxConstraints, ConfigError> {
        BoxConstraints::try_new(
            self.min_width,
            self.max_width.unwrap_or(BoxConstraints::INFINITY),
            self.min_height,
            self.max_height.unwrap_or(BoxConstraints::INFINITY),
        )
    }
}

/// A complete row description.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RowFile {
    #[serde(default)]
    pub row: RowSpec,
    #[serde(default)]
    pub config: RowConfig,
    pub left: Button,
    pub center: Option<Icon>,
    pub right: Button,
}

impl RowFile {
    /// Check the parts serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.row.constraints()?;
        self.left.style.validate()?;
        self.right.style.validate()?;
        if self.row.kind == RowKind::ThreeSlot && self.center.is_none() {
            return Err(ConfigError::MissingSlot {
                kind: RowKind::ThreeSlot.name(),
                slot: Slot::Center,
            });
        }
        if self.row.kind == RowKind::TwoSlot && self.center.is_some() {
            tracing::warn!("two-slot row ignores its [center] table");
        }
        Ok(())
    }
}

/// Parse and validate a row description.
pub fn parse(raw: &str) -> Result<RowFile> {
    let file: RowFile = toml::from_str(raw).context("TOML parse error")?;
    file.validate()?;
    Ok(file)
}

/// Load a row description from a TOML file.
pub fn load(path: impl AsRef<Path>) -> Result<RowFile> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read '{}'", path.display()))?;
    parse(&raw).with_context(|| format!("invalid row description '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHONE: &str = include_str!("../rows/phone.toml");
    const TWO_BUTTONS: &str = include_str!("../rows/two_buttons.toml");

    #[test]
    fn test_parse_three_slot() {
        let file = parse(PHONE).unwrap();
        assert_eq!(file.row.kind, RowKind::ThreeSlot);
        assert_eq!(file.row.max_width, Some(360));
        assert_eq!(file.config, RowConfig::new(8, 32));
        assert_eq!(file.center, Some(Icon::new(24, 24)));
        assert_eq!(file.right.label, "Action for su");
        assert_eq!(file.right.min_height, 40);
    }

    #[test]
    fn test_parse_two_slot() {
        let file = parse(TWO_BUTTONS).unwrap();
        assert_eq!(file.row.kind, RowKind::TwoSlot);
        assert!(file.center.is_none());
        assert_eq!(file.row.max_height, None);
    }

    #[test]
    fn test_config_defaults() {
        let file = parse(
            r#"
            [row]
            max_width = 200

            [left]
            label = "a"

            [center]

            [right]
            label = "b"
            "#,
        )
        .unwrap();
        assert_eq!(file.config, RowConfig::default());
        assert_eq!(file.center, Some(Icon::default()));
    }

    #[test]
    fn test_missing_center_rejected() {
        let err = parse(
            r#"
            [row]
            max_width = 200
            [left]
            label = "a"
            [right]
            label = "b"
            "#,
        )
        .unwrap_err();
        let config_err = err.downcast_ref::<ConfigError>().unwrap();
        assert_eq!(
            config_err,
            &ConfigError::MissingSlot {
                kind: "three-slot",
                slot: Slot::Center
            }
        );
    }

    #[test]
    fn test_inverted_constraints_rejected() {
        let err = parse(
            r#"
            [row]
            min_width = 300
            max_width = 200
            [left]
            [center]
            [right]
            "#,
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::InvalidConstraints { .. })
        ));
    }

    #[test]
    fn test_zero_advance_rejected() {
        let err = parse(
            r#"
            [row]
            max_width = 200
            [left]
            label = "a"
            style = { advance = 0, line_height = 20 }
            [center]
            [right]
            "#,
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::InvalidTextStyle { .. })
        ));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(parse("[row]\nmax_widht = 10\n[left]\n[right]\n").is_err());
    }
}
