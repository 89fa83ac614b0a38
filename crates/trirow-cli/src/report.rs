//! Running a row description and describing the result.

use serde::Serialize;
use trirow_core::{ConfigError, LayoutResult, RowError, Slot};
use trirow_layout::{
    layout_two_slot_row, measure_three_slot_row, place_three_slot_row, TextMetrics, TwoSlotLayout,
};

use crate::config::{RowFile, RowKind};

/// Labels as they render after truncation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Labels {
    pub left: TextMetrics,
    pub right: TextMetrics,
}

/// Everything printed for one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Report {
    ThreeSlot {
        side_max_width: u32,
        layout: LayoutResult,
        labels: Labels,
        overlap: bool,
    },
    TwoSlot {
        layout: TwoSlotLayout,
        labels: Labels,
    },
}

/// Lay out a row description.
pub fn run(file: &RowFile) -> Result<Report, RowError> {
    let outer = file.row.constraints()?;
    tracing::info!(kind = file.row.kind.name(), ?outer, "laying out row");

    match file.row.kind {
        RowKind::ThreeSlot => {
            let center = file.center.ok_or(ConfigError::MissingSlot {
                kind: RowKind::ThreeSlot.name(),
                slot: Slot::Center,
            })?;
            let measurement =
                measure_three_slot_row(outer, &file.left, &center, &file.right, &file.config)?;
            let layout = place_three_slot_row(&measurement);

            let side = measurement.loose.with_max_width(measurement.side_max_width);
            let labels = Labels {
                left: file.left.label_metrics(side),
                right: file.right.label_metrics(side),
            };
            let overlap = layout.has_overlap();
            if overlap {
                tracing::warn!("side slot overlaps the center slot");
            }

            Ok(Report::ThreeSlot {
                side_max_width: measurement.side_max_width,
                layout,
                labels,
                overlap,
            })
        }
        RowKind::TwoSlot => {
            let spacing = file.config.spacing;
            let layout = layout_two_slot_row(outer, &file.left, &file.right, spacing)?;

            let loose = outer.relax();
            let labels = Labels {
                left: file.left.label_metrics(loose.with_tight_width(layout.left_size.width)),
                right: file
                    .right
                    .label_metrics(loose.with_max_width(outer.max_width.saturating_sub(spacing))),
            };

            Ok(Report::TwoSlot { layout, labels })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse;
    use trirow_core::LayoutError;

    #[test]
    fn test_three_slot_report() {
        let file = parse(include_str!("../rows/phone.toml")).unwrap();
        let Report::ThreeSlot {
            side_max_width,
            layout,
            labels,
            overlap,
        } = run(&file).unwrap()
        else {
            panic!("expected a three-slot report");
        };

        assert_eq!(side_max_width, 160);
        assert_eq!(layout.placements.center.x, 168);
        assert!(labels.left.truncated);
        assert!(labels.left.rendered.ends_with('…'));
        assert_eq!(labels.right.rendered, "Action for su");
        assert!(!overlap);
    }

    #[test]
    fn test_two_slot_report() {
        let file = parse(include_str!("../rows/two_buttons.toml")).unwrap();
        let Report::TwoSlot { layout, labels } = run(&file).unwrap() else {
            panic!("expected a two-slot report");
        };

        // "Action for super" is 16 cells: 128px + 48px padding
        assert_eq!(layout.right_size.width, 176);
        assert_eq!(layout.left_size.width, 176);
        assert!(labels.left.truncated);
        assert!(!labels.right.truncated);
    }

    #[test]
    fn test_unbounded_row_fails() {
        let file = parse(
            r#"
            [row]
            [left]
            [center]
            [right]
            "#,
        )
        .unwrap();
        let err = run(&file).unwrap_err();
        assert!(matches!(err, RowError::Layout(LayoutError::UnboundedWidth { .. })));
    }

    #[test]
    fn test_width_override_out_of_range_fails() {
        let mut file = parse(include_str!("../rows/phone.toml")).unwrap();
        file.row.max_width = Some(u32::MAX - 1);
        file.validate().unwrap();

        let err = run(&file).unwrap_err();
        assert!(matches!(err, RowError::Layout(LayoutError::WidthOutOfRange { .. })));
    }

    #[test]
    fn test_report_json_shape() {
        let file = parse(include_str!("../rows/phone.toml")).unwrap();
        let json = serde_json::to_value(run(&file).unwrap()).unwrap();
        assert_eq!(json["kind"], "three-slot");
        assert_eq!(json["layout"]["total_width"], 360);
        assert_eq!(json["labels"]["right"]["truncated"], false);
    }
}
