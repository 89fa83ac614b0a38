//! Invariants that hold for every three-slot and two-slot layout.

use std::cell::Cell;

use proptest::prelude::*;
use trirow_core::{BoxConstraints, Measured, RowConfig, Slot};
use trirow_layout::{
    layout_three_slot_row, layout_two_slot_row, measure_text, measure_three_slot_row,
    place_three_slot_row, Button, Icon, TextStyle,
};

fn label() -> impl Strategy<Value = String> {
    "[a-zA-Z ]{0,80}"
}

proptest! {
    #[test]
    fn center_is_always_centered(
        max_width in 0u32..2000,
        center_w in 0u32..3000,
        center_h in 0u32..64,
        spacing in 0u32..64,
        left in label(),
        right in label(),
    ) {
        let outer = BoxConstraints::loose(max_width, 200);
        let center = move |_: BoxConstraints| Measured::new(center_w, center_h);
        let config = RowConfig::new(spacing, 32);

        let (left, right) = (Button::new(left), Button::new(right));

        let result = layout_three_slot_row(outer, &left, &center, &right, &config).unwrap();

        let expected = (max_width as i64 - center_w as i64).div_euclid(2);
        prop_assert_eq!(result.placements.center.x as i64, expected);
        prop_assert_eq!(result.total_width, max_width);
    }

    #[test]
    fn sides_share_one_budget(
        max_width in 0u32..2000,
        icon_w in 0u32..100,
        spacing in 0u32..64,
        left_w in 0u32..2000,
        right_w in 0u32..2000,
    ) {
        let left_seen = Cell::new(None);
        let right_seen = Cell::new(None);
        let left = |c: BoxConstraints| {
            left_seen.set(Some(c));
            Measured::new(left_w.min(c.max_width), 40)
        };
        let right = |c: BoxConstraints| {
            right_seen.set(Some(c));
            Measured::new(right_w.min(c.max_width), 40)
        };
        let outer = BoxConstraints::loose(max_width, 200);
        let config = RowConfig::new(spacing, 32);

        let icon = Icon::new(icon_w, 24);

        let m = measure_three_slot_row(outer, &left, &icon, &right, &config).unwrap();

        let left_c = left_seen.get().unwrap();
        let right_c = right_seen.get().unwrap();
        prop_assert_eq!(left_c.max_width, right_c.max_width);
        prop_assert_eq!(left_c.max_width, m.side_max_width);
        prop_assert!(m.side_max_width <= m.half_available);
        prop_assert!(m.half_available <= max_width / 2);
    }

    #[test]
    fn buttons_stay_within_budget(
        max_width in 0u32..1000,
        spacing in 0u32..32,
        left in label(),
        right in label(),
    ) {
        let outer = BoxConstraints::loose(max_width, 200);
        let config = RowConfig::new(spacing, 32);

        let (left, right) = (Button::new(left), Button::new(right));

        let m = measure_three_slot_row(outer, &left, &Icon::default(), &right, &config).unwrap();

        prop_assert!(m.sizes.left.width <= m.side_max_width);
        prop_assert!(m.sizes.right.width <= m.side_max_width);
    }

    #[test]
    fn height_is_tallest_slot_or_minimum(
        heights in prop::array::uniform3(0u32..100),
        min_height in 0u32..120,
    ) {
        let [lh, ch, rh] = heights;
        let outer = BoxConstraints::new(0, 400, min_height, 200);
        let config = RowConfig::new(8, 200);

        let result = layout_three_slot_row(
            outer,
            &move |_: BoxConstraints| Measured::new(10, lh),
            &move |_: BoxConstraints| Measured::new(10, ch),
            &move |_: BoxConstraints| Measured::new(10, rh),
            &config,
        )
        .unwrap();

        prop_assert_eq!(result.total_height, lh.max(ch).max(rh).max(min_height));
        prop_assert!(result.placements.left.y >= 0);
        prop_assert!(result.placements.center.y >= 0);
        prop_assert!(result.placements.right.y >= 0);
    }

    #[test]
    fn layout_is_idempotent(
        max_width in 0u32..1000,
        spacing in 0u32..32,
        left in label(),
        right in label(),
    ) {
        let outer = BoxConstraints::loose(max_width, 200);
        let config = RowConfig::new(spacing, 32);
        let left = Button::new(left);
        let right = Button::new(right);

        let icon = Icon::default();

        let first = layout_three_slot_row(outer, &left, &icon, &right, &config).unwrap();
        let second = layout_three_slot_row(outer, &left, &icon, &right, &config).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn placing_a_measurement_matches_full_layout(
        min_width in 0u32..1000,
        extra_width in 0u32..1000,
        min_height in 0u32..80,
        spacing in 0u32..32,
        left in label(),
        right in label(),
    ) {
        let max_width = min_width + extra_width;
        let outer = BoxConstraints::new(min_width, max_width, min_height, 200);
        let config = RowConfig::new(spacing, 32);
        let (left, right) = (Button::new(left), Button::new(right));
        let icon = Icon::default();

        let m = measure_three_slot_row(outer, &left, &icon, &right, &config).unwrap();
        let placed = place_three_slot_row(&m);

        prop_assert_eq!(placed.total_width, m.outer.max_width);
        prop_assert_eq!(
            placed.rect(Slot::Right).right(),
            i64::from(placed.total_width)
        );
        let full = layout_three_slot_row(outer, &left, &icon, &right, &config).unwrap();
        prop_assert_eq!(placed, full);
    }

    #[test]
    fn two_slot_fills_row(
        max_width in 0u32..1000,
        spacing in 0u32..32,
        left in label(),
        right in label(),
    ) {
        let outer = BoxConstraints::loose(max_width, 200);
        let (left, right) = (Button::new(left), Button::new(right));
        let layout = layout_two_slot_row(outer, &left, &right, spacing).unwrap();

        prop_assert_eq!(layout.total_width, max_width);
        prop_assert_eq!(layout.left.x, 0);
        prop_assert!(layout.right_size.width <= max_width.saturating_sub(spacing));
    }

    #[test]
    fn truncated_text_fits(text in label(), max_width in 0u32..400) {
        let style = TextStyle::default();
        let metrics = measure_text(&text, &style, Some(max_width));
        prop_assert!(metrics.width <= max_width);
        if metrics.truncated {
            prop_assert!(metrics.rendered.is_empty() || metrics.rendered.ends_with('…'));
        } else {
            prop_assert_eq!(&metrics.rendered, &text);
        }
    }
}
