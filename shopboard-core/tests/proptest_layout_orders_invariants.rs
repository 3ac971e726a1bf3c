//! Property tests for viewport classification, sidebar recomputes, order
//! display lists and metric frames.

use proptest::prelude::*;
use shopboard_core::metric::MetricAnimation;
use shopboard_core::orders::{
    FilterState, OrderRecord, OrderStatus, SortConfig, SortKey, apply,
    paginate,
};
use shopboard_core::{
    Breakpoints, LayoutIntent, LayoutState, SidebarLayout, Viewport,
};

fn intent_strategy() -> impl Strategy<Value = LayoutIntent> {
    prop_oneof![
        Just(LayoutIntent::Toggle),
        Just(LayoutIntent::Open),
        Just(LayoutIntent::Close),
        Just(LayoutIntent::Escape),
        any::<bool>().prop_map(|inside| LayoutIntent::PointerDown { inside }),
    ]
}

fn status_strategy() -> impl Strategy<Value = OrderStatus> {
    prop::sample::select(OrderStatus::ALL.to_vec())
}

fn record(index: usize, name: String, status: OrderStatus) -> OrderRecord {
    OrderRecord {
        id: format!("#CM98{index:02}"),
        name,
        project: "Landing Page".into(),
        address: "Nest Lane Olivette".into(),
        date: "Just now".into(),
        status,
        avatar: String::new(),
        alt: String::new(),
        priority: None,
        amount: None,
    }
}

fn records_strategy() -> impl Strategy<Value = Vec<OrderRecord>> {
    prop::collection::vec(("[a-d]{1,3}", status_strategy()), 0..40).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(index, (name, status))| record(index, name, status))
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn classification_sets_exactly_one_class(width in 0u32..4000) {
        let bp = Breakpoints::default();
        let viewport = Viewport::from_size(width, 800, &bp);
        let flags = [
            viewport.is_very_small,
            viewport.is_tablet,
            viewport.is_desktop,
            viewport.is_mobile && !viewport.is_very_small,
        ];
        prop_assert_eq!(flags.iter().filter(|flag| **flag).count(), 1);
        prop_assert_eq!(viewport.class(), bp.classify(width));
        prop_assert_eq!(Viewport::from_size(width, 800, &bp), viewport);
    }

    #[test]
    fn recompute_restores_class_defaults_after_any_intents(
        first in 0u32..3000,
        second in 0u32..3000,
        intents in prop::collection::vec(intent_strategy(), 0..20),
    ) {
        let bp = Breakpoints::default();
        let mut layout =
            SidebarLayout::new(&Viewport::from_size(first, 800, &bp));
        for intent in intents {
            layout.apply(intent);
        }

        let next = Viewport::from_size(second, 800, &bp);
        layout.recompute(&next);
        prop_assert_eq!(layout.state(), LayoutState::for_class(next.class()));
        prop_assert!(!layout.is_peek_expanded());
    }

    #[test]
    fn pages_concatenate_to_display_list(
        items in prop::collection::vec(any::<u16>(), 0..120),
        page_size in 1usize..30,
    ) {
        let pages = items.len().div_ceil(page_size);
        let mut joined = Vec::new();
        for page in 1..=pages {
            let slice = paginate(&items, page, page_size);
            prop_assert!(slice.len() <= page_size);
            joined.extend_from_slice(slice);
        }
        prop_assert_eq!(joined, items);
    }

    #[test]
    fn descending_sort_reverses_ascending_for_distinct_keys(
        records in records_strategy(),
    ) {
        let filters = FilterState::default();
        let asc: Vec<&str> =
            apply(&records, &filters, Some(SortConfig::asc(SortKey::Id)))
                .iter()
                .map(|row| row.id.as_str())
                .collect();
        let mut desc: Vec<&str> =
            apply(&records, &filters, Some(SortConfig::desc(SortKey::Id)))
                .iter()
                .map(|row| row.id.as_str())
                .collect();
        desc.reverse();
        prop_assert_eq!(asc, desc);
    }

    #[test]
    fn equal_sort_keys_keep_relative_order(records in records_strategy()) {
        let filters = FilterState::default();
        let rows =
            apply(&records, &filters, Some(SortConfig::asc(SortKey::Name)));
        for pair in rows.windows(2) {
            if pair[0].name == pair[1].name {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    #[test]
    fn filtered_rows_are_a_subsequence_matching_filters(
        records in records_strategy(),
        search in "[a-d]{0,2}",
        status in prop::option::of(status_strategy()),
    ) {
        let mut filters = FilterState { search, ..FilterState::default() };
        if let Some(status) = status {
            filters.toggle_status(status);
        }

        let rows = apply(&records, &filters, None);
        let expected: Vec<&OrderRecord> =
            records.iter().filter(|record| filters.matches(record)).collect();
        prop_assert_eq!(rows, expected);
    }

    #[test]
    fn intermediate_frames_never_exceed_target(
        whole in 0u32..5_000_000,
        dollar in any::<bool>(),
    ) {
        let source = if dollar {
            format!("${whole}")
        } else {
            whole.to_string()
        };
        let animation = MetricAnimation::new(source.as_str());
        for frame in animation.frames() {
            let digits: String =
                frame.chars().filter(char::is_ascii_digit).collect();
            let value: u64 = digits.parse().unwrap_or(0);
            prop_assert!(value <= u64::from(whole));
        }
        prop_assert_eq!(animation.frames().last(), Some(source));
    }
}
