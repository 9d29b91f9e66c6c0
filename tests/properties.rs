//! Property tests for paginator invariants

use proptest::prelude::*;
use solidafy_paginate::pagination::window;
use solidafy_paginate::Paginator;

fn paginator(len: usize, page_size: usize) -> Paginator<usize> {
    Paginator::with_page_size((0..len).collect(), page_size).unwrap()
}

proptest! {
    #[test]
    fn total_pages_is_ceiling(len in 0usize..2_000, page_size in 1usize..100) {
        let p = paginator(len, page_size);
        prop_assert_eq!(p.total_pages(), (len + page_size - 1) / page_size);
    }

    #[test]
    fn pages_are_full_except_last(len in 1usize..500, page_size in 1usize..40, page in 1i64..60) {
        let mut p = paginator(len, page_size);
        p.go_to_page(page);

        let shown = p.current_items().len();
        prop_assert!(shown <= page_size);
        prop_assert!(shown > 0);
        if !p.is_last_page() {
            prop_assert_eq!(shown, page_size);
        }

        let range = p.range();
        prop_assert_eq!(range.len(), shown);
        prop_assert_eq!(p.current_items()[0], range.start - 1);
    }

    #[test]
    fn go_to_page_clamps(len in 0usize..500, page_size in 1usize..40, page in any::<i64>()) {
        let mut p = paginator(len, page_size);
        p.go_to_page(page);

        let upper = p.total_pages().max(1) as i64;
        prop_assert_eq!(p.current_page() as i64, page.clamp(1, upper));
    }

    #[test]
    fn next_then_prev_round_trips(len in 0usize..500, page_size in 1usize..40, page in 1i64..60) {
        let mut p = paginator(len, page_size);
        p.go_to_page(page);
        let before = p.current_page();
        let had_next = p.has_next_page();

        p.next_page();
        p.prev_page();

        if had_next {
            prop_assert_eq!(p.current_page(), before);
        } else {
            prop_assert_eq!(p.current_page(), before.saturating_sub(1).max(1));
        }
    }

    #[test]
    fn change_page_size_returns_to_first(len in 0usize..500, page in 1i64..60, size in 1usize..40) {
        let mut p = paginator(len, 10);
        p.go_to_page(page);
        p.change_page_size(size).unwrap();
        prop_assert_eq!(p.current_page(), 1);
        prop_assert_eq!(p.page_size(), size);
    }

    #[test]
    fn page_numbers_window_shape(current in 0usize..200, total in 0usize..100, width in 0usize..12) {
        let numbers = window::page_numbers(current, total, width);

        prop_assert_eq!(numbers.len(), width.min(total));
        prop_assert!(numbers.windows(2).all(|w| w[1] == w[0] + 1));
        if let (Some(&first), Some(&last)) = (numbers.first(), numbers.last()) {
            prop_assert!(first >= 1);
            prop_assert!(last <= total);
            prop_assert!(numbers.contains(&current.clamp(1, total)));
        }
    }
}
