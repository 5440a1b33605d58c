use pubassist_engine::{compute_fetch_range, compute_page_strip, last_page, WINDOW_SIZE};

#[test]
fn test_current_page_listed_once_and_disabled() {
    for page_size in [1, 3, 10, 25] {
        for item_count in 0..=300 {
            let last = last_page(item_count, page_size);
            for page in 1..=last {
                let strip = compute_page_strip(page, item_count, page_size);
                let current: Vec<_> = strip.pages.iter().filter(|p| p.page_num == page).collect();
                assert_eq!(current.len(), 1, "page {} of {}", page, last);
                assert!(!current[0].enabled);
                assert_eq!(strip.pages.iter().filter(|p| !p.enabled).count(), 1);
            }
        }
    }
}

#[test]
fn test_window_length_never_exceeds_limit() {
    for item_count in 0..=500 {
        let last = last_page(item_count, 10);
        for page in 1..=last.max(1) {
            let strip = compute_page_strip(page, item_count, 10);
            let window_start = page.saturating_sub(5).max(1);
            let expected = if last >= window_start {
                WINDOW_SIZE.min(last - window_start + 1)
            } else {
                0
            };
            assert_eq!(strip.pages.len(), expected);
            assert!(strip.pages.len() <= WINDOW_SIZE);
        }
    }
}

#[test]
fn test_window_pages_are_contiguous_and_in_bounds() {
    for page in 1..=40 {
        let strip = compute_page_strip(page, 400, 10);
        let numbers: Vec<usize> = strip.pages.iter().map(|p| p.page_num).collect();
        for pair in numbers.windows(2) {
            assert_eq!(pair[1], pair[0] + 1);
        }
        assert!(numbers.iter().all(|n| (1..=40).contains(n)));

        let first = numbers[0];
        let last = *numbers.last().unwrap();
        assert_eq!(strip.more_left.enabled, first != 1);
        assert_eq!(strip.more_left.page_num, first - 1);
        assert_eq!(strip.more_right.enabled, last != 40);
        assert_eq!(strip.more_right.page_num, last + 1);
    }
}

#[test]
fn test_strip_is_idempotent() {
    for page in 1..=12 {
        assert_eq!(
            compute_page_strip(page, 117, 10),
            compute_page_strip(page, 117, 10)
        );
    }
}

#[test]
fn test_documented_example() {
    assert_eq!(last_page(95, 10), 10);
    let range = compute_fetch_range(1, 95, 10, 0);
    assert_eq!((range.start_index, range.end_index), (0, 9));
}

#[test]
fn test_fetch_range_spans_radius_pages() {
    for page in 2..=50 {
        let range = compute_fetch_range(page, 0, 10, 1);
        assert_eq!(range.start_index, (page - 2) * 10);
        assert_eq!(range.end_index, (page + 1) * 10 - 1);
    }
}

#[test]
fn test_strip_json_shape() {
    let strip = compute_page_strip(3, 35, 10);
    insta::assert_snapshot!(serde_json::to_string_pretty(&strip).unwrap(), @r#"
    {
      "first": true,
      "previous": {
        "page": 2,
        "enabled": true
      },
      "next": {
        "page": 4,
        "enabled": true
      },
      "pages": [
        {
          "page_num": 1,
          "enabled": true
        },
        {
          "page_num": 2,
          "enabled": true
        },
        {
          "page_num": 3,
          "enabled": false
        },
        {
          "page_num": 4,
          "enabled": true
        }
      ],
      "more_left": {
        "enabled": false,
        "page_num": 0
      },
      "more_right": {
        "enabled": false,
        "page_num": 5
      }
    }
    "#);
}
