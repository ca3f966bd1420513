// tests/pagination_tests.rs

use trivia_api::utils::pagination::{QUESTIONS_PER_PAGE, paginate, total_pages};

fn items(n: usize) -> Vec<usize> {
    (0..n).collect()
}

#[test]
fn twelve_items_over_three_requests() {
    let page = paginate(items(12), 1, 10);
    assert_eq!(page.served_page, 1);
    assert_eq!(page.items, items(10));

    let page = paginate(items(12), 2, 10);
    assert_eq!(page.served_page, 2);
    assert_eq!(page.items, vec![10, 11]);

    // Past the end: page 1 is served instead.
    let page = paginate(items(12), 3, 10);
    assert_eq!(page.served_page, 1);
    assert_eq!(page.items, items(10));
    assert_eq!(page.total_count, 12);
    assert_eq!(page.total_pages, 2);
}

#[test]
fn in_range_pages_are_served_as_requested() {
    for size in 1..=35 {
        for page_number in 1..=4i64 {
            let start = (page_number as usize - 1) * QUESTIONS_PER_PAGE;
            if start >= size {
                continue;
            }
            let end = (start + QUESTIONS_PER_PAGE).min(size);

            let page = paginate(items(size), page_number, QUESTIONS_PER_PAGE);
            assert_eq!(page.served_page, page_number, "size {size}");
            assert_eq!(page.items, (start..end).collect::<Vec<_>>(), "size {size}");
        }
    }
}

#[test]
fn out_of_range_pages_fall_back_to_first_page() {
    for size in 1..=35 {
        let first: Vec<usize> = (0..size.min(QUESTIONS_PER_PAGE)).collect();
        for page_number in 1..=6i64 {
            if (page_number as usize - 1) * QUESTIONS_PER_PAGE < size {
                continue;
            }
            let page = paginate(items(size), page_number, QUESTIONS_PER_PAGE);
            assert_eq!(page.served_page, 1, "size {size}, page {page_number}");
            assert_eq!(page.items, first, "size {size}, page {page_number}");
        }
    }
}

#[test]
fn non_positive_pages_fall_back_to_first_page() {
    for page_number in [0, -1, i64::MIN] {
        let page = paginate(items(15), page_number, 10);
        assert_eq!(page.served_page, 1);
        assert_eq!(page.items, items(10));
    }
}

#[test]
fn huge_page_numbers_do_not_overflow() {
    let page = paginate(items(5), i64::MAX, 10);
    assert_eq!(page.served_page, 1);
    assert_eq!(page.items, items(5));
}

#[test]
fn empty_collection_serves_empty_first_page() {
    let page = paginate(Vec::<u8>::new(), 1, 10);
    assert_eq!(page.served_page, 1);
    assert!(page.items.is_empty());
    assert_eq!(page.total_pages, 0);

    let page = paginate(Vec::<u8>::new(), 4, 10);
    assert_eq!(page.served_page, 1);
    assert!(page.items.is_empty());
}

#[test]
fn total_pages_rounds_up() {
    assert_eq!(total_pages(0, 10), 0);
    assert_eq!(total_pages(10, 10), 1);
    assert_eq!(total_pages(11, 10), 2);
}
