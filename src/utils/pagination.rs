// src/utils/pagination.rs

/// Number of questions on one page of `GET /questions`.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// One page cut out of an ordered collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,

    /// The page actually served.
    /// Differs from the requested page when the request fell outside the collection.
    pub served_page: i64,

    /// Size of the whole collection, not of this page.
    pub total_count: usize,

    pub total_pages: usize,
}

/// Cuts page `requested_page` (1-based) of `page_size` items out of `items`.
///
/// A page that holds no data is never returned empty: any request whose
/// first index lies past the end of the collection, and any page below 1,
/// is served as page 1 instead. An empty collection yields an empty page 1.
///
/// `page_size` must be non-zero.
pub fn paginate<T>(items: Vec<T>, requested_page: i64, page_size: usize) -> Page<T> {
    let total_count = items.len();

    let (served_page, start) = match first_index(requested_page, page_size) {
        Some(start) if start < total_count => (requested_page, start),
        _ => (1, 0),
    };

    Page {
        items: items.into_iter().skip(start).take(page_size).collect(),
        served_page,
        total_count,
        total_pages: total_pages(total_count, page_size),
    }
}

/// Number of pages needed to show `total_count` items.
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

/// Index of the first item on `page`, or `None` when the page is below 1
/// or the offset does not fit in memory.
fn first_index(page: i64, page_size: usize) -> Option<usize> {
    if page < 1 {
        return None;
    }
    usize::try_from(page - 1).ok()?.checked_mul(page_size)
}
