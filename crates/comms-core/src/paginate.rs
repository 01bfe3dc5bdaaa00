//! Paginator - deterministic fixed-size slicing of a filtered list.

use serde::Serialize;

/// One page of results plus the metadata a list view needs.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

/// Slice out page `page` (1-based) of `items`. The paginator does not
/// clamp: an out-of-range page yields an empty slice, not an error.
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    if page_size == 0 || page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed to hold `total_items` at `page_size` per page.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_are_deterministic() {
        let items: Vec<u32> = (0..10).collect();
        assert_eq!(paginate(&items, 3, 1), &[0, 1, 2]);
        assert_eq!(paginate(&items, 3, 2), &[3, 4, 5]);
        assert_eq!(paginate(&items, 3, 4), &[9]);
    }

    #[test]
    fn out_of_range_pages_are_empty_not_errors() {
        let items: Vec<u32> = (0..4).collect();
        assert!(paginate(&items, 2, 0).is_empty());
        assert!(paginate(&items, 2, 3).is_empty());
        assert!(paginate(&items, 2, usize::MAX).is_empty());
        assert!(paginate::<u32>(&[], 5, 1).is_empty());
    }

    #[test]
    fn concatenated_pages_reconstruct_the_list() {
        let items: Vec<u32> = (0..23).collect();
        for page_size in 1..=items.len() + 1 {
            let mut rebuilt = Vec::new();
            for page in 1..=total_pages(items.len(), page_size) {
                rebuilt.extend_from_slice(paginate(&items, page_size, page));
            }
            assert_eq!(rebuilt, items, "page_size {page_size}");
        }
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 0);
    }
}
