// Client-side pagination: a pure slice over an already-filtered,
// already-sorted collection. The tables never ask the backend to page.

pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    item_count.div_ceil(page_size)
}

/// Items visible on a 1-based page. Out-of-range pages yield an empty slice.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1) * page_size;
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

pub fn has_previous(page: usize) -> bool {
    page > 1
}

pub fn has_next(page: usize, item_count: usize, page_size: usize) -> bool {
    page < total_pages(item_count, page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_rows_at_page_size_five() {
        let rows: Vec<u32> = (1..=12).collect();

        assert_eq!(total_pages(rows.len(), 5), 3);
        assert_eq!(page_slice(&rows, 1, 5), &[1, 2, 3, 4, 5]);
        assert_eq!(page_slice(&rows, 2, 5), &[6, 7, 8, 9, 10]);
        assert_eq!(page_slice(&rows, 3, 5), &[11, 12]);
    }

    #[test]
    fn previous_disabled_on_first_page_next_disabled_on_last() {
        assert!(!has_previous(1));
        assert!(has_previous(2));
        assert!(has_next(1, 12, 5));
        assert!(has_next(2, 12, 5));
        assert!(!has_next(3, 12, 5));
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let rows: Vec<u32> = (1..=3).collect();
        assert!(page_slice(&rows, 2, 5).is_empty());
        assert!(page_slice(&rows, 0, 5).is_empty());
    }

    #[test]
    fn empty_collection_has_no_pages() {
        let rows: Vec<u32> = Vec::new();
        assert_eq!(total_pages(rows.len(), 10), 0);
        assert!(!has_next(1, 0, 10));
    }
}
