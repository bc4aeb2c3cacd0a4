//! Cross-Page Consistency Tests
//!
//! Concatenating pages 0..k of any size yields a prefix of the fully
//! filtered, fully sorted result, with no duplicates and no gaps, on both
//! backends.

mod fixtures;

use std::collections::HashSet;

use fixtures::{criteria, criteria_matrix, dataset, ids, scan_service, store_service, DATASET_LEN};
use retaildb::criteria::{PageRequest, SearchCriteria};
use retaildb::search::SearchService;

// =============================================================================
// Helper Functions
// =============================================================================

/// The canonical result: one page big enough for everything
fn full_result(service: &SearchService, criteria: &SearchCriteria) -> Vec<String> {
    let all = criteria.at_page(PageRequest::new(0, DATASET_LEN).unwrap());
    ids(&service.search(&all).unwrap())
}

/// Walks pages of `size` until an empty page, concatenating ids
fn walk_pages(service: &SearchService, criteria: &SearchCriteria, size: usize) -> (Vec<String>, u64) {
    let mut collected = Vec::new();
    let mut pages_seen = 0u64;
    let mut index = 0;

    loop {
        let page = service
            .search(&criteria.at_page(PageRequest::new(index, size).unwrap()))
            .unwrap();
        if page.is_empty() {
            assert_eq!(page.total_pages, pages_seen);
            return (collected, pages_seen);
        }
        assert!(page.len() <= size);
        collected.extend(ids(&page));
        pages_seen += 1;
        index += 1;
    }
}

// =============================================================================
// Consistency Tests
// =============================================================================

/// Pages of every size reassemble into the canonical result.
#[test]
fn test_pages_concatenate_to_full_result() {
    for service in [store_service(dataset()), scan_service(dataset())] {
        for (name, params) in criteria_matrix() {
            let criteria = criteria(&params);
            let full = full_result(&service, &criteria);

            for size in [1, 2, 3, 5, 8, 13] {
                let (walked, _) = walk_pages(&service, &criteria, size);
                assert_eq!(walked, full, "case '{}' size {}", name, size);
            }
        }
    }
}

/// No record appears on two pages.
#[test]
fn test_no_duplicates_across_pages() {
    let service = scan_service(dataset());
    let criteria = criteria(&Default::default());

    let (walked, _) = walk_pages(&service, &criteria, 6);
    let unique: HashSet<&String> = walked.iter().collect();

    assert_eq!(walked.len(), DATASET_LEN);
    assert_eq!(unique.len(), DATASET_LEN);
}

/// Any prefix of pages is a prefix of the full result.
#[test]
fn test_page_prefix_property() {
    let service = store_service(dataset());
    let (_, params) = &criteria_matrix()[7];
    let criteria = criteria(params);
    let full = full_result(&service, &criteria);

    let mut prefix = Vec::new();
    for index in 0..3 {
        let page = service
            .search(&criteria.at_page(PageRequest::new(index, 4).unwrap()))
            .unwrap();
        prefix.extend(ids(&page));
        assert_eq!(prefix.as_slice(), &full[..prefix.len()]);
    }
}

/// Total count does not depend on the page requested.
#[test]
fn test_total_independent_of_page() {
    let service = scan_service(dataset());
    let (_, params) = &criteria_matrix()[3];
    let criteria = criteria(params);

    let totals: HashSet<u64> = (0..5)
        .map(|index| {
            service
                .search(&criteria.at_page(PageRequest::new(index, 4).unwrap()))
                .unwrap()
                .total_elements
        })
        .collect();

    assert_eq!(totals.len(), 1);
}

/// A page past the end is empty but still reports the total.
#[test]
fn test_page_past_end() {
    let service = store_service(dataset());
    let page = service
        .search(&SearchCriteria::unfiltered().at_page(PageRequest::new(100, 10).unwrap()))
        .unwrap();

    assert!(page.is_empty());
    assert_eq!(page.total_elements, DATASET_LEN as u64);
    assert_eq!(page.total_pages, 8);
}
