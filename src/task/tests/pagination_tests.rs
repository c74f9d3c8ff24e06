//! Tests for pagination window validation and page-count arithmetic.

use crate::task::domain::{PageRequest, TaskDomainError, page_count};
use rstest::rstest;

#[rstest]
fn page_request_rejects_zero_page() {
    assert_eq!(
        PageRequest::new(0, 5),
        Err(TaskDomainError::InvalidPageNumber(0))
    );
}

#[rstest]
fn page_request_rejects_zero_size() {
    assert_eq!(
        PageRequest::new(1, 0),
        Err(TaskDomainError::InvalidPageSize(0))
    );
}

#[rstest]
fn first_page_starts_at_offset_zero() {
    let window = PageRequest::new(1, 5).expect("valid window");
    assert_eq!(window.offset(), 0);
    assert_eq!(window.limit(), 5);
}

#[rstest]
#[case(2, 5, 5)]
#[case(3, 5, 10)]
#[case(4, 25, 75)]
fn offset_skips_preceding_pages(#[case] page: u32, #[case] size: u32, #[case] expected: i64) {
    let window = PageRequest::new(page, size).expect("valid window");
    assert_eq!(window.offset(), expected);
}

#[rstest]
#[case(12, 5, 3)]
#[case(10, 5, 2)]
#[case(1, 5, 1)]
#[case(0, 5, 0)]
#[case(5, 1, 5)]
fn page_count_rounds_up(#[case] total: u64, #[case] size: u32, #[case] expected: u64) {
    assert_eq!(page_count(total, size), Ok(expected));
}

#[rstest]
fn page_count_rejects_zero_size_instead_of_dividing() {
    assert_eq!(page_count(12, 0), Err(TaskDomainError::InvalidPageSize(0)));
}
