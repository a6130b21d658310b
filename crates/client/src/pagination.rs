use payroll_schema::{Aggregate, CountAggregate};
use serde::Serialize;

/// Limit and offset sent as `$limit` / `$offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: i32,
    pub offset: i32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: 50,
            offset: 0,
        }
    }
}

impl PageRequest {
    pub fn new(limit: i32, offset: i32) -> Self {
        Self {
            limit: limit.max(0),
            offset: offset.max(0),
        }
    }

    pub fn next(&self) -> Self {
        Self {
            limit: self.limit,
            offset: self.offset.saturating_add(self.limit),
        }
    }
}

/// One page of rows plus the total reported by the matching aggregate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: i32,
    pub page_size: i32,
    pub offset: i32,
    pub has_next_page: bool,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: &Aggregate<CountAggregate>, offset: i32) -> Self {
        let count = total.count();
        let total_count = i32::try_from(count).unwrap_or(i32::MAX);
        let page_size = i32::try_from(items.len()).unwrap_or(i32::MAX);
        let has_next_page = i64::from(offset) + i64::from(page_size) < count;

        Self {
            items,
            total_count,
            page_size,
            offset,
            has_next_page,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page_size: self.page_size,
            offset: self.offset,
            has_next_page: self.has_next_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(count: i64) -> Aggregate<CountAggregate> {
        Aggregate {
            aggregate: Some(CountAggregate { count }),
        }
    }

    #[test]
    fn has_next_page_until_total_reached() {
        let page = Page::new(vec![1, 2, 3], &total(7), 3);
        assert_eq!(page.page_size, 3);
        assert!(page.has_next_page);

        let last = Page::new(vec![7], &total(7), 6);
        assert!(!last.has_next_page);
    }

    #[test]
    fn missing_aggregate_means_empty() {
        let page: Page<i32> = Page::new(vec![], &Aggregate::default(), 0);
        assert_eq!(page.total_count, 0);
        assert!(!page.has_next_page);
    }

    #[test]
    fn page_request_advances() {
        let request = PageRequest::new(20, -5);
        assert_eq!(request.offset, 0);
        assert_eq!(request.next(), PageRequest::new(20, 20));
    }

    #[test]
    fn offsets_saturate_at_the_end_of_the_range() {
        let request = PageRequest::new(i32::MAX, 1);
        assert_eq!(request.next().offset, i32::MAX);
    }

    #[test]
    fn totals_beyond_i32_are_clamped() {
        let page = Page::new(vec![1], &total(i64::from(i32::MAX) + 10), i32::MAX);
        assert_eq!(page.total_count, i32::MAX);
        assert!(page.has_next_page);
    }
}
