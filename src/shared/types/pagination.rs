use super::coerce::parse_int_prefix;

/// Requested page window (1-based page number and page size).
///
/// Both values are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_LIMIT: u32 = 10;

    /// Build a request, clamping zero to 1.
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    /// Build a request from raw query values.
    ///
    /// Missing or non-numeric values fall back to the defaults; values
    /// below 1 are clamped to 1.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page: parse_positive(page, Self::DEFAULT_PAGE),
            limit: parse_positive(limit, Self::DEFAULT_LIMIT),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page as usize)
            .saturating_sub(1)
            .saturating_mul(self.limit as usize)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

fn parse_positive(raw: Option<&str>, default: u32) -> u32 {
    match raw.and_then(parse_int_prefix) {
        Some(value) => value.clamp(1, u32::MAX as i64) as u32,
        None => default,
    }
}

/// Paginated response wrapper
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u64,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        let total_pages = total.div_ceil(u64::from(limit.max(1)));
        Self {
            items,
            total,
            page,
            limit,
            total_pages,
        }
    }

    /// Slice an already-filtered sequence into the requested page.
    ///
    /// `total` is the length of `items`, so callers must filter first.
    pub fn paginate(items: Vec<T>, request: PageRequest) -> Self {
        let total = items.len() as u64;
        let page_items = items
            .into_iter()
            .skip(request.offset())
            .take(request.limit() as usize)
            .collect();
        Self::new(page_items, total, request.page(), request.limit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_missing() {
        assert_eq!(PageRequest::from_raw(None, None), PageRequest::new(1, 10));
    }

    #[test]
    fn non_numeric_values_fall_back_to_defaults() {
        let req = PageRequest::from_raw(Some("abc"), Some(""));
        assert_eq!(req, PageRequest::new(1, 10));
    }

    #[test]
    fn zero_and_negative_values_clamp_to_one() {
        assert_eq!(PageRequest::from_raw(Some("0"), Some("-5")), PageRequest::new(1, 1));
        assert_eq!(PageRequest::new(0, 0), PageRequest::new(1, 1));
    }

    #[test]
    fn first_page_starts_at_zero() {
        assert_eq!(PageRequest::default().offset(), 0);
        assert_eq!(PageRequest::new(0, 10).offset(), 0);
        assert_eq!(PageRequest::new(3, 10).offset(), 20);
    }

    #[test]
    fn numeric_prefix_is_used() {
        assert_eq!(PageRequest::from_raw(Some("2nd"), Some("5.5")), PageRequest::new(2, 5));
    }

    #[test]
    fn page_slice_length_matches_formula() {
        let items: Vec<u32> = (0..23).collect();
        for limit in 1..=25u32 {
            for page in 1..=30u32 {
                let result = PaginatedResult::paginate(items.clone(), PageRequest::new(page, limit));
                let start = (page as i64 - 1) * limit as i64;
                let expected = (limit as i64).min((23 - start).max(0)) as usize;
                assert_eq!(result.items.len(), expected, "page={page} limit={limit}");
                assert_eq!(result.total, 23);
                assert_eq!(result.total_pages, 23u64.div_ceil(limit as u64));
                if expected > 0 {
                    assert_eq!(result.items[0], start as u32);
                }
            }
        }
    }

    #[test]
    fn empty_input_has_zero_pages() {
        let result = PaginatedResult::<u32>::paginate(Vec::new(), PageRequest::default());
        assert!(result.items.is_empty());
        assert_eq!(result.total, 0);
        assert_eq!(result.total_pages, 0);
    }

    #[test]
    fn huge_page_yields_empty_slice() {
        let result = PaginatedResult::paginate(vec![1, 2, 3], PageRequest::new(u32::MAX, u32::MAX));
        assert!(result.items.is_empty());
        assert_eq!(result.total_pages, 1);
    }
}
