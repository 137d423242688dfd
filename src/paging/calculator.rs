use std::ops::RangeInclusive;

use serde::Serialize;
use tracing::debug;

use super::PagingError;

/// Clamped pagination view for one record set and one requested page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    pub total: u64,
    pub per_page: u64,
    pub page_count: u64,
    pub current_page: u64,
    pub offset: u64,
    pub limit: u64,
    pub window_start: u64,
    pub window_end: u64,
    pub window_size: u64,
}

impl PaginationState {
    pub fn window(&self) -> RangeInclusive<u64> {
        self.window_start..=self.window_end
    }

    pub fn is_first(&self) -> bool {
        self.current_page <= 1
    }

    pub fn is_last(&self) -> bool {
        self.current_page >= self.page_count
    }

    pub fn has_prev(&self) -> bool {
        !self.is_first()
    }

    pub fn has_next(&self) -> bool {
        !self.is_last()
    }

    /// SQL fragment selecting the current page's rows.
    pub fn limit_clause(&self) -> String {
        format!("LIMIT {}, {}", self.offset, self.limit)
    }

    /// Page number to store back into request-scoped data, if the caller
    /// keeps one.
    pub fn requested_page_normalized(&self) -> u64 {
        self.current_page
    }
}

/// Parse a raw `page` query value.
///
/// Missing or non-numeric input yields `None`, which `compute` treats as the
/// first page. Out-of-range integers saturate so they still clamp to an edge.
pub fn parse_requested_page(raw: Option<&str>) -> Option<i64> {
    let value = raw?.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(page) = value.parse::<i64>() {
        return Some(page);
    }

    let (negative, digits) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return Some(if negative { i64::MIN } else { i64::MAX });
    }
    None
}

pub fn compute(
    total: i64,
    per_page: i64,
    requested_page: Option<i64>,
    window_size: i64,
) -> Result<PaginationState, PagingError> {
    if per_page <= 0 {
        return Err(PagingError::invalid(
            "perPage",
            format!("must be greater than zero (got {})", per_page),
        ));
    }
    if total < 0 {
        return Err(PagingError::invalid(
            "total",
            format!("must not be negative (got {})", total),
        ));
    }
    if window_size <= 0 {
        return Err(PagingError::invalid(
            "windowSize",
            format!("must be greater than zero (got {})", window_size),
        ));
    }

    let total = total as u64;
    let per_page = per_page as u64;
    let window_size = window_size as u64;

    let page_count = total.div_ceil(per_page).max(1);
    let requested = requested_page.unwrap_or(1);
    let current_page = clamp_page(requested, page_count);
    if i128::from(requested) != i128::from(current_page) {
        debug!(requested, current_page, page_count, "clamped requested page");
    }

    let offset = (current_page - 1).saturating_mul(per_page);
    let (window_start, window_end) = select_window(current_page, page_count, window_size);

    Ok(PaginationState {
        total,
        per_page,
        page_count,
        current_page,
        offset,
        limit: per_page,
        window_start,
        window_end,
        window_size,
    })
}

fn clamp_page(requested: i64, page_count: u64) -> u64 {
    if requested < 1 {
        return 1;
    }
    (requested as u64).min(page_count)
}

fn select_window(current_page: u64, page_count: u64, window_size: u64) -> (u64, u64) {
    if page_count <= window_size {
        return (1, page_count);
    }

    let half = window_size / 2;
    if current_page <= window_size.div_ceil(2) {
        (1, window_size)
    } else if current_page >= page_count - half {
        (page_count - window_size + 1, page_count)
    } else {
        // Anchored on the start so even sizes keep their exact width.
        let start = current_page - half;
        (start, start + window_size - 1)
    }
}
