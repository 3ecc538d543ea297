//! Pagination defaults and clamping helpers for list endpoints.

/// Page size used when the caller omits `limit`.
pub const DEFAULT_PAGE_SIZE: i64 = 100;

/// Upper bound on a single page, whatever the caller asks for.
pub const MAX_PAGE_SIZE: i64 = 500;

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
