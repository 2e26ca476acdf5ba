//! Cursor-based pagination contract
//!
//! The service paginates with three members: a request takes `Marker` and
//! `MaxItems`, and a truncatable result carries `IsTruncated` plus the
//! `Marker` to pass back unchanged on the next call. The cursor is opaque;
//! callers must not interpret it.

/// Implemented by every result type the service may truncate.
pub trait Paginated {
    /// Whether more results exist beyond this page. Absent on the wire
    /// means `false`.
    fn is_truncated(&self) -> bool;

    /// The opaque cursor for the next page. Only meaningful when
    /// [`is_truncated`](Paginated::is_truncated) returns `true`.
    fn marker(&self) -> Option<&str>;
}
