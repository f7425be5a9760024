//! Error handling for segmentation state and configuration
//!
//! Scanning itself never fails: every code point classifies and every
//! transition resolves. Errors only arise when a caller hands back a raw
//! state integer that was not produced by this crate, or configures an
//! impossible width.

/// Errors surfaced by state decoding and width configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SegmentError {
    #[error("Invalid {family} scanner state: {raw:#x}")]
    InvalidState { family: &'static str, raw: i32 },

    #[error("Invalid ambiguous width: {0} (expected 1 or 2)")]
    InvalidAmbiguousWidth(u8),
}

/// Result type for fallible segmentation operations
pub type SegmentResult<T> = Result<T, SegmentError>;
