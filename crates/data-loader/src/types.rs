//! Core value types for the storefront datasets.
//!
//! Tables themselves are polars `DataFrame`s; this module only names the
//! identifiers and formats the loaders agree on.

// =============================================================================
// Type Aliases
// =============================================================================

/// Storefront identifier of a game or bundle
pub type AppId = i64;

/// Storefront identifier of a reviewer (64-bit account id)
pub type SteamUserId = i64;

// =============================================================================
// Formats
// =============================================================================

/// Format used when timestamps are written back out
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Cell contents read as missing regardless of column type (empty cells
/// are always missing)
pub const MISSING_MARKERS: &[&str] = &["NA", "N/A", "NaN", "nan", "NULL", "null"];
