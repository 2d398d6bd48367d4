/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

/// Sentinel extension for filenames without a suffix
pub const UNKNOWN_EXTENSION: &str = "UNKNOWN";
