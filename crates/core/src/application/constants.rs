// Queue constants (No magic values)

/// Default cap on a single item pushed through a host surface (1 MiB)
pub const DEFAULT_MAX_ITEM_BYTES: usize = 1024 * 1024;

/// Default cap on a blocking pop requested through a host surface (25s)
/// Kept below the SDK's default HTTP request timeout (30s)
pub const DEFAULT_MAX_POP_TIMEOUT_MS: i64 = 25_000;
