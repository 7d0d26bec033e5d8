//! Handles for values a driver materializes on demand.

/// CLOB locator returned inside a row.
///
/// The locator is an opaque token identifying the LOB to the driver that
/// produced it. The data itself is read in chunks through
/// [`Connection::read_clob`](super::Connection::read_clob).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClobLocator {
    /// Driver-specific locator bytes.
    pub locator: Vec<u8>,
    /// Character count of the whole CLOB.
    pub size: u64,
    /// Chunk size the driver prefers for reads.
    pub chunk_size: u32,
}

impl ClobLocator {
    /// Assemble a locator from driver-reported metadata.
    pub fn new(locator: Vec<u8>, size: u64, chunk_size: u32) -> Self {
        Self {
            locator,
            size,
            chunk_size,
        }
    }
}

/// Handle for a REF CURSOR produced by an OUT bind.
///
/// Rows are fetched through
/// [`Connection::fetch_ref_cursor`](super::Connection::fetch_ref_cursor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefCursorHandle {
    /// Cursor ID assigned by the driver.
    pub cursor_id: u32,
}

impl RefCursorHandle {
    /// Wrap a driver-assigned cursor ID.
    pub fn new(cursor_id: u32) -> Self {
        Self { cursor_id }
    }
}
