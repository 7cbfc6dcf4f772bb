//! Stub heap introspection implementation
//!
//! Used when no platform-specific implementation is available.

use super::HeapStats;

/// Allocator name used in diagnostic labels
pub const ALLOCATOR_NAME: &str = "Unknown";

/// Force reclamation (stub: nothing to reclaim)
pub fn heap_reclaim() {}

/// Get current free heap in bytes (stub: returns 0)
pub fn get_heap_free() -> usize {
    0
}

/// Get detailed heap statistics (stub: returns None)
pub fn get_heap_stats() -> Option<HeapStats> {
    None
}
