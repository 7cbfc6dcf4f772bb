//! Hardware Abstraction Layer
//!
//! Platform-specific implementations are selected at compile time via Cargo features.
//! Apps opt into the modules they use (`heap`, `aprs`).

#[cfg(feature = "heap")]
pub mod heap;

#[cfg(feature = "aprs")]
pub mod aprs;

#[cfg(feature = "heap")]
pub use heap::{get_heap_free, get_heap_stats, heap_reclaim, HeapStats, ALLOCATOR_NAME};
