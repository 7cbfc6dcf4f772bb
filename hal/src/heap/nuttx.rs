//! NuttX heap introspection implementation
//!
//! Uses NuttX's mallinfo() for heap statistics and malloc_trim() to shrink
//! the user heap.

use super::{to_bytes, HeapStats};

/// Mirror of `struct mallinfo` from NuttX include/malloc.h
#[repr(C)]
#[derive(Debug, Clone, Copy)]
struct MallInfo {
    arena: i32,
    ordblks: i32,
    aordblks: i32,
    mxordblk: i32,
    uordblks: i32,
    fordblks: i32,
}

extern "C" {
    fn mallinfo() -> MallInfo;
    fn malloc_trim(pad: usize) -> i32;
}

/// Allocator name used in diagnostic labels
pub const ALLOCATOR_NAME: &str = "NuttX";

/// Force the allocator to release unused memory. Blocks until done.
pub fn heap_reclaim() {
    let _ = unsafe { malloc_trim(0) };
}

/// Get current free heap in bytes
pub fn get_heap_free() -> usize {
    let info = unsafe { mallinfo() };
    to_bytes(info.fordblks)
}

/// Get detailed heap statistics
pub fn get_heap_stats() -> Option<HeapStats> {
    let info = unsafe { mallinfo() };
    Some(stats_from(&info))
}

fn stats_from(info: &MallInfo) -> HeapStats {
    HeapStats {
        arena: to_bytes(info.arena),
        ordblks: to_bytes(info.ordblks),
        mxordblk: to_bytes(info.mxordblk),
        uordblks: to_bytes(info.uordblks),
        fordblks: to_bytes(info.fordblks),
    }
}
