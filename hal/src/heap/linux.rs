//! Linux heap introspection implementation
//!
//! Uses glibc's mallinfo2() for heap statistics and malloc_trim() to return
//! free memory at the top of the heap to the kernel.

use super::HeapStats;

/// Allocator name used in diagnostic labels
pub const ALLOCATOR_NAME: &str = "glibc";

/// Force the allocator to release unused memory. Blocks until done.
pub fn heap_reclaim() {
    // Return value only says whether anything was released.
    let _ = unsafe { libc::malloc_trim(0) };
}

/// Get current free heap in bytes
pub fn get_heap_free() -> usize {
    let info = unsafe { libc::mallinfo2() };
    info.fordblks
}

/// Get detailed heap statistics
pub fn get_heap_stats() -> Option<HeapStats> {
    let info = unsafe { libc::mallinfo2() };
    Some(HeapStats {
        arena: info.arena,
        ordblks: info.ordblks,
        mxordblk: 0, // Not available in Linux mallinfo
        uordblks: info.uordblks,
        fordblks: info.fordblks,
    })
}
