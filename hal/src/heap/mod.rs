//! Heap introspection HAL
//!
//! Provides platform-specific heap memory statistics and a way to force the
//! allocator to give unused memory back before it is measured.
//! Implementation is selected at compile time based on platform feature.

// Platform-specific implementations
#[cfg(feature = "platform-linux")]
mod linux;
#[cfg(feature = "platform-linux")]
pub use linux::*;

#[cfg(all(feature = "platform-nuttx", not(feature = "platform-linux")))]
mod nuttx;
#[cfg(all(feature = "platform-nuttx", not(feature = "platform-linux")))]
pub use nuttx::*;

#[cfg(not(any(feature = "platform-linux", feature = "platform-nuttx")))]
mod none;
#[cfg(not(any(feature = "platform-linux", feature = "platform-nuttx")))]
pub use none::*;

/// Heap statistics structure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeapStats {
    /// Total heap arena size in bytes
    pub arena: usize,
    /// Number of free chunks
    pub ordblks: usize,
    /// Size of largest free chunk (0 when the platform does not report it)
    pub mxordblk: usize,
    /// Total allocated space in bytes
    pub uordblks: usize,
    /// Total free space in bytes
    pub fordblks: usize,
}

impl HeapStats {
    /// Bytes currently available for new allocations
    pub fn free_bytes(&self) -> usize {
        self.fordblks
    }

    /// Bytes currently handed out to callers
    pub fn used_bytes(&self) -> usize {
        self.uordblks
    }
}

/// Clamp a C `int` counter from mallinfo into a byte count.
#[cfg_attr(
    not(all(feature = "platform-nuttx", not(feature = "platform-linux"))),
    allow(dead_code)
)]
pub(crate) fn to_bytes(value: i32) -> usize {
    usize::try_from(value).unwrap_or(0)
}
