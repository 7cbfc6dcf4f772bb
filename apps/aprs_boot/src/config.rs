//! Boot diagnostics configuration
//!
//! Everything is decided at build time: the HAL backend by platform feature,
//! the report label by `legacy-heap-label`.

/// Label the original MicroPython boot script printed. Kept for log scrapers.
pub const LEGACY_HEAP_LABEL: &str = "Micropython heap free :";

/// Boot diagnostics settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootConfig {
    /// Text printed before the free byte count
    pub heap_label: String,
    /// Log the allocator's detailed statistics after the report
    pub log_heap_stats: bool,
}

impl BootConfig {
    /// Label derived from the platform allocator, e.g. `"glibc heap free :"`
    pub fn platform_label() -> String {
        format!("{} heap free :", hal::ALLOCATOR_NAME)
    }

    /// Override the report label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.heap_label = label.into();
        self
    }

    /// Enable or disable detailed heap statistics in the log
    pub fn with_heap_stats(mut self, enabled: bool) -> Self {
        self.log_heap_stats = enabled;
        self
    }
}

impl Default for BootConfig {
    fn default() -> Self {
        let heap_label = if cfg!(feature = "legacy-heap-label") {
            LEGACY_HEAP_LABEL.to_string()
        } else {
            Self::platform_label()
        };
        Self {
            heap_label,
            log_heap_stats: true,
        }
    }
}
