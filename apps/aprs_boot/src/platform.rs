//! Boot collaborators backed by the HAL

use hal::aprs::{self, AprsError};
use hal::HeapStats;

use crate::boot::{Allocator, FirmwareModule};

/// The process allocator of the current platform
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHeap;

impl Allocator for SystemHeap {
    fn force_reclaim(&mut self) {
        hal::heap_reclaim();
    }

    fn free_bytes(&self) -> usize {
        hal::get_heap_free()
    }

    fn stats(&self) -> Option<HeapStats> {
        hal::get_heap_stats()
    }
}

/// The APRS tracker firmware
#[derive(Debug, Default, Clone, Copy)]
pub struct AprsModule;

impl FirmwareModule for AprsModule {
    type Error = AprsError;

    fn name(&self) -> &str {
        aprs::MODULE_NAME
    }

    fn load(&mut self) -> Result<(), AprsError> {
        aprs::aprs_initialize()
    }
}
