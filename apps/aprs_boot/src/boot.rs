//! Boot sequencer
//!
//! Runs once at power-on, before the tracker application starts:
//!
//! 1. load the firmware module (fatal on failure)
//! 2. force a reclamation pass on the allocator
//! 3. read the free heap
//! 4. print one `"<label> <free bytes>"` line on the console
//!
//! The collaborators are traits so the sequence can run against mocks.

use std::error::Error as StdError;
use std::io::Write;

use hal::HeapStats;
use tracing::{debug, info};

use crate::config::BootConfig;
use crate::error::{BootError, BootResult};
use crate::iprint::{iprint_to, Labeled};

/// Firmware component whose initialization gates the boot
pub trait FirmwareModule {
    type Error: StdError + Send + Sync + 'static;

    /// Name used in logs and errors
    fn name(&self) -> &str;

    /// Initialize the module. Either succeeds or boot cannot continue.
    fn load(&mut self) -> Result<(), Self::Error>;
}

/// Platform memory manager
pub trait Allocator {
    /// Synchronously give back all memory that can be reclaimed
    fn force_reclaim(&mut self);

    /// Bytes currently available for new allocations
    fn free_bytes(&self) -> usize;

    /// Detailed statistics, if the platform reports them
    fn stats(&self) -> Option<HeapStats> {
        None
    }
}

/// Snapshot taken by the boot sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapReport {
    pub free_bytes: usize,
}

/// Run the boot diagnostics sequence.
///
/// On a module load failure nothing is asked of the allocator and nothing is
/// written to `console`.
pub fn run_boot_diagnostics<M, A, W>(
    module: &mut M,
    heap: &mut A,
    console: &mut W,
    config: &BootConfig,
) -> BootResult<HeapReport>
where
    M: FirmwareModule + ?Sized,
    A: Allocator + ?Sized,
    W: Write + ?Sized,
{
    info!(module = module.name(), "loading firmware module");
    module.load().map_err(|e| BootError::ModuleLoad {
        module: module.name().to_string(),
        source: Box::new(e),
    })?;

    heap.force_reclaim();
    let free_bytes = heap.free_bytes();
    info!(free_bytes, "heap reclaimed");

    writeln!(console, "{} {}", config.heap_label, free_bytes)?;
    console.flush()?;

    if config.log_heap_stats {
        if let Some(stats) = heap.stats() {
            debug!(
                arena = stats.arena,
                used = stats.uordblks,
                free = stats.fordblks,
                free_chunks = stats.ordblks,
                largest_free = stats.mxordblk,
                "heap statistics"
            );
        }
    }

    Ok(HeapReport { free_bytes })
}

/// Heap statistics as labeled records, in display order
pub fn heap_stat_records(stats: &HeapStats) -> [Labeled<&'static str, usize>; 5] {
    [
        Labeled("Arena (total)", stats.arena),
        Labeled("Used", stats.uordblks),
        Labeled("Free", stats.fordblks),
        Labeled("Free chunks", stats.ordblks),
        Labeled("Largest free", stats.mxordblk),
    ]
}

/// Interactive heap dump: enumerates the allocator's statistics.
///
/// Returns the number of records printed, 0 when the platform has none.
pub fn print_heap_stats<A, W>(heap: &A, out: &mut W) -> std::io::Result<usize>
where
    A: Allocator + ?Sized,
    W: Write + ?Sized,
{
    match heap.stats() {
        Some(stats) => iprint_to(out, heap_stat_records(&stats)),
        None => iprint_to(out, std::iter::empty::<Labeled<&str, usize>>()),
    }
}
