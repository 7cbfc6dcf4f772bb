//! APRS tracker boot diagnostics
//!
//! Brings up the tracker firmware, reclaims the heap and reports how much of
//! it is free before the application proper starts. Also provides `iprint`,
//! the numbered listing helper used from interactive debug sessions.
//!
//! Platform abstraction follows the HAL pattern:
//! - Interface defined in hal/src/<module>/mod.rs
//! - Implementations in hal/src/<module>/<platform>.rs
//! - Selection via Cargo features (platform-linux, platform-nuttx)

pub mod boot;
pub mod config;
pub mod error;
pub mod iprint;
pub mod logging;
pub mod platform;

use std::io::{self, Write};

use tracing::error;

pub use boot::{print_heap_stats, run_boot_diagnostics, Allocator, FirmwareModule, HeapReport};
pub use config::BootConfig;
pub use error::{BootError, BootResult};
pub use iprint::{iprint, iprint_to, Labeled};
pub use logging::{init_logging, log_subscriber};
pub use platform::{AprsModule, SystemHeap};

/// Run the boot diagnostics - portable entry point
///
/// Returns 0 once the heap report is printed. Any failure is logged and
/// turned into a non-zero status for the platform to act on.
pub fn run() -> i32 {
    let config = BootConfig::default();
    let stdout = io::stdout();
    let mut console = stdout.lock();

    run_with(&mut AprsModule, &mut SystemHeap, &mut console, &config)
}

/// Boot against explicit collaborators, reporting failures as an exit status
pub fn run_with<M, A, W>(
    module: &mut M,
    heap: &mut A,
    console: &mut W,
    config: &BootConfig,
) -> i32
where
    M: FirmwareModule + ?Sized,
    A: Allocator + ?Sized,
    W: Write + ?Sized,
{
    match run_boot_diagnostics(module, heap, console, config) {
        Ok(_) => 0,
        Err(e) => {
            error!(error = %e, "boot halted");
            1
        }
    }
}

/// Main entry point called from NuttX
#[cfg(feature = "platform-nuttx")]
#[no_mangle]
pub extern "C" fn aprs_boot_main(_argc: i32, _argv: *const *const u8) -> i32 {
    init_logging();
    run()
}
