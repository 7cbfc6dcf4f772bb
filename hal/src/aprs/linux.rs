//! Linux APRS module stand-in
//!
//! There is no radio on a development host. Initialization only records that
//! the module was brought up so the boot path runs unchanged.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use super::{AprsError, AprsResult};

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Initialize the APRS firmware module (host: no hardware)
pub fn aprs_initialize() -> AprsResult<()> {
    debug!("no radio hardware on host, skipping transceiver setup");
    INITIALIZED.store(true, Ordering::Release);
    Ok(())
}

/// Check if the APRS module is initialized
pub fn aprs_is_initialized() -> bool {
    INITIALIZED.load(Ordering::Acquire)
}

/// Map a negated errno from the firmware's init entry
pub fn errno_to_error(rc: i32) -> AprsError {
    if rc == -libc::ENODEV || rc == -libc::ETIMEDOUT {
        AprsError::RadioNotResponding
    } else if rc == -libc::EIO {
        AprsError::ModemError
    } else if rc == -libc::ENOMEM {
        AprsError::OutOfMemory
    } else if rc == -libc::ENOSYS {
        AprsError::NotSupported
    } else {
        AprsError::SystemError(-rc)
    }
}
