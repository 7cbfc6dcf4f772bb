//! NuttX APRS module binding
//!
//! The firmware registers a C init routine that sets up the SA8x8 radio,
//! the AFSK modem and the GPS parser. It returns 0 or a negated errno.

use core::ffi::c_int;
use core::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use super::{AprsError, AprsResult};

extern "C" {
    fn esp32s3aprs_init() -> c_int;
}

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Initialize the APRS firmware module
pub fn aprs_initialize() -> AprsResult<()> {
    let rc = unsafe { esp32s3aprs_init() };
    debug!(rc, "esp32s3aprs_init returned");

    if rc == 0 {
        INITIALIZED.store(true, Ordering::Release);
        Ok(())
    } else {
        Err(errno_to_error(rc))
    }
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
