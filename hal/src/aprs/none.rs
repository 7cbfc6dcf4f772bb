//! APRS module stub for unsupported platforms

use super::{AprsError, AprsResult};

/// Initialize the APRS module (stub - returns NotSupported)
pub fn aprs_initialize() -> AprsResult<()> {
    Err(AprsError::NotSupported)
}

/// Check if the APRS module is initialized (stub - always returns false)
pub fn aprs_is_initialized() -> bool {
    false
}
