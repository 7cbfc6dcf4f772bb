//! APRS firmware module HAL
//!
//! Binds the tracker firmware (AX.25/APRS codec, SA8x8 radio, GPS) that must be
//! brought up before anything else runs. Only initialization is exposed here;
//! the firmware's own interfaces stay on the C side.
//! Implementation is selected at compile time based on platform feature.
//!
//! - NuttX: Calls the firmware's C init entry
//! - Linux: Host stand-in without radio hardware

// NuttX links against the C firmware
#[cfg(all(feature = "platform-nuttx", not(feature = "platform-linux")))]
mod nuttx;
#[cfg(all(feature = "platform-nuttx", not(feature = "platform-linux")))]
pub use nuttx::*;

// Linux runs without a radio
#[cfg(feature = "platform-linux")]
mod linux;
#[cfg(feature = "platform-linux")]
pub use linux::*;

// Fallback stub for other platforms
#[cfg(not(any(feature = "platform-linux", feature = "platform-nuttx")))]
mod none;
#[cfg(not(any(feature = "platform-linux", feature = "platform-nuttx")))]
pub use none::*;

use thiserror::Error;

/// Name the firmware module registers under
pub const MODULE_NAME: &str = "esp32s3aprs";

/// APRS module errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AprsError {
    /// Radio transceiver did not answer
    #[error("Radio not responding")]
    RadioNotResponding,
    /// Audio codec / modem setup failed
    #[error("Modem initialization failed")]
    ModemError,
    /// Out of memory while allocating firmware buffers
    #[error("Out of memory")]
    OutOfMemory,
    /// Operation not supported on this platform
    #[error("Not supported on this platform")]
    NotSupported,
    /// System error with errno
    #[error("System error: {0}")]
    SystemError(i32),
}

#[cfg(any(feature = "platform-linux", feature = "platform-nuttx"))]
impl AprsError {
    /// Map a negated errno returned by the firmware's C side
    pub fn from_errno(rc: i32) -> Self {
        errno_to_error(rc)
    }
}

/// Result type for APRS module operations
pub type AprsResult<T> = Result<T, AprsError>;
