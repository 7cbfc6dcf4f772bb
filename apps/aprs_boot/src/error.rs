//! Boot diagnostics errors

use std::error::Error as StdError;
use std::io;

use thiserror::Error;

/// Fatal boot failures. None of them is retried.
#[derive(Debug, Error)]
pub enum BootError {
    /// The firmware module failed to initialize
    #[error("firmware module `{module}` failed to load: {source}")]
    ModuleLoad {
        module: String,
        #[source]
        source: Box<dyn StdError + Send + Sync + 'static>,
    },
    /// The diagnostic console rejected the heap report
    #[error("diagnostic console write failed: {0}")]
    Console(#[from] io::Error),
}

/// Result type for boot operations
pub type BootResult<T> = Result<T, BootError>;
