//! Result type aliases.

use crate::HardwareError;

/// A specialized `Result` type for Hardware Store operations.
pub type HardwareResult<T> = Result<T, HardwareError>;
