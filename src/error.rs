//! Error type for allocator operations.

use core::fmt;

/// Error returned by [`crate::Allocator::allocate`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AllocError {
    /// The requested size was zero.
    InvalidSize,
    /// No free block large enough to satisfy the request exists, or the
    /// request exceeds the arena's maximum order outright.
    OutOfMemory,
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocError::InvalidSize => write!(f, "requested size must be non-zero"),
            AllocError::OutOfMemory => write!(f, "no free block large enough to satisfy the request"),
        }
    }
}

impl core::error::Error for AllocError {}
