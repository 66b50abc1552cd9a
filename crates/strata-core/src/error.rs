//! Error types for the Strata container library.
//!
//! Organized by subsystem: memory (allocators, buffers, owning
//! containers) and view (non-owning views). All errors carry enough
//! context to diagnose the failing call without a debugger attached.

use std::error::Error;
use std::fmt;

/// Errors from allocators, buffers, and owning containers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MemoryError {
    /// The underlying allocator could not satisfy a request.
    ///
    /// Surfaced unchanged to the caller; the operation that triggered
    /// it leaves any previous buffer valid and untouched.
    AllocationFailed {
        /// Name of the memory space the request was made in.
        space: &'static str,
        /// Number of bytes requested. Saturates at `usize::MAX` when
        /// the element count times the element size overflows.
        requested_bytes: usize,
    },
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed {
                space,
                requested_bytes,
            } => {
                write!(
                    f,
                    "allocation of {requested_bytes} bytes failed in {space} memory"
                )
            }
        }
    }
}

impl Error for MemoryError {}

/// Errors from non-owning view operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// A view was asked to resize to or beyond its fixed capacity.
    ///
    /// A view cannot own memory, so growth past the backing range is
    /// structurally impossible; the view is left unchanged.
    CapacityExceeded {
        /// The requested logical size.
        requested: usize,
        /// The view's fixed capacity.
        capacity: usize,
    },
    /// A sub-range constructor received a malformed range.
    InvalidRange {
        /// Requested start of the range.
        start: usize,
        /// Requested end of the range.
        end: usize,
        /// Length of the backing slice.
        len: usize,
    },
    /// Element-wise assignment from a source of the wrong length.
    ///
    /// Rejected before any element is written; silent truncation or
    /// overrun is not permitted.
    SizeMismatch {
        /// The view's logical size.
        expected: usize,
        /// The source's length.
        actual: usize,
    },
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "view cannot resize to {requested}: capacity is fixed at {capacity}"
                )
            }
            Self::InvalidRange { start, end, len } => {
                write!(
                    f,
                    "invalid view range [{start}, {end}) over a slice of length {len}"
                )
            }
            Self::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "size mismatch: view holds {expected} elements, source has {actual}"
                )
            }
        }
    }
}

impl Error for ViewError {}
