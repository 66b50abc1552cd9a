//! Storage and allocator trait seams.
//!
//! These traits decouple containers from the storage backends that
//! hold their elements. A container never names a concrete backend;
//! it goes through [`SpaceAllocator`] for acquisition and release and
//! through [`Storage`] for element access.

use crate::element::Element;
use crate::error::MemoryError;

/// An owning handle to a contiguous run of constructed elements.
///
/// The handle owns the run for its entire lifetime: dropping the
/// storage (or passing it back through
/// [`SpaceAllocator::deallocate`]) releases it. Every element in the
/// run is constructed — there is no uninitialized tail.
pub trait Storage<T> {
    /// The full allocated extent, viewed as a slice.
    fn as_slice(&self) -> &[T];

    /// The full allocated extent, viewed as a mutable slice.
    fn as_mut_slice(&mut self) -> &mut [T];

    /// Number of elements in the allocated extent.
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Whether the allocated extent is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `Vec<T>` is the canonical host-visible storage: the allocated
/// extent is the vector's length (allocators produce exact-fit
/// vectors, so spare `Vec` capacity never exists).
impl<T> Storage<T> for Vec<T> {
    fn as_slice(&self) -> &[T] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

/// Allocation strategy for one memory space.
///
/// Implementations are zero-sized strategy types: containers hold one
/// by value and consult it for every acquisition and release, so a
/// buffer is always released through the allocator that produced it.
///
/// Allocation is fallible and must stay fallible: implementations
/// detect impossible requests (byte-size overflow, exhausted backing
/// store) and report [`MemoryError::AllocationFailed`] rather than
/// panicking.
pub trait SpaceAllocator<T: Element>: Default {
    /// The storage handle this allocator produces.
    type Storage: Storage<T>;

    /// Allocate storage for exactly `len` elements, each
    /// value-initialized to `T::default()`.
    ///
    /// Callers skip allocation entirely for zero-length requests;
    /// implementations may therefore assume `len > 0`.
    fn allocate(&self, len: usize) -> Result<Self::Storage, MemoryError>;

    /// Release storage previously produced by this allocator.
    ///
    /// The default implementation drops the handle, which is the
    /// release path for every built-in backend.
    fn deallocate(&self, storage: Self::Storage) {
        drop(storage);
    }
}
