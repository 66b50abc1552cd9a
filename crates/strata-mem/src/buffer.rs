//! The generic resizable buffer primitive.
//!
//! [`Buffer`] owns one run of storage obtained from a
//! [`SpaceAllocator`] and tracks the logical length in use. It is the
//! piece owning containers embed (composition, not inheritance): the
//! container decides *what* to store, the buffer decides *how* storage
//! is acquired, grown, and released, and the allocator decides
//! *where* it lives.

use std::fmt;

use strata_core::{Element, MemoryError, SpaceAllocator, Storage};

/// A resizable, contiguous run of elements in one memory space.
///
/// Invariants:
///
/// - `0 <= len <= capacity`, where `capacity` is the allocated extent;
/// - every element in `[0, len)` is constructed (value-initialized or
///   explicitly written);
/// - the storage is exclusively owned and is released through the
///   allocator that produced it, on drop or on reallocation.
///
/// Reallocation policy: operations that cannot fit in the current
/// allocation allocate **exactly** the required length, then release
/// the old storage. The new allocation must succeed before the old
/// buffer is touched, so a failed operation leaves the buffer intact.
pub struct Buffer<T: Element, A: SpaceAllocator<T>> {
    alloc: A,
    storage: Option<A::Storage>,
    len: usize,
}

impl<T: Element, A: SpaceAllocator<T>> Buffer<T, A> {
    /// An empty buffer. Performs no allocation.
    pub fn new() -> Self {
        Self {
            alloc: A::default(),
            storage: None,
            len: 0,
        }
    }

    /// A buffer of `len` value-initialized elements,
    /// `len == capacity`.
    ///
    /// Zero-length buffers perform no allocation.
    pub fn with_len(len: usize) -> Result<Self, MemoryError> {
        let mut buf = Self::new();
        if len > 0 {
            buf.storage = Some(buf.alloc.allocate(len)?);
            buf.len = len;
        }
        Ok(buf)
    }

    /// A buffer of `len` elements, each set to `value`.
    pub fn with_elem(len: usize, value: T) -> Result<Self, MemoryError> {
        let mut buf = Self::with_len(len)?;
        buf.fill(value);
        Ok(buf)
    }

    /// A buffer holding an element-wise copy of `src`.
    pub fn from_slice(src: &[T]) -> Result<Self, MemoryError> {
        let mut buf = Self::with_len(src.len())?;
        buf.as_mut_slice().clone_from_slice(src);
        Ok(buf)
    }

    /// Current logical element count.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the logical length is zero.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocated element count. Always `>= len()`.
    pub fn capacity(&self) -> usize {
        self.storage.as_ref().map_or(0, Storage::len)
    }

    /// The in-use prefix `[0, len)` as a slice.
    pub fn as_slice(&self) -> &[T] {
        match &self.storage {
            Some(storage) => &storage.as_slice()[..self.len],
            None => &[],
        }
    }

    /// The in-use prefix `[0, len)` as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match &mut self.storage {
            Some(storage) => &mut storage.as_mut_slice()[..self.len],
            None => &mut [],
        }
    }

    /// Set every in-use element to `value`.
    pub fn fill(&mut self, value: T) {
        self.as_mut_slice().fill(value);
    }

    /// Grow or shrink to `new_len`, preserving the surviving prefix.
    ///
    /// Within the current capacity this only adjusts the logical
    /// length; a grow re-initializes the newly exposed suffix to
    /// `T::default()`, so previously shrunk-away data never leaks
    /// back. Beyond capacity, reallocates to exactly `new_len`.
    pub fn resize(&mut self, new_len: usize) -> Result<(), MemoryError> {
        if new_len <= self.capacity() {
            if new_len > self.len {
                if let Some(storage) = &mut self.storage {
                    storage.as_mut_slice()[self.len..new_len].fill(T::default());
                }
            }
            self.len = new_len;
            return Ok(());
        }

        let mut fresh = self.alloc.allocate(new_len)?;
        fresh.as_mut_slice()[..self.len].clone_from_slice(self.as_slice());
        let old = self.storage.replace(fresh);
        self.len = new_len;
        if let Some(old) = old {
            self.alloc.deallocate(old);
        }
        Ok(())
    }

    /// Replace the contents with an element-wise copy of `src`.
    ///
    /// Reallocates to exactly `src.len()` unless the current capacity
    /// already matches it; the previous storage is always released
    /// through the allocator, never leaked.
    pub fn assign_slice(&mut self, src: &[T]) -> Result<(), MemoryError> {
        if src.len() == self.capacity() {
            self.len = src.len();
            self.as_mut_slice().clone_from_slice(src);
            return Ok(());
        }

        let fresh = if src.is_empty() {
            None
        } else {
            let mut fresh = self.alloc.allocate(src.len())?;
            fresh.as_mut_slice().clone_from_slice(src);
            Some(fresh)
        };
        let old = std::mem::replace(&mut self.storage, fresh);
        self.len = src.len();
        if let Some(old) = old {
            self.alloc.deallocate(old);
        }
        Ok(())
    }
}

impl<T: Element, A: SpaceAllocator<T>> Default for Buffer<T, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element, A: SpaceAllocator<T>> Drop for Buffer<T, A> {
    fn drop(&mut self) {
        if let Some(storage) = self.storage.take() {
            self.alloc.deallocate(storage);
        }
    }
}

impl<T: Element + fmt::Debug, A: SpaceAllocator<T>> fmt::Debug for Buffer<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .finish()
    }
}
