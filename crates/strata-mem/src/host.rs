//! The general-purpose host allocator.

use std::marker::PhantomData;

use strata_core::{Element, MemoryError, SpaceAllocator};

/// Allocation strategy for the host memory space.
///
/// Storage is an exact-fit `Vec<T>` with every element
/// value-initialized to `T::default()`. The strategy itself is
/// zero-sized; containers hold one by value at no cost.
pub struct HostAllocator<T> {
    _elem: PhantomData<T>,
}

impl<T> Default for HostAllocator<T> {
    fn default() -> Self {
        Self { _elem: PhantomData }
    }
}

impl<T: Element> SpaceAllocator<T> for HostAllocator<T> {
    type Storage = Vec<T>;

    fn allocate(&self, len: usize) -> Result<Vec<T>, MemoryError> {
        // Reject requests whose byte size cannot be represented before
        // asking the global allocator for anything.
        if len.checked_mul(std::mem::size_of::<T>()).is_none() {
            return Err(MemoryError::AllocationFailed {
                space: "host",
                requested_bytes: usize::MAX,
            });
        }
        Ok(vec![T::default(); len])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::Storage;

    #[test]
    fn allocate_is_exact_fit_and_value_initialized() {
        let alloc = HostAllocator::<u32>::default();
        let storage = alloc.allocate(16).unwrap();
        assert_eq!(Storage::len(&storage), 16);
        assert!(storage.as_slice().iter().all(|&v| v == 0));
    }

    #[test]
    fn overflowing_request_is_an_error_not_a_panic() {
        let alloc = HostAllocator::<u64>::default();
        let result = alloc.allocate(usize::MAX);
        assert!(matches!(
            result,
            Err(MemoryError::AllocationFailed { space: "host", .. })
        ));
    }

    #[test]
    fn allocator_is_zero_sized() {
        assert_eq!(std::mem::size_of::<HostAllocator<f64>>(), 0);
    }
}
