//! The device allocator and process-wide device-heap bookkeeping.
//!
//! Device memory is modelled as a distinct allocation domain with its
//! own block table: every [`DeviceBuf`] is registered under a unique
//! [`DeviceBlockId`] at allocation and unregistered when it is
//! released. The table makes device usage observable — live blocks,
//! bytes in use, peak usage — and lets tests assert that a specific
//! block was freed without being perturbed by allocations made
//! elsewhere in the process.
//!
//! The table is keyed by an insertion-ordered [`IndexMap`], so
//! diagnostics enumerate blocks in allocation order deterministically.

use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use indexmap::IndexMap;

use strata_core::{Element, MemoryError, SpaceAllocator, Storage};

/// Counter for unique [`DeviceBlockId`] allocation.
static BLOCK_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for one device-heap block.
///
/// Allocated from a monotonic atomic counter; an ID is never reused
/// within a process, so a freed block's ID stays dead forever. This
/// is what makes [`block_is_live`] a reliable leak probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeviceBlockId(u64);

impl DeviceBlockId {
    /// Allocate a fresh, unique block ID. Thread-safe.
    fn next() -> Self {
        Self(BLOCK_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for DeviceBlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-block bookkeeping entry.
#[derive(Clone, Copy, Debug)]
struct BlockInfo {
    bytes: usize,
}

/// Mutable state of the device heap.
struct HeapState {
    blocks: IndexMap<DeviceBlockId, BlockInfo>,
    bytes_in_use: usize,
    peak_bytes: usize,
    total_allocations: u64,
    total_allocated_bytes: u64,
}

static DEVICE_HEAP: LazyLock<Mutex<HeapState>> = LazyLock::new(|| {
    Mutex::new(HeapState {
        blocks: IndexMap::new(),
        bytes_in_use: 0,
        peak_bytes: 0,
        total_allocations: 0,
        total_allocated_bytes: 0,
    })
});

/// Lock the heap, recovering from poisoning.
///
/// Bookkeeping is plain arithmetic over POD fields, so state behind a
/// poisoned lock is still consistent.
fn lock_heap() -> MutexGuard<'static, HeapState> {
    DEVICE_HEAP.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A point-in-time snapshot of device-heap usage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceHeapStats {
    /// Number of blocks currently allocated.
    pub live_blocks: usize,
    /// Bytes currently allocated across all live blocks.
    pub bytes_in_use: usize,
    /// High-water mark of `bytes_in_use` over the process lifetime.
    pub peak_bytes: usize,
    /// Cumulative number of allocations ever made.
    pub total_allocations: u64,
    /// Cumulative bytes ever allocated.
    pub total_allocated_bytes: u64,
}

/// Snapshot the device heap's usage counters.
pub fn heap_stats() -> DeviceHeapStats {
    let heap = lock_heap();
    DeviceHeapStats {
        live_blocks: heap.blocks.len(),
        bytes_in_use: heap.bytes_in_use,
        peak_bytes: heap.peak_bytes,
        total_allocations: heap.total_allocations,
        total_allocated_bytes: heap.total_allocated_bytes,
    }
}

/// Whether the block with the given ID is currently allocated.
pub fn block_is_live(id: DeviceBlockId) -> bool {
    lock_heap().blocks.contains_key(&id)
}

/// Register a new block of `bytes` and return its ID.
fn register(bytes: usize) -> DeviceBlockId {
    let id = DeviceBlockId::next();
    let mut heap = lock_heap();
    heap.blocks.insert(id, BlockInfo { bytes });
    heap.bytes_in_use = heap.bytes_in_use.saturating_add(bytes);
    heap.peak_bytes = heap.peak_bytes.max(heap.bytes_in_use);
    heap.total_allocations += 1;
    heap.total_allocated_bytes = heap.total_allocated_bytes.saturating_add(bytes as u64);
    id
}

/// Unregister a block, returning its bytes to the heap.
fn release(id: DeviceBlockId) {
    let mut heap = lock_heap();
    if let Some(info) = heap.blocks.shift_remove(&id) {
        heap.bytes_in_use = heap.bytes_in_use.saturating_sub(info.bytes);
    }
}

/// An owning handle to one block of device memory.
///
/// Holds `len` constructed elements of `T`. The block stays
/// registered with the device heap for the handle's lifetime and is
/// unregistered on drop.
pub struct DeviceBuf<T> {
    data: Vec<T>,
    block: DeviceBlockId,
}

impl<T> DeviceBuf<T> {
    /// The heap block backing this storage.
    pub fn block_id(&self) -> DeviceBlockId {
        self.block
    }
}

impl<T> Storage<T> for DeviceBuf<T> {
    fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> Drop for DeviceBuf<T> {
    fn drop(&mut self) {
        release(self.block);
    }
}

impl<T: fmt::Debug> fmt::Debug for DeviceBuf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceBuf")
            .field("block", &self.block)
            .field("len", &self.data.len())
            .finish()
    }
}

/// Allocation strategy for the device memory space.
///
/// Every allocation goes through the device heap's block table;
/// releases are driven by [`DeviceBuf`]'s drop. The strategy itself
/// is zero-sized.
pub struct DeviceAllocator<T> {
    _elem: PhantomData<T>,
}

impl<T> Default for DeviceAllocator<T> {
    fn default() -> Self {
        Self { _elem: PhantomData }
    }
}

impl<T: Element> SpaceAllocator<T> for DeviceAllocator<T> {
    type Storage = DeviceBuf<T>;

    fn allocate(&self, len: usize) -> Result<DeviceBuf<T>, MemoryError> {
        let bytes = len
            .checked_mul(std::mem::size_of::<T>())
            .ok_or(MemoryError::AllocationFailed {
                space: "device",
                requested_bytes: usize::MAX,
            })?;
        let block = register(bytes);
        Ok(DeviceBuf {
            data: vec![T::default(); len],
            block,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Allocation and release ──────────────────────────────────

    #[test]
    fn allocate_registers_a_live_block() {
        let alloc = DeviceAllocator::<f32>::default();
        let buf = alloc.allocate(64).unwrap();
        assert!(block_is_live(buf.block_id()));
        assert_eq!(buf.as_slice().len(), 64);
        assert!(buf.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn drop_releases_the_block() {
        let alloc = DeviceAllocator::<f32>::default();
        let buf = alloc.allocate(64).unwrap();
        let id = buf.block_id();
        drop(buf);
        assert!(!block_is_live(id));
    }

    #[test]
    fn explicit_deallocate_releases_the_block() {
        let alloc = DeviceAllocator::<u8>::default();
        let buf = alloc.allocate(128).unwrap();
        let id = buf.block_id();
        alloc.deallocate(buf);
        assert!(!block_is_live(id));
    }

    #[test]
    fn block_ids_are_never_reused() {
        let alloc = DeviceAllocator::<u8>::default();
        let first = alloc.allocate(8).unwrap().block_id();
        let second = alloc.allocate(8).unwrap().block_id();
        assert!(second > first);
    }

    // ── Bookkeeping counters ────────────────────────────────────

    // Cumulative counters only: other tests allocate concurrently, so
    // assertions on bytes_in_use would race. Cumulative totals are
    // monotonic and safe to compare across a local allocation.

    #[test]
    fn cumulative_counters_grow_with_allocations() {
        let before = heap_stats();
        let alloc = DeviceAllocator::<u64>::default();
        let _buf = alloc.allocate(32).unwrap();
        let after = heap_stats();
        assert!(after.total_allocations > before.total_allocations);
        assert!(
            after.total_allocated_bytes >= before.total_allocated_bytes + 32 * 8,
            "expected at least 256 new bytes on the books"
        );
    }

    #[test]
    fn overflowing_request_is_an_error_not_a_panic() {
        let alloc = DeviceAllocator::<u64>::default();
        let result = alloc.allocate(usize::MAX);
        assert!(matches!(
            result,
            Err(MemoryError::AllocationFailed {
                space: "device",
                ..
            })
        ));
    }
}
