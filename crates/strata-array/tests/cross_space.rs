//! Integration tests spanning containers, views, and memory spaces.

use strata_array::{make_view_mut, Array1d, ArrayView1d};
use strata_core::{Element, MemoryError, MemorySpace, SpaceAllocator};
use strata_mem::{device, Device, Host, HostAllocator};

#[test]
fn host_device_host_round_trip_is_lossless() {
    let data: Vec<f64> = (0..1000).map(|i| i as f64 * 0.25 - 17.0).collect();
    let host = Array1d::<f64, Host>::from_slice(&data).unwrap();

    let device = host.to_device().unwrap();
    assert_eq!(device.len(), data.len());

    let back = device.to_host().unwrap();
    assert_eq!(back.as_slice(), data.as_slice());
}

#[test]
fn device_arrays_allocate_through_the_device_heap() {
    let before = device::heap_stats();
    let mut arr = Array1d::<f32, Device>::with_len(256).unwrap();
    let after = device::heap_stats();
    assert!(after.total_allocations > before.total_allocations);
    assert!(after.total_allocated_bytes >= before.total_allocated_bytes + 256 * 4);

    // Assignment reallocates to exact fit through the same heap.
    arr.assign_slice(&[1.0; 512]).unwrap();
    assert_eq!(arr.len(), 512);
    assert_eq!(arr.capacity(), 512);
    assert!(device::heap_stats().total_allocations > after.total_allocations);
}

#[test]
fn generic_algorithms_never_name_the_space() {
    // The point of the tag system: one generic function serves every
    // memory space with no runtime dispatch.
    fn total<M: MemorySpace>(arr: &Array1d<u32, M>) -> u64 {
        arr.iter().map(|&v| u64::from(v)).sum()
    }

    let host = Array1d::<u32, Host>::from_slice(&[1, 2, 3, 4]).unwrap();
    let device = host.to_device().unwrap();
    assert_eq!(total(&host), 10);
    assert_eq!(total(&device), 10);
}

#[test]
fn views_work_over_container_buffers() {
    let mut arr = Array1d::<u32, Host>::from_slice(&[1, 2, 3, 4, 5]).unwrap();

    {
        let mut window = make_view_mut(&mut arr.as_mut_slice()[1..4]);
        assert_eq!(window.len(), 3);
        window.assign(&[20, 30, 40]).unwrap();
    }

    assert_eq!(arr.as_slice(), &[1, 20, 30, 40, 5]);

    let read = ArrayView1d::over(arr.as_slice(), 1, 4).unwrap();
    assert_eq!(read.as_slice(), &[20, 30, 40]);
}

// ── Custom memory spaces ────────────────────────────────────────

/// A backend-defined space: the tag supplies its own allocator, and
/// the container code picks it up without modification.
struct Scratch;

struct ScratchAllocator<T> {
    inner: HostAllocator<T>,
}

impl<T> Default for ScratchAllocator<T> {
    fn default() -> Self {
        Self {
            inner: HostAllocator::default(),
        }
    }
}

impl<T: Element> SpaceAllocator<T> for ScratchAllocator<T> {
    type Storage = Vec<T>;

    fn allocate(&self, len: usize) -> Result<Vec<T>, MemoryError> {
        self.inner.allocate(len)
    }
}

impl MemorySpace for Scratch {
    type Allocator<T: Element> = ScratchAllocator<T>;
    const NAME: &'static str = "scratch";
}

#[test]
fn custom_space_tags_plug_in_without_library_changes() {
    let scratch = Array1d::<u32, Scratch>::from_elem(3, 9).unwrap();
    assert_eq!(scratch.space(), "scratch");
    assert_eq!(scratch.as_slice(), &[9, 9, 9]);

    // Cross-space copies work against custom spaces too.
    let host: Array1d<u32, Host> = scratch.to_space().unwrap();
    assert_eq!(host, scratch);
}
