//! The canonical memory-space tags.
//!
//! [`Host`] and [`Device`] are zero-sized compile-time markers: they
//! carry no data, have no behavior, and exist only as type parameters
//! that select an allocation strategy through
//! [`MemorySpace::Allocator`]. Additional spaces are defined by
//! implementing [`MemorySpace`] for a new tag type — see the trait
//! docs in `strata-core`.

use crate::device::DeviceAllocator;
use crate::host::HostAllocator;
use strata_core::{Element, MemorySpace};

/// The host memory space: general-purpose addressable memory.
///
/// Containers tagged with `Host` allocate through
/// [`HostAllocator`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Host;

impl MemorySpace for Host {
    type Allocator<T: Element> = HostAllocator<T>;
    const NAME: &'static str = "host";
}

/// The device memory space: accelerator-local addressable memory.
///
/// Containers tagged with `Device` allocate through
/// [`DeviceAllocator`], which registers every block with the
/// process-wide device heap (see [`crate::device`]). Copies between
/// `Device`- and `Host`-tagged containers are cross-space transfers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Device;

impl MemorySpace for Device {
    type Allocator<T: Element> = DeviceAllocator<T>;
    const NAME: &'static str = "device";
}
