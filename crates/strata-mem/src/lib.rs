//! Memory-space tags, allocators, and the resizable buffer primitive.
//!
//! This crate supplies the storage layer of the Strata workspace:
//!
//! - [`Host`] and [`Device`] — the two canonical memory-space tags,
//!   each bound at compile time to its allocation strategy
//!   ([`HostAllocator`] and [`DeviceAllocator`]).
//! - [`device`] — process-wide bookkeeping for the simulated device
//!   heap (block table, usage counters, leak queries).
//! - [`Buffer`] — the generic resizable buffer primitive that owning
//!   containers embed. It is parameterized over a
//!   [`SpaceAllocator`](strata_core::SpaceAllocator), so the same
//!   buffer code serves every memory space without a runtime branch.
//!
//! Backends can add further memory spaces by implementing
//! [`MemorySpace`](strata_core::MemorySpace) for their own tag type;
//! nothing in this crate needs to change.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod device;
pub mod host;
pub mod space;

pub use buffer::Buffer;
pub use device::{DeviceAllocator, DeviceBlockId, DeviceBuf, DeviceHeapStats};
pub use host::HostAllocator;
pub use space::{Device, Host};
