//! Strata: memory-space transparent 1D array containers.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Strata sub-crates. For most users, adding `strata` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strata::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Containers carry their memory space in the type. The same
//! // interface serves host and device arrays; copies between them
//! // are cross-space transfers.
//! let host: Array1d<f32, Host> = Array1d::from_slice(&[1.0, 2.0, 3.0])?;
//! let device: Array1d<f32, Device> = host.to_device()?;
//! let back = device.to_host()?;
//! assert_eq!(host, back);
//!
//! // Algorithms are written generically against the container
//! // surface, never branching on the space.
//! fn double<M: MemorySpace>(arr: &mut Array1d<f32, M>) {
//!     for v in arr.iter_mut() {
//!         *v *= 2.0;
//!     }
//! }
//! let mut device = device;
//! double(&mut device);
//! assert_eq!(device.to_host()?.as_slice(), &[2.0, 4.0, 6.0]);
//!
//! // Views expose the same surface over borrowed memory.
//! let mut backing = [1u32, 2, 3, 4, 5];
//! let mut window = make_view_mut(&mut backing[1..4]);
//! window.assign(&[20, 30, 40])?;
//! assert_eq!(backing, [1, 20, 30, 40, 5]);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strata-core` | Traits (`Element`, `Storage`, `SpaceAllocator`, `MemorySpace`) and error enums |
//! | [`mem`] | `strata-mem` | `Host`/`Device` tags, allocators, device-heap stats, the `Buffer` primitive |
//! | [`array`] | `strata-array` | `Array1d`, views, free view constructors |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core traits and error types (`strata-core`).
///
/// Contains the [`types::Element`] marker, the [`types::Storage`] and
/// [`types::SpaceAllocator`] seams, the [`types::MemorySpace`] tag
/// trait, and the shared error enums.
pub use strata_core as types;

/// Memory-space tags, allocators, and the buffer primitive
/// (`strata-mem`).
///
/// Provides [`mem::Host`], [`mem::Device`], their allocators, the
/// device-heap bookkeeping in [`mem::device`], and [`mem::Buffer`].
pub use strata_mem as mem;

/// Owning arrays and non-owning views (`strata-array`).
///
/// Provides [`array::Array1d`], [`array::ArrayView1d`],
/// [`array::ArrayView1dMut`], and the free view constructors.
pub use strata_array as array;

/// Common imports for typical Strata usage.
///
/// ```rust
/// use strata::prelude::*;
/// ```
///
/// This imports the container and view types, the two canonical
/// memory-space tags, the selection trait, and the error enums.
pub mod prelude {
    // Containers and views
    pub use strata_array::{make_view, make_view_mut, Array1d, ArrayView1d, ArrayView1dMut};

    // Memory spaces
    pub use strata_mem::{Device, Host};

    // Traits
    pub use strata_core::{Element, MemorySpace};

    // Errors
    pub use strata_core::{MemoryError, ViewError};
}
