//! Memory-space tagged 1D arrays and non-owning views.
//!
//! The two halves of the container surface:
//!
//! - [`Array1d`] — an owning, resizable, contiguous sequence whose
//!   memory space is part of its type. `Array1d<f32, Host>` and
//!   `Array1d<f32, Device>` expose the same interface; construction
//!   and assignment between them perform cross-space transfers.
//! - [`ArrayView1d`] / [`ArrayView1dMut`] — non-owning lenses over a
//!   contiguous range owned elsewhere, with the same indexing, size,
//!   and iteration surface. A view's capacity is fixed at
//!   construction; it can never allocate.
//!
//! Generic code is expected to be written against this surface alone,
//! without inspecting the memory-space tag at runtime — the tag
//! resolves to an allocation strategy entirely at compile time.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod view;

pub use array::Array1d;
pub use view::{make_view, make_view_mut, ArrayView1d, ArrayView1dMut};
