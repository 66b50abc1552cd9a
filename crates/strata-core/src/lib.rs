//! Core traits and error types for the Strata container library.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Strata workspace:
//! the [`Element`] marker trait, the [`Storage`] and [`SpaceAllocator`]
//! seams that storage backends implement, the [`MemorySpace`] tag trait
//! that selects an allocator at compile time, and the shared error
//! enums.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod alloc;
pub mod element;
pub mod error;
pub mod space;

pub use alloc::{SpaceAllocator, Storage};
pub use element::Element;
pub use error::{MemoryError, ViewError};
pub use space::MemorySpace;
