//! The [`MemorySpace`] tag trait and compile-time allocator selection.

use crate::alloc::SpaceAllocator;
use crate::element::Element;

/// A compile-time memory-space tag.
///
/// A memory space is the addressable domain a buffer physically lives
/// in — general host memory, accelerator-local memory, or a
/// backend-defined domain. Tags are zero-sized types that exist only
/// as type parameters; they are never instantiated as runtime data,
/// and no container operation ever branches on them at runtime.
///
/// # Allocator selection
///
/// The [`Allocator`](Self::Allocator) associated type binds each tag
/// to its allocation strategy once per `<T, Space>` instantiation,
/// entirely at compile time:
///
/// - the canonical host tag selects the general-purpose host
///   allocator,
/// - the canonical device tag selects the device-heap allocator,
/// - any other tag implements `MemorySpace` itself and names its own
///   allocator — backends extend the library without touching this
///   trait.
///
/// Exactly one binding can exist per tag (trait coherence), so the
/// selection is unambiguous and monomorphizes to direct calls with no
/// dispatch overhead.
///
/// # Examples
///
/// A backend-defined space that reuses an existing allocator:
///
/// ```
/// use strata_core::{Element, MemorySpace, SpaceAllocator};
///
/// struct Pinned;
///
/// impl MemorySpace for Pinned {
///     type Allocator<T: Element> = MyPinnedAllocator<T>;
///     const NAME: &'static str = "pinned";
/// }
/// # use std::marker::PhantomData;
/// # struct MyPinnedAllocator<T>(PhantomData<T>);
/// # impl<T> Default for MyPinnedAllocator<T> {
/// #     fn default() -> Self { Self(PhantomData) }
/// # }
/// # impl<T: Element> SpaceAllocator<T> for MyPinnedAllocator<T> {
/// #     type Storage = Vec<T>;
/// #     fn allocate(&self, len: usize) -> Result<Vec<T>, strata_core::MemoryError> {
/// #         Ok(vec![T::default(); len])
/// #     }
/// # }
/// ```
pub trait MemorySpace: 'static {
    /// The allocation strategy bound to this space for elements of
    /// type `T`.
    type Allocator<T: Element>: SpaceAllocator<T>;

    /// Human-readable space name, used in diagnostics and errors.
    const NAME: &'static str;
}
