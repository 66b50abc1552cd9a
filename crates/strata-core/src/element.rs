//! The [`Element`] marker trait for storable value types.

/// Value types that can live inside Strata storage.
///
/// Storage produced by an allocator is always fully constructed:
/// `allocate(n)` yields `n` elements value-initialized to
/// `T::default()`. That policy is what the `Default` bound encodes —
/// there is no uninitialized-memory state anywhere in the library.
/// `Clone` covers element-wise copies (fills, assignments, cross-space
/// transfers), and `'static` keeps element types free of borrows so
/// containers can own their storage outright.
///
/// The trait is blanket-implemented; any `Clone + Default + 'static`
/// type is an element, including user-defined ones.
pub trait Element: Clone + Default + 'static {}

impl<T: Clone + Default + 'static> Element for T {}
