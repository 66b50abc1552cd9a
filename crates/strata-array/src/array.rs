//! The owning [`Array1d`] container.

use std::fmt;
use std::ops::{Index, IndexMut};

use strata_core::{Element, MemoryError, MemorySpace};
use strata_mem::{Buffer, Device, Host};

use crate::view::{ArrayView1d, ArrayView1dMut};

/// A resizable, contiguous 1D array in the memory space `M`.
///
/// The memory space is part of the type: `Array1d<f32, Host>` lives in
/// general host memory, `Array1d<f32, Device>` in device memory, and a
/// backend-defined tag selects its own allocator. The container's code
/// is identical for every space — the tag resolves to an allocation
/// strategy at compile time, and no operation branches on it at
/// runtime.
///
/// Elements produced by length-only constructors and by `resize` grows
/// are value-initialized to `T::default()`.
///
/// # Ownership
///
/// Each instance exclusively owns its buffer; there is no sharing and
/// no reference counting. Concurrent mutation of one instance must be
/// serialized by the caller. `Clone` is not implemented because
/// allocation is fallible — use [`try_clone`](Self::try_clone).
///
/// # Examples
///
/// ```
/// use strata_array::Array1d;
/// use strata_mem::{Device, Host};
///
/// # fn main() -> Result<(), strata_core::MemoryError> {
/// let host: Array1d<i32, Host> = Array1d::from_slice(&[1, 2, 3, 4, 5])?;
/// let device: Array1d<i32, Device> = Array1d::from_array(&host)?;
/// let back = device.to_host()?;
/// assert_eq!(host, back);
/// # Ok(())
/// # }
/// ```
pub struct Array1d<T: Element, M: MemorySpace = Host> {
    buf: Buffer<T, M::Allocator<T>>,
}

impl<T: Element, M: MemorySpace> Array1d<T, M> {
    /// An empty array. Performs no allocation.
    pub fn new() -> Self {
        Self { buf: Buffer::new() }
    }

    /// An array of `len` value-initialized elements.
    ///
    /// Allocates exactly `len` elements (`len == capacity`); a
    /// zero-length request performs no allocation.
    pub fn with_len(len: usize) -> Result<Self, MemoryError> {
        Ok(Self {
            buf: Buffer::with_len(len)?,
        })
    }

    /// An array of `len` elements, each set to `value`.
    pub fn from_elem(len: usize, value: T) -> Result<Self, MemoryError> {
        Ok(Self {
            buf: Buffer::with_elem(len, value)?,
        })
    }

    /// An array holding an element-wise copy of `src`.
    pub fn from_slice(src: &[T]) -> Result<Self, MemoryError> {
        Ok(Self {
            buf: Buffer::from_slice(src)?,
        })
    }

    /// An array collected from an iterator.
    ///
    /// The elements are staged in host memory first, then moved into
    /// this array's space in one transfer.
    pub fn from_iter<I>(iter: I) -> Result<Self, MemoryError>
    where
        I: IntoIterator<Item = T>,
    {
        let staged: Vec<T> = iter.into_iter().collect();
        Self::from_slice(&staged)
    }

    /// A converting copy of another array.
    ///
    /// The source may differ in element type (any `U` with
    /// `T: From<U>`), in memory space, or in both. When the spaces
    /// differ this is a cross-space transfer, staged through host
    /// memory and synchronous from the caller's point of view.
    pub fn from_array<U, M2>(src: &Array1d<U, M2>) -> Result<Self, MemoryError>
    where
        U: Element,
        M2: MemorySpace,
        T: From<U>,
    {
        let staged: Vec<T> = src.iter().cloned().map(T::from).collect();
        Self::from_slice(&staged)
    }

    /// A same-space, same-type copy.
    pub fn try_clone(&self) -> Result<Self, MemoryError> {
        Self::from_slice(self.as_slice())
    }

    /// Replace the contents with a converting copy of another array.
    ///
    /// Same source flexibility as [`from_array`](Self::from_array).
    /// Reallocates to exactly fit the source length; the previous
    /// buffer is released through the allocator, never leaked, and a
    /// failed allocation leaves this array untouched.
    pub fn assign<U, M2>(&mut self, src: &Array1d<U, M2>) -> Result<(), MemoryError>
    where
        U: Element,
        M2: MemorySpace,
        T: From<U>,
    {
        let staged: Vec<T> = src.iter().cloned().map(T::from).collect();
        self.buf.assign_slice(&staged)
    }

    /// Replace the contents with an element-wise copy of `src`.
    pub fn assign_slice(&mut self, src: &[T]) -> Result<(), MemoryError> {
        self.buf.assign_slice(src)
    }

    /// Replace the contents with elements collected from an iterator.
    ///
    /// The elements are staged in host memory first, then moved into
    /// this array's space in one transfer.
    pub fn assign_iter<I>(&mut self, iter: I) -> Result<(), MemoryError>
    where
        I: IntoIterator<Item = T>,
    {
        let staged: Vec<T> = iter.into_iter().collect();
        self.buf.assign_slice(&staged)
    }

    /// Copy this array into the memory space `M2`.
    pub fn to_space<M2: MemorySpace>(&self) -> Result<Array1d<T, M2>, MemoryError> {
        Array1d::from_array(self)
    }

    /// Copy this array into host memory.
    pub fn to_host(&self) -> Result<Array1d<T, Host>, MemoryError> {
        self.to_space()
    }

    /// Copy this array into device memory.
    pub fn to_device(&self) -> Result<Array1d<T, Device>, MemoryError> {
        self.to_space()
    }

    /// Current logical element count.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Allocated element count. Always `>= len()`.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// The memory space's diagnostic name (`"host"`, `"device"`, ...).
    pub fn space(&self) -> &'static str {
        M::NAME
    }

    /// Grow or shrink to `new_len`, preserving existing elements up to
    /// `min(old_len, new_len)`. Grown-in elements are
    /// value-initialized.
    pub fn resize(&mut self, new_len: usize) -> Result<(), MemoryError> {
        self.buf.resize(new_len)
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: T) {
        self.buf.fill(value);
    }

    /// The elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    /// The elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buf.as_mut_slice()
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate over the elements mutably.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// A non-owning view over the whole array.
    pub fn view(&self) -> ArrayView1d<'_, T> {
        ArrayView1d::new(self.as_slice())
    }

    /// A non-owning mutable view over the whole array.
    pub fn view_mut(&mut self) -> ArrayView1dMut<'_, T> {
        ArrayView1dMut::new(self.as_mut_slice())
    }
}

impl<T: Element, M: MemorySpace> Default for Array1d<T, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element, M: MemorySpace> Index<usize> for Array1d<T, M> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T: Element, M: MemorySpace> IndexMut<usize> for Array1d<T, M> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

/// Element-wise equality across any pair of memory spaces.
impl<T, M, M2> PartialEq<Array1d<T, M2>> for Array1d<T, M>
where
    T: Element + PartialEq,
    M: MemorySpace,
    M2: MemorySpace,
{
    fn eq(&self, other: &Array1d<T, M2>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Element + Eq, M: MemorySpace> Eq for Array1d<T, M> {}

impl<T: Element + fmt::Debug, M: MemorySpace> fmt::Debug for Array1d<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array1d")
            .field("space", &M::NAME)
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("data", &self.as_slice())
            .finish()
    }
}

impl<'a, T: Element, M: MemorySpace> IntoIterator for &'a Array1d<T, M> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: Element, M: MemorySpace> IntoIterator for &'a mut Array1d<T, M> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
