//! Bounds-checked, non-owning views over contiguous elements.
//!
//! [`Span`] and [`SpanMut`] wrap a borrowed slice and report any access past
//! the declared length as [`Error::IndexOutOfRange`] instead of panicking.

use core::ops::Range;

use bytemuck::Pod;

use crate::endian::{ByteOrder, Scalar};
use crate::error::{Error, Result};

/// Check that `start..start + len` lies within `0..total`.
///
/// A start past the end is reported as `start`; a range that starts inside
/// the view but runs past it is reported as `total`, the first index outside.
fn check_range(start: usize, len: usize, total: usize) -> Result<Range<usize>> {
    if start > total {
        return Err(Error::IndexOutOfRange { index: start, len: total });
    }
    match start.checked_add(len) {
        Some(end) if end <= total => Ok(start..end),
        _ => Err(Error::IndexOutOfRange { index: total, len: total }),
    }
}

/// A read-only view over a contiguous run of `T`.
#[derive(Debug, PartialEq, Eq)]
pub struct Span<'a, T> {
    data: &'a [T],
}

impl<T> Clone for Span<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Span<'_, T> {}

impl<'a, T> Span<'a, T> {
    /// Wrap a borrowed slice.
    pub fn new(data: &'a [T]) -> Self {
        Span { data }
    }

    /// Number of elements in the view.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the view has no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at `index`, or `IndexOutOfRange` if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&'a T> {
        self.data.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.data.len(),
        })
    }

    /// Sub-view of `len` elements starting at `start`.
    pub fn slice(&self, start: usize, len: usize) -> Result<Span<'a, T>> {
        let range = check_range(start, len, self.data.len())?;
        Ok(Span::new(&self.data[range]))
    }

    /// The underlying slice.
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Iterate the elements in order.
    pub fn iter(&self) -> core::slice::Iter<'a, T> {
        self.data.iter()
    }
}

impl<'a, T: Pod> Span<'a, T> {
    /// The raw bytes underlying this view, in native order.
    pub fn as_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.data)
    }
}

impl<'a> Span<'a, u8> {
    /// Decode an `S` in `order` from the bytes at `offset`.
    pub fn read<S: Scalar>(&self, offset: usize, order: ByteOrder) -> Result<S> {
        let range = check_range(offset, S::WIDTH, self.data.len())?;
        Ok(S::read(&self.data[range], order))
    }
}

impl<'a, T> From<&'a [T]> for Span<'a, T> {
    fn from(data: &'a [T]) -> Self {
        Span::new(data)
    }
}

impl<'a, T> IntoIterator for Span<'a, T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// A writable view over a contiguous run of `T`.
#[derive(Debug, PartialEq, Eq)]
pub struct SpanMut<'a, T> {
    data: &'a mut [T],
}

impl<'a, T> SpanMut<'a, T> {
    /// Wrap a mutably borrowed slice.
    pub fn new(data: &'a mut [T]) -> Self {
        SpanMut { data }
    }

    /// Number of elements in the view.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the view has no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at `index`, or `IndexOutOfRange` if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T> {
        let len = self.data.len();
        self.data.get(index).ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Mutable element at `index`, or `IndexOutOfRange` if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.data.len();
        self.data
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Writable sub-view of `len` elements starting at `start`.
    pub fn slice_mut(&mut self, start: usize, len: usize) -> Result<SpanMut<'_, T>> {
        let range = check_range(start, len, self.data.len())?;
        Ok(SpanMut::new(&mut self.data[range]))
    }

    /// Read-only view of the same elements.
    pub fn as_span(&self) -> Span<'_, T> {
        Span::new(&*self.data)
    }

    /// The underlying slice, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.data
    }
}

impl<'a, T: Default> SpanMut<'a, T> {
    /// Reset `len` elements starting at `start` to `T::default()`.
    pub fn clear_range(&mut self, start: usize, len: usize) -> Result<()> {
        let range = check_range(start, len, self.data.len())?;
        self.data[range].fill_with(T::default);
        Ok(())
    }

    /// Reset every element to `T::default()`.
    pub fn clear(&mut self) {
        self.data.fill_with(T::default);
    }
}

impl<'a> SpanMut<'a, u8> {
    /// Decode an `S` in `order` from the bytes at `offset`.
    pub fn read<S: Scalar>(&self, offset: usize, order: ByteOrder) -> Result<S> {
        self.as_span().read(offset, order)
    }

    /// Encode `val` in `order` at `offset`.
    pub fn write<S: Scalar>(&mut self, offset: usize, val: S, order: ByteOrder) -> Result<()> {
        let range = check_range(offset, S::WIDTH, self.data.len())?;
        val.write(&mut self.data[range], order);
        Ok(())
    }
}

impl<'a, T> From<&'a mut [T]> for SpanMut<'a, T> {
    fn from(data: &'a mut [T]) -> Self {
        SpanMut::new(data)
    }
}
