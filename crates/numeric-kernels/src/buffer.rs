// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Non-owning buffer views that every kernel operates through.

use crate::{DType, Element, KernelError};

/// A mutable, fixed-length view over a caller-owned region of `T`.
///
/// `Buffer` never allocates and never resizes. The caller keeps ownership
/// of the memory; the borrow checker ties the view to that region's
/// lifetime.
///
/// # Examples
/// ```
/// use numeric_kernels::Buffer;
/// let mut data = [1i32, 2, 3];
/// let mut buf = Buffer::new(&mut data);
/// buf.set(0, 10).unwrap();
/// assert_eq!(buf.get(0).unwrap(), 10);
/// assert!(buf.get(3).is_err());
/// ```
#[derive(Debug)]
pub struct Buffer<'a, T: Element> {
    data: &'a mut [T],
}

impl<'a, T: Element> Buffer<'a, T> {
    /// Wraps an entire slice.
    pub fn new(data: &'a mut [T]) -> Self {
        Self { data }
    }

    /// Wraps the first `len` elements of `region`.
    ///
    /// # Errors
    /// Returns [`KernelError::OutOfBounds`] if `len` exceeds the region.
    pub fn from_parts(region: &'a mut [T], len: usize) -> Result<Self, KernelError> {
        if len > region.len() {
            return Err(KernelError::OutOfBounds {
                index: len,
                len: region.len(),
            });
        }
        Ok(Self {
            data: &mut region[..len],
        })
    }

    /// Returns the number of elements in the view.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the view holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the element type.
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// Reads element `index`.
    pub fn get(&self, index: usize) -> Result<T, KernelError> {
        self.data.get(index).copied().ok_or(KernelError::OutOfBounds {
            index,
            len: self.data.len(),
        })
    }

    /// Writes element `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), KernelError> {
        let len = self.data.len();
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(KernelError::OutOfBounds { index, len }),
        }
    }

    /// Reads element `index` without a bounds check.
    ///
    /// # Safety
    /// `index` must be less than [`len`](Self::len).
    pub unsafe fn get_unchecked(&self, index: usize) -> T {
        // SAFETY: upheld by the caller.
        unsafe { *self.data.get_unchecked(index) }
    }

    /// Writes element `index` without a bounds check.
    ///
    /// # Safety
    /// `index` must be less than [`len`](Self::len).
    pub unsafe fn set_unchecked(&mut self, index: usize, value: T) {
        // SAFETY: upheld by the caller.
        unsafe { *self.data.get_unchecked_mut(index) = value }
    }

    /// Returns a read-only view over the same elements.
    pub fn view(&self) -> BufferView<'_, T> {
        BufferView { data: &*self.data }
    }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &*self.data
    }

    /// Returns the elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.data
    }
}

impl<'a, T: Element> From<&'a mut [T]> for Buffer<'a, T> {
    fn from(data: &'a mut [T]) -> Self {
        Self::new(data)
    }
}

impl<'a, T: Element, const N: usize> From<&'a mut [T; N]> for Buffer<'a, T> {
    fn from(data: &'a mut [T; N]) -> Self {
        Self::new(data.as_mut_slice())
    }
}

/// A read-only, fixed-length view over a caller-owned region of `T`.
#[derive(Debug, Clone, Copy)]
pub struct BufferView<'a, T: Element> {
    data: &'a [T],
}

impl<'a, T: Element> BufferView<'a, T> {
    /// Wraps an entire slice.
    pub fn new(data: &'a [T]) -> Self {
        Self { data }
    }

    /// Wraps the first `len` elements of `region`.
    ///
    /// # Errors
    /// Returns [`KernelError::OutOfBounds`] if `len` exceeds the region.
    pub fn from_parts(region: &'a [T], len: usize) -> Result<Self, KernelError> {
        if len > region.len() {
            return Err(KernelError::OutOfBounds {
                index: len,
                len: region.len(),
            });
        }
        Ok(Self {
            data: &region[..len],
        })
    }

    /// Returns the number of elements in the view.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the view holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the element type.
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// Reads element `index`.
    pub fn get(&self, index: usize) -> Result<T, KernelError> {
        self.data.get(index).copied().ok_or(KernelError::OutOfBounds {
            index,
            len: self.data.len(),
        })
    }

    /// Reads element `index` without a bounds check.
    ///
    /// # Safety
    /// `index` must be less than [`len`](Self::len).
    pub unsafe fn get_unchecked(&self, index: usize) -> T {
        // SAFETY: upheld by the caller.
        unsafe { *self.data.get_unchecked(index) }
    }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }
}

impl<'a, T: Element> From<&'a [T]> for BufferView<'a, T> {
    fn from(data: &'a [T]) -> Self {
        Self::new(data)
    }
}

impl<'a, T: Element, const N: usize> From<&'a [T; N]> for BufferView<'a, T> {
    fn from(data: &'a [T; N]) -> Self {
        Self::new(data.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_shorter_region() {
        let mut data = [1.0f32, 2.0, 3.0, 4.0];
        let buf = Buffer::from_parts(&mut data, 2).unwrap();
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.as_slice(), &[1.0, 2.0]);
        assert_eq!(buf.dtype(), DType::F32);
    }

    #[test]
    fn test_from_parts_too_long() {
        let mut data = [0i32; 3];
        let err = Buffer::from_parts(&mut data, 4).unwrap_err();
        assert_eq!(err, KernelError::OutOfBounds { index: 4, len: 3 });

        let view = BufferView::from_parts(&[0i32; 3], 5);
        assert!(view.is_err());
    }

    #[test]
    fn test_checked_access() {
        let mut data = [0i32; 2];
        let mut buf = Buffer::new(&mut data);
        buf.set(1, 7).unwrap();
        assert_eq!(buf.get(1).unwrap(), 7);
        assert_eq!(
            buf.set(2, 1).unwrap_err(),
            KernelError::OutOfBounds { index: 2, len: 2 }
        );
        assert!(buf.get(2).is_err());
        assert_eq!(data, [0, 7]);
    }

    #[test]
    fn test_unchecked_access() {
        let mut data = [1.5f32, 2.5];
        let mut buf = Buffer::new(&mut data);
        unsafe {
            buf.set_unchecked(0, 9.0);
            assert_eq!(buf.get_unchecked(0), 9.0);
            assert_eq!(buf.view().get_unchecked(1), 2.5);
        }
    }

    #[test]
    fn test_view_borrows_buffer() {
        let mut data = [3i32, 4];
        let buf = Buffer::new(&mut data);
        let v = buf.view();
        assert_eq!(v.len(), 2);
        assert_eq!(v.get(1).unwrap(), 4);
        assert!(!v.is_empty());
    }

    #[test]
    fn test_empty_buffer() {
        let mut data: [f32; 0] = [];
        let buf = Buffer::new(&mut data);
        assert!(buf.is_empty());
        assert!(buf.get(0).is_err());
    }
}
