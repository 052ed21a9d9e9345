use core::iter::FusedIterator;
use core::mem;
use core::ptr;

use crate::raw::RawBuf;

/// Iterator over the elements of a `GrowVec`
///
/// This iterator implements `Clone`.
pub struct Iter<'a, T> {
    elements: &'a [T],
    front: usize,
    back: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(elements: &'a [T]) -> Self {
        Self {
            elements,
            front: 0,
            back: elements.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let result = self.elements.get(self.front);
            self.front += 1;
            result
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            self.elements.get(self.back)
        } else {
            None
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over mutable references to the elements of a `GrowVec`
pub struct IterMut<'a, T> {
    elements: &'a mut [T],
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(elements: &'a mut [T]) -> Self {
        Self { elements }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let (first, rest) = mem::take(&mut self.elements).split_first_mut()?;
        self.elements = rest;
        Some(first)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.elements.len(), Some(self.elements.len()))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (last, rest) = mem::take(&mut self.elements).split_last_mut()?;
        self.elements = rest;
        Some(last)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator that moves elements out of a `GrowVec`
///
/// Elements not yet yielded are dropped together with the iterator.
pub struct IntoIter<T> {
    buf: RawBuf<T>,
    front: usize,
    back: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(buf: RawBuf<T>, len: usize) -> Self {
        Self {
            buf,
            front: 0,
            back: len,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        // SAFETY: slots `[front, back)` are live and each is read exactly once
        let element = unsafe { ptr::read(self.buf.as_ptr().add(self.front)) };
        self.front += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: as in `next`
        Some(unsafe { ptr::read(self.buf.as_ptr().add(self.back)) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = self.back - self.front;
        self.back = self.front;
        // SAFETY: the unread slots are still live; the block is freed by `RawBuf`
        unsafe {
            let rest = ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr().add(self.front), remaining);
            ptr::drop_in_place(rest);
        }
    }
}

/// Bidirectional position inside a `GrowVec`
///
/// A cursor is a plain slot index and is resolved against the vector on every
/// access with `GrowVec::resolve`, so it stays meaningful across
/// reallocations. Positions range over `[0, len]`, where `len` is the
/// one-past-the-end sentinel returned by `GrowVec::end`.
///
/// Moving is not bounds-checked: stepping below zero wraps around, and a
/// cursor outside `[0, len)` simply resolves to `None`.
///
/// ```
/// # use growvec::GrowVec;
/// let vec = GrowVec::from([10, 20, 30]);
/// let mut cursor = vec.begin();
/// let mut seen = Vec::new();
/// while cursor != vec.end() {
///     seen.push(*vec.resolve(cursor.post_forward()).unwrap());
/// }
/// assert_eq!(seen, [10, 20, 30]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cursor {
    index: usize,
}

impl Cursor {
    #[must_use]
    pub const fn at(index: usize) -> Self {
        Self { index }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    /// Moves one slot forward and returns the moved cursor.
    pub fn forward(&mut self) -> Self {
        self.index = self.index.wrapping_add(1);
        *self
    }

    /// Moves one slot backward and returns the moved cursor.
    pub fn backward(&mut self) -> Self {
        self.index = self.index.wrapping_sub(1);
        *self
    }

    /// Moves one slot forward and returns the position before the move.
    pub fn post_forward(&mut self) -> Self {
        let before = *self;
        self.forward();
        before
    }

    /// Moves one slot backward and returns the position before the move.
    pub fn post_backward(&mut self) -> Self {
        let before = *self;
        self.backward();
        before
    }
}
