use core::fmt;
use core::mem;
use core::ops::{Index, IndexMut};
use core::ptr;
use core::slice;

use crate::iter::{Cursor, IntoIter, Iter, IterMut};
use crate::raw::{self, RawBuf};

/// A growable, contiguous vector that owns its storage
///
/// Capacity grows by doubling, starting from one slot, and only shrinks on
/// an explicit `shrink_to_fit()`.
pub struct GrowVec<T> {
    buf: RawBuf<T>,
    len: usize,
}

impl<T> GrowVec<T> {
    /// Creates an empty `GrowVec`. Nothing is allocated until the first append.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    /// Creates an empty `GrowVec` with exactly `capacity` slots.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: RawBuf::with_capacity(capacity),
            len: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Guarantees `capacity() >= required`, growing by the doubling policy.
    ///
    /// # Panics
    ///
    /// Panics if the capacity would overflow `usize`.
    pub fn ensure_capacity(&mut self, required: usize) {
        let target = raw::grown_capacity(self.buf.capacity(), required);
        if target != self.buf.capacity() {
            // SAFETY: the first `len` slots are live and `len <= capacity < target`
            unsafe { self.buf.reallocate(self.len, target) };
        }
    }

    /// Reserves room for at least `additional` more elements.
    ///
    /// # Panics
    ///
    /// Panics if the capacity would overflow `usize`.
    pub fn reserve(&mut self, additional: usize) {
        match self.len.checked_add(additional) {
            Some(required) => self.ensure_capacity(required),
            None => raw::capacity_overflow(),
        }
    }

    /// Appends an element to the end of the vector.
    pub fn push_back(&mut self, value: T) {
        self.emplace_with(|| value);
    }

    /// Appends an element built from `args` and returns a reference to it.
    ///
    /// ```
    /// # use growvec::GrowVec;
    /// let mut names: GrowVec<String> = GrowVec::new();
    /// names.emplace("first").push_str("!");
    /// assert_eq!(names[0], "first!");
    /// ```
    pub fn emplace<A>(&mut self, args: A) -> &mut T
    where
        A: Into<T>,
    {
        self.emplace_with(|| args.into())
    }

    /// Grows if needed, then constructs the element with `make` directly in
    /// the next free slot and returns a reference to it.
    pub fn emplace_with<F>(&mut self, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.reserve(1);
        let index = self.len;
        // SAFETY: `reserve(1)` guarantees the slot at `index` exists and is free
        unsafe {
            let slot = self.buf.as_mut_ptr().add(index);
            ptr::write(slot, make());
            self.len += 1;
            &mut *slot
        }
    }

    /// Removes and returns the last element.
    ///
    /// Returns `None` if the vector is empty. Capacity is not changed.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the slot was live and is no longer counted in `len`
        Some(unsafe { ptr::read(self.buf.as_ptr().add(self.len)) })
    }

    /// Drops every element. Capacity is not changed.
    pub fn clear(&mut self) {
        self.drop_tail(0);
    }

    /// Shrinks the vector to `new_len` elements, dropping the rest.
    ///
    /// Growing is not supported: a `new_len` at or above `len()` leaves the
    /// vector untouched. Capacity is not changed.
    pub fn resize(&mut self, new_len: usize) {
        self.drop_tail(new_len);
    }

    /// Reallocates the storage to exactly `len()` slots.
    pub fn shrink_to_fit(&mut self) {
        if self.buf.capacity() != self.len {
            // SAFETY: the first `len` slots are live
            unsafe { self.buf.reallocate(self.len, self.len) };
        }
    }

    fn drop_tail(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let tail_len = self.len - new_len;
        // Shorten first: a panicking destructor must not cause a double drop
        self.len = new_len;
        // SAFETY: the slots `[new_len, new_len + tail_len)` were live
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr().add(new_len), tail_len);
            ptr::drop_in_place(tail);
        }
    }

    /// Moves the contents out, leaving this vector empty with no storage.
    #[must_use]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the pointer is non-null and aligned, and `len` slots are live
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as for `as_slice`, with exclusive access through `&mut self`
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }

    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn at(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }

    /// Returns the element at `index` for modification.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }

    /// Returns `None` if the index is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Cursor at the first slot.
    #[must_use]
    pub fn begin(&self) -> Cursor {
        Cursor::at(0)
    }

    /// Cursor one past the last element.
    #[must_use]
    pub fn end(&self) -> Cursor {
        Cursor::at(self.len)
    }

    /// Returns the element under `cursor`, or `None` at or past the end.
    #[must_use]
    pub fn resolve(&self, cursor: Cursor) -> Option<&T> {
        self.get(cursor.index())
    }

    pub fn resolve_mut(&mut self, cursor: Cursor) -> Option<&mut T> {
        self.get_mut(cursor.index())
    }

    /// Returns an iterator over the elements.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_slice())
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.as_mut_slice())
    }

    /// Returns a reverse iterator over the elements.
    #[must_use]
    pub fn iter_rev(&self) -> core::iter::Rev<Iter<'_, T>> {
        self.iter().rev()
    }

    /// Hands the storage and element count over, leaving `self` empty.
    pub(crate) fn into_raw_parts(mut self) -> (RawBuf<T>, usize) {
        let len = mem::replace(&mut self.len, 0);
        let buf = mem::replace(&mut self.buf, RawBuf::new());
        (buf, len)
    }
}

impl<T> Drop for GrowVec<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for GrowVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowVec<T> {
    /// Deep copy into a fresh block of the same capacity.
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.capacity());
        for element in self {
            copy.push_back(element.clone());
        }
        copy
    }
}

impl<T> Index<usize> for GrowVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for GrowVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> AsRef<[T]> for GrowVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: PartialEq> PartialEq for GrowVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowVec<T> {}

impl<T: fmt::Debug> fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Every element followed by `"; "`.
impl<T: fmt::Display> fmt::Display for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in self {
            write!(f, "{element}; ")?;
        }
        Ok(())
    }
}

impl<T> Extend<T> for GrowVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push_back(element);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for GrowVec<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for element in iter {
            self.push_back(*element);
        }
    }
}

impl<T> FromIterator<T> for GrowVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<T, const N: usize> From<[T; N]> for GrowVec<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Clone> From<&[T]> for GrowVec<T> {
    fn from(elements: &[T]) -> Self {
        elements.iter().cloned().collect()
    }
}

impl<'a, T> IntoIterator for &'a GrowVec<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowVec<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for GrowVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (buf, len) = self.into_raw_parts();
        IntoIter::new(buf, len)
    }
}
