use alloc::alloc::{alloc, dealloc, handle_alloc_error, Layout};
use core::marker::PhantomData;
use core::mem;
use core::ptr::{self, NonNull};

/// Owning handle to a block of `cap` element slots.
///
/// `RawBuf` never reads, writes or drops elements. The owner decides which
/// prefix of the block is live and must drop it before the block goes away.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

// SAFETY: `RawBuf` owns its block exclusively, like `Box<[T]>`
unsafe impl<T: Send> Send for RawBuf<T> {}
// SAFETY: shared access never mutates the block
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates a block of exactly `cap` slots.
    pub(crate) fn with_capacity(cap: usize) -> Self {
        Self {
            ptr: Self::allocate(cap),
            cap,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub(crate) fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    fn layout(cap: usize) -> Layout {
        match Layout::array::<T>(cap) {
            Ok(layout) => layout,
            Err(_) => capacity_overflow(),
        }
    }

    fn allocate(cap: usize) -> NonNull<T> {
        if Self::IS_ZST || cap == 0 {
            return NonNull::dangling();
        }
        let layout = Self::layout(cap);
        // SAFETY: `T` is not zero-sized and `cap > 0`, so the layout is non-empty
        let raw = unsafe { alloc(layout) };
        match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => ptr,
            None => handle_alloc_error(layout),
        }
    }

    fn release(&mut self) {
        if !Self::IS_ZST && self.cap > 0 {
            // SAFETY: `ptr` came from `allocate(self.cap)`, which used this layout
            unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), Self::layout(self.cap)) };
        }
        self.ptr = NonNull::dangling();
        self.cap = 0;
    }

    /// Moves the first `len` elements into a fresh block of exactly `new_cap`
    /// slots, in index order, and frees the old block.
    ///
    /// A `new_cap` of zero leaves the handle without any block.
    ///
    /// # Safety
    ///
    /// The first `len` slots must hold live elements, and `len <= new_cap`.
    pub(crate) unsafe fn reallocate(&mut self, len: usize, new_cap: usize) {
        debug_assert!(len <= new_cap && len <= self.cap);
        log::debug!(
            "reallocating {} -> {} slots, moving {} elements",
            self.cap,
            new_cap,
            len
        );

        let new_ptr = Self::allocate(new_cap);
        if len > 0 {
            // SAFETY: both blocks hold at least `len` slots and never overlap
            unsafe { ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), len) };
        }
        self.release();
        self.ptr = new_ptr;
        self.cap = new_cap;
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Growth policy: the smallest capacity reachable from `current` by doubling
/// (starting from 1 when `current` is 0) that holds `required` slots.
///
/// Returns `current` unchanged when it already suffices.
pub(crate) fn grown_capacity(current: usize, required: usize) -> usize {
    if required <= current {
        return current;
    }
    let mut cap = if current == 0 { 1 } else { current };
    while cap < required {
        cap = match cap.checked_mul(2) {
            Some(doubled) => doubled,
            None => capacity_overflow(),
        };
    }
    cap
}

#[cold]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}
