use std::mem::{self, MaybeUninit};

use crate::error::SortError;

/// Working space for [`crate::merge`], one slot per element of the slice being sorted.
///
/// Slots are never dropped. Between merges every slot is a moved-from hole, during a merge the
/// slots of the region being merged hold the only authoritative copy of its elements.
pub struct Scratch<T> {
    buf: Vec<MaybeUninit<T>>,
}

impl<T> Scratch<T> {
    /// Allocate scratch space for a slice of `len` elements.
    ///
    /// The reservation is fallible, so a request the allocator can't serve is reported as
    /// [`SortError::AllocationFailure`] instead of aborting the process.
    pub fn try_with_len(len: usize) -> Result<Self, SortError> {
        let mut buf: Vec<MaybeUninit<T>> = Vec::new();
        buf.try_reserve_exact(len)
            .map_err(|_| SortError::AllocationFailure {
                requested_bytes: len.saturating_mul(mem::size_of::<T>()),
            })?;

        // SAFETY: The capacity was reserved above and `MaybeUninit<T>` requires no
        // initialization.
        unsafe {
            buf.set_len(len);
        }

        Ok(Self { buf })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr().cast::<T>()
    }
}
