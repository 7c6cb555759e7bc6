use std::fmt;

/// A sub-range `offset..offset + len` of the slice being sorted.
///
/// Runs own nothing, they only describe where the merge should look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    pub offset: usize,
    pub len: usize,
}

impl Run {
    #[inline]
    pub const fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// One past the last index of the run.
    ///
    /// `offset + len` must not overflow `usize`, use [`Run::checked_end`] for untrusted runs.
    #[inline]
    pub const fn end(&self) -> usize {
        self.offset + self.len
    }

    #[inline]
    pub const fn checked_end(&self) -> Option<usize> {
        self.offset.checked_add(self.len)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(offset: {}, len: {})", self.offset, self.len)
    }
}
