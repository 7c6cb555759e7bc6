use std::cmp::Ordering;
use std::mem;
use std::ptr;

use crate::error::{InvalidArgument, MergeError};
use crate::run::Run;
use crate::scratch::Scratch;

/// Merges the two adjacent sorted runs `left` and `right` of `v` into one sorted run occupying
/// `left.offset..right.end()`.
///
/// `scratch` must have at least `v.len()` slots, the region is staged at the same offsets it
/// occupies in `v`. On ties the element of `left` goes first, which makes the merge stable.
///
/// All arguments are validated before `v` is touched, so an `Err(MergeError::InvalidArgument(_))`
/// leaves `v` unchanged. If `compare` panics, or the merge detects a bookkeeping defect, the region
/// is restored from scratch before unwinding or returning, and `v` still holds every one of its
/// original elements exactly once.
pub fn merge<T, F>(
    v: &mut [T],
    scratch: &mut Scratch<T>,
    left: Run,
    right: Run,
    compare: &mut F,
) -> Result<(), MergeError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    validate::<T>(v.len(), scratch.len(), left, right)?;

    // Nothing to merge.
    if v.len() < 2 || left.is_empty() || right.is_empty() {
        return Ok(());
    }

    // SAFETY: `validate` established that both runs are in bounds of `v`, that they are
    // consecutive and that `scratch` covers every index of `v`. `T` is not zero-sized.
    unsafe { merge_runs(v, scratch.as_mut_ptr(), left, right, compare) }
}

fn validate<T>(
    len: usize,
    scratch_len: usize,
    left: Run,
    right: Run,
) -> Result<(), InvalidArgument> {
    if mem::size_of::<T>() == 0 {
        return Err(InvalidArgument::ZeroSizedElement);
    }

    if scratch_len < len {
        return Err(InvalidArgument::ScratchTooShort { scratch_len, len });
    }

    if left.checked_end().map_or(true, |end| end > len) {
        return Err(InvalidArgument::LeftOutOfBounds { run: left, len });
    }

    if right.checked_end().map_or(true, |end| end > len) {
        return Err(InvalidArgument::RightOutOfBounds { run: right, len });
    }

    if left.end() != right.offset {
        return Err(InvalidArgument::NotContiguous { left, right });
    }

    Ok(())
}

/// # Safety
///
/// `left` and `right` must be non-empty, consecutive and in bounds of `v`. `buf` must be valid for
/// writes of `v.len()` elements and must not overlap `v`. `T` must not be zero-sized.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
unsafe fn merge_runs<T, F>(
    v: &mut [T],
    buf: *mut T,
    left: Run,
    right: Run,
    compare: &mut F,
) -> Result<(), MergeError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let start = left.offset;
    let mid = right.offset;
    let end = right.end();
    let arr_ptr = v.as_mut_ptr();

    // Stage the whole region in scratch in one go. From here on the slots `start..end` of `v` are
    // holes, the staged copies are the elements. Comparisons only ever look at the staged copies,
    // so whatever `compare` does to them through interior mutability is preserved.
    //
    // Panic safety:
    //
    // If `compare` panics, `hole` gets dropped and refills the region from the staged copies.
    // That puts the region back into its pre-merge order and `v` again owns every element exactly
    // once.
    let hole = unsafe {
        ptr::copy_nonoverlapping(arr_ptr.add(start), buf.add(start), end - start);
        MergeHole {
            staged: buf.add(start),
            dest: arr_ptr.add(start),
            len: end - start,
        }
    };

    let mut i = start;
    let mut j = mid;
    let mut merge_pt = start;

    while i < mid && j < end {
        check_progress(i, j, merge_pt, left)?;

        // Consume the lesser side. If equal, prefer the left run to maintain stability.
        let src = unsafe {
            if compare(&*buf.add(i), &*buf.add(j)) != Ordering::Greater {
                i += 1;
                i - 1
            } else {
                j += 1;
                j - 1
            }
        };

        unsafe {
            ptr::copy_nonoverlapping(buf.add(src), arr_ptr.add(merge_pt), 1);
        }
        merge_pt += 1;
    }

    check_progress(i, j, merge_pt, left)?;

    // At most one of the runs has anything left, drain it as is.
    unsafe {
        ptr::copy_nonoverlapping(buf.add(i), arr_ptr.add(merge_pt), mid - i);
        merge_pt += mid - i;
        i = mid;

        ptr::copy_nonoverlapping(buf.add(j), arr_ptr.add(merge_pt), end - j);
        merge_pt += end - j;
        j = end;
    }

    check_progress(i, j, merge_pt, left)?;
    if merge_pt != end {
        return Err(MergeError::InvariantViolation {
            i,
            j,
            merge_pt,
            left,
        });
    }

    // Every hole has been filled.
    mem::forget(hole);

    Ok(())
}

/// Elements consumed from both runs must equal the elements placed.
#[inline(always)]
fn check_progress(i: usize, j: usize, merge_pt: usize, left: Run) -> Result<(), MergeError> {
    let consumed = (i - left.offset) + (j - left.end());
    let placed = merge_pt - left.offset;
    debug_assert!(
        consumed == placed,
        "merge point degraded: (i, j, merge_pt) = ({i}, {j}, {merge_pt}), (left, llen) = ({}, {})",
        left.offset,
        left.len
    );
    if consumed != placed {
        return Err(MergeError::InvariantViolation {
            i,
            j,
            merge_pt,
            left,
        });
    }

    Ok(())
}

// When dropped, copies the staged range back over `dest..dest + len`.
struct MergeHole<T> {
    staged: *const T,
    dest: *mut T,
    len: usize,
}

impl<T> Drop for MergeHole<T> {
    fn drop(&mut self) {
        // SAFETY: `T` is not a zero-sized type, `staged` and `dest` are the same region in scratch
        // and in the slice, and the staged copies are the authoritative elements.
        unsafe {
            ptr::copy_nonoverlapping(self.staged, self.dest, self.len);
        }
    }
}
