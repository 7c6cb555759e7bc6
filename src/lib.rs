//! Stable, in-place, bottom-up merge sort with a single whole-slice scratch buffer.
//!
//! ```ignore
//! let mut v = [5, 3, 1, 4, 2];
//! scratch_mergesort::sort(&mut v)?;
//! assert_eq!(v, [1, 2, 3, 4, 5]);
//! ```

use std::cmp::Ordering;

mod error;
mod merge;
mod pass;
mod run;
mod scratch;
mod sort;
mod trace;

pub use error::{InvalidArgument, MergeError, SortError};
pub use merge::merge;
pub use pass::Pass;
pub use run::Run;
pub use scratch::Scratch;
pub use sort::sort_by_traced;
pub use trace::{DebugTracer, NoopTracer, TraceEvent, Tracer};

/// Sort `v`.
#[inline]
pub fn sort<T>(v: &mut [T]) -> Result<(), SortError>
where
    T: Ord,
{
    sort_by_traced(v, T::cmp, &mut NoopTracer)
}

/// Sort `v` with a comparator `compare`.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_by_traced(v, compare, &mut NoopTracer)
}

/// Sort `v` with a key extraction function `f`.
#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], mut f: F) -> Result<(), SortError>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    sort_by_traced(v, |a, b| f(a).cmp(&f(b)), &mut NoopTracer)
}
