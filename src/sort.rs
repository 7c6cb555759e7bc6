use std::cmp::Ordering;
use std::mem;

use crate::error::SortError;
use crate::merge::merge;
use crate::pass::Pass;
use crate::scratch::Scratch;
use crate::trace::{TraceEvent, Tracer};

/// Bottom-up merge sort of `v`, reporting progress to `tracer`.
///
/// Runs of length 1, 2, 4, .. are merged pairwise until a single run spans the slice. A single
/// scratch buffer of `v.len()` slots is allocated up front and reused by every merge, it is
/// released on all exit paths.
///
/// On error the order of `v` is unspecified, but it still holds exactly its original elements.
#[tracing::instrument(level = "debug", skip_all, fields(len = v.len()))]
pub fn sort_by_traced<T, F, R>(v: &mut [T], mut compare: F, tracer: &mut R) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
    R: Tracer<T> + ?Sized,
{
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return Ok(());
    }

    let mut scratch = Scratch::try_with_len(v.len()).map_err(|err| {
        tracing::error!(%err, "scratch allocation failed");
        err
    })?;

    for pass in Pass::schedule(v.len()) {
        tracing::trace!(
            n = pass.run_len,
            nparts = pass.nparts,
            pairs = pass.pairs,
            has_odd = pass.has_odd,
            tail_len = pass.tail_len,
            "pass"
        );
        tracer.trace(&TraceEvent::Pass(pass), v);

        for (left, right) in pass.merges() {
            tracer.trace(&TraceEvent::BeforeMerge { left, right }, v);

            merge(v, &mut scratch, left, right, &mut compare).map_err(|source| {
                tracing::error!(%left, %right, %source, "merge failed");
                SortError::SortFailed {
                    left,
                    right,
                    source,
                }
            })?;

            tracer.trace(&TraceEvent::AfterMerge { left, right }, v);
        }
    }

    Ok(())
}
