use thiserror::Error;

use crate::run::Run;

/// Malformed input to [`crate::merge`]. Always detected before the slice is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("cannot merge zero-sized elements")]
    ZeroSizedElement,

    #[error("scratch of {scratch_len} slots is shorter than the slice of {len} elements")]
    ScratchTooShort { scratch_len: usize, len: usize },

    #[error("left run {run} extends beyond the slice of {len} elements")]
    LeftOutOfBounds { run: Run, len: usize },

    #[error("right run {run} extends beyond the slice of {len} elements")]
    RightOutOfBounds { run: Run, len: usize },

    #[error("runs are not consecutive: left {left} must end where right {right} begins")]
    NotContiguous { left: Run, right: Run },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    /// The merge cursors disagree with the number of placed elements. This is a bug in the merge
    /// itself, never the caller's fault.
    #[error(
        "merge point degraded: (i, j, merge_pt) = ({i}, {j}, {merge_pt}), (left, llen) = ({}, {})",
        .left.offset,
        .left.len
    )]
    InvariantViolation {
        i: usize,
        j: usize,
        merge_pt: usize,
        left: Run,
    },
}

impl MergeError {
    /// `true` if the error points at a logic defect rather than bad input.
    pub fn is_defect(&self) -> bool {
        matches!(self, MergeError::InvariantViolation { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("failed to allocate {requested_bytes} bytes of scratch space")]
    AllocationFailure { requested_bytes: usize },

    #[error("merge of left run {left} and right run {right} failed")]
    SortFailed {
        left: Run,
        right: Run,
        #[source]
        source: MergeError,
    },
}
