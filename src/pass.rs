use crate::run::Run;

/// The partition bookkeeping of one bottom-up pass over a slice of `len` elements.
///
/// The slice is viewed as `nparts` full runs of `run_len` elements followed by a tail of
/// `tail_len < run_len` elements. Full runs are merged pairwise. If one full run is left without a
/// partner it is merged with the tail, on every pass and not only the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pass {
    pub len: usize,
    pub run_len: usize,
    pub nparts: usize,
    pub pairs: usize,
    pub has_odd: bool,
    pub tail_len: usize,
}

impl Pass {
    /// Plans the pass with runs of `run_len` elements. `run_len` must be non-zero.
    pub(crate) fn plan(len: usize, run_len: usize) -> Self {
        assert!(run_len > 0, "run_len must be non-zero");

        let nparts = len / run_len;

        Self {
            len,
            run_len,
            nparts,
            pairs: nparts / 2,
            has_odd: nparts % 2 == 1,
            tail_len: len % run_len,
        }
    }

    /// All passes needed to sort `len` elements: run lengths 1, 2, 4, .. while below `len`.
    pub fn schedule(len: usize) -> impl Iterator<Item = Pass> {
        std::iter::successors(Some(1usize), |run_len| run_len.checked_mul(2))
            .take_while(move |run_len| *run_len < len)
            .map(move |run_len| Pass::plan(len, run_len))
    }

    /// The `(left, right)` run pairs merged by this pass, in order.
    ///
    /// The last pair is the unpaired full run against the tail if `has_odd`, the tail may be
    /// empty.
    pub fn merges(&self) -> impl Iterator<Item = (Run, Run)> {
        let n = self.run_len;

        let pairs = (0..self.pairs).map(move |i| {
            let left = Run::new(2 * i * n, n);
            (left, Run::new(left.end(), n))
        });

        let odd = self.has_odd.then(|| {
            let single = Run::new(2 * self.pairs * n, n);
            (single, Run::new(single.end(), self.tail_len))
        });

        pairs.chain(odd)
    }
}
