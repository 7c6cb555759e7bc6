//! Seeded `i32` input patterns for testing and benchmarking sorts.
//!
//! Callers transform the values into other types as needed. The seed is chosen once per
//! process and reported by the test harness, set `OVERRIDE_SEED=<u64>` to reproduce a failure.

use std::cmp::Reverse;
use std::env;
use std::ops::Range;
use std::sync::Mutex;

use rand::distributions::Uniform;
use rand::prelude::*;

use zipf::ZipfDistribution;

/// Uniformly distributed over the whole `i32` domain.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = seeded_rng();
    (0..len).map(|_| rng.gen()).collect()
}

/// Uniformly distributed over `range`, use a narrow range for many duplicates.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    let dist: Uniform<i32> = range.into();
    seeded_rng().sample_iter(dist).take(len).collect()
}

/// Zipf distributed ranks in `1..=len`, a few values dominate.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let dist = ZipfDistribution::new(len, exponent).unwrap();
    seeded_rng()
        .sample_iter(dist)
        .take(len)
        .map(|rank| rank as i32)
        .collect()
}

/// A sorted prefix covering `sorted_percent` of the values, followed by random values.
pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    let mut v = random(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;
    v[..sorted_len.min(len)].sort_unstable();
    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// `saw_count` ascending runs of equal length.
pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    saws(len, saw_count, |_| Direction::Ascending)
}

/// `saw_count` descending runs of equal length.
pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    saws(len, saw_count, |_| Direction::Descending)
}

/// `saw_count` runs of equal length, each randomly ascending or descending.
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    let mut rng = seeded_rng();
    saws(len, saw_count, move |_| Direction::pick(&mut rng))
}

/// Randomly ascending or descending runs, each with a length drawn from `range`.
pub fn saw_mixed_range(len: usize, range: Range<usize>) -> Vec<i32> {
    let mut vals = random(len);
    let mut rng = seeded_rng();
    let min_len = range.start.max(1);
    let run_lens = Uniform::from(min_len..range.end.max(min_len + 1));

    let mut start = 0;
    while start < len {
        let end = (start + rng.sample(run_lens)).min(len);
        Direction::pick(&mut rng).apply(&mut vals[start..end]);
        start = end;
    }

    vals
}

/// Ascending first half, descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut vals = random(len);
    let (first_half, second_half) = vals.split_at_mut(len / 2);
    Direction::Ascending.apply(first_half);
    Direction::Descending.apply(second_half);
    vals
}

/// Makes every subsequent pattern call draw fresh values.
///
/// By default `patterns::random(4)` yields the same values for the whole process, benchmarks
/// should call this once up front.
pub fn use_random_seed_each_time() {
    let mut seed = SEED.lock().unwrap();
    if let Some(Seed::Override(_)) = *seed {
        panic!("use_random_seed_each_time conflicts with OVERRIDE_SEED");
    }

    *seed = Some(Seed::EachTime);
}

/// The seed the next pattern will be generated from.
pub fn random_init_seed() -> u64 {
    let mut seed = SEED.lock().unwrap();
    match *seed.get_or_insert_with(Seed::from_env) {
        Seed::EachTime => thread_rng().gen(),
        Seed::PerProcess(val) | Seed::Override(val) => val,
    }
}

#[derive(Copy, Clone)]
enum Seed {
    EachTime,
    PerProcess(u64),
    Override(u64),
}

impl Seed {
    fn from_env() -> Self {
        match env::var("OVERRIDE_SEED") {
            Ok(val) => Seed::Override(val.parse().expect("OVERRIDE_SEED must be a u64")),
            Err(_) => Seed::PerProcess(thread_rng().gen()),
        }
    }
}

static SEED: Mutex<Option<Seed>> = Mutex::new(None);

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

#[derive(Copy, Clone)]
enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    fn pick(rng: &mut impl Rng) -> Self {
        if rng.gen() {
            Direction::Ascending
        } else {
            Direction::Descending
        }
    }

    fn apply(self, chunk: &mut [i32]) {
        match self {
            Direction::Ascending => chunk.sort_unstable(),
            Direction::Descending => chunk.sort_unstable_by_key(|&e| Reverse(e)),
        }
    }
}

fn saws(len: usize, saw_count: usize, mut direction: impl FnMut(usize) -> Direction) -> Vec<i32> {
    let mut vals = random(len);
    if len == 0 {
        return vals;
    }

    let chunk_len = (len / saw_count.max(1)).max(1);
    for (i, chunk) in vals.chunks_mut(chunk_len).enumerate() {
        direction(i).apply(chunk);
    }

    vals
}
