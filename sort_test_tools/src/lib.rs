use std::cmp::Ordering;
use std::fmt::Debug;

/// A sort under test. Sorts report failure through `Result`, the test suite treats any error as a
/// test failure.
pub trait Sort {
    type Error: Debug;

    fn name() -> String;

    fn sort<T>(arr: &mut [T]) -> Result<(), Self::Error>
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F) -> Result<(), Self::Error>
    where
        F: FnMut(&T, &T) -> Ordering;
}

pub mod patterns;
