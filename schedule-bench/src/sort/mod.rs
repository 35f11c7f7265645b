//! Comparison sorts under benchmark.
//!
//! Every sort takes the ordering as an `is_less` function. The other
//! relations the algorithms need are derived from it: `a > b` is
//! `is_less(b, a)` and `a <= b` is `!is_less(b, a)`.

mod insertion;
mod merge;
mod quick;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

pub use insertion::{insertion_sort, insertion_sort_by};
pub use merge::{merge_sort, merge_sort_by};
pub use quick::{quick_sort, quick_sort_by};

/// A sorting algorithm that can be timed by the harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Algorithm {
    /// `slice::sort_unstable_by`, the baseline.
    #[serde(rename = "std_unstable")]
    StdUnstable,
    /// `slice::sort_by`.
    #[serde(rename = "std_stable")]
    StdStable,
    #[serde(rename = "insertion_sort")]
    Insertion,
    #[serde(rename = "quick_sort")]
    Quick,
    #[serde(rename = "merge_sort")]
    Merge,
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort algorithm: {0}")]
pub struct UnknownAlgorithm(pub String);

impl Algorithm {
    /// All algorithms, in report order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::StdUnstable,
        Algorithm::StdStable,
        Algorithm::Insertion,
        Algorithm::Quick,
        Algorithm::Merge,
    ];

    /// Label used in reports and output file names.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::StdUnstable => "std_unstable",
            Algorithm::StdStable => "std_stable",
            Algorithm::Insertion => "insertion_sort",
            Algorithm::Quick => "quick_sort",
            Algorithm::Merge => "merge_sort",
        }
    }

    /// Whether equal elements keep their input order.
    pub fn is_stable(self) -> bool {
        match self {
            Algorithm::StdStable | Algorithm::Insertion | Algorithm::Merge => true,
            Algorithm::StdUnstable | Algorithm::Quick => false,
        }
    }

    /// Sorts `v` in place with this algorithm.
    pub fn sort_by<T, F>(self, v: &mut [T], mut is_less: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        match self {
            Algorithm::StdUnstable => v.sort_unstable_by(|a, b| compare(a, b, &mut is_less)),
            Algorithm::StdStable => v.sort_by(|a, b| compare(a, b, &mut is_less)),
            Algorithm::Insertion => insertion_sort_by(v, is_less),
            Algorithm::Quick => quick_sort_by(v, is_less),
            Algorithm::Merge => merge_sort_by(v, is_less),
        }
    }

    /// Sorts `v` in place by its `Ord` implementation.
    pub fn sort<T: Ord + Clone>(self, v: &mut [T]) {
        self.sort_by(v, |a: &T, b: &T| a.lt(b));
    }
}

/// Builds a three-way comparison out of `is_less` for the library sorts.
fn compare<T, F>(a: &T, b: &T, is_less: &mut F) -> std::cmp::Ordering
where
    F: FnMut(&T, &T) -> bool,
{
    if is_less(a, b) {
        std::cmp::Ordering::Less
    } else if is_less(b, a) {
        std::cmp::Ordering::Greater
    } else {
        std::cmp::Ordering::Equal
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|alg| alg.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

/// Whether `v` is in non-decreasing order under `is_less`.
pub fn is_sorted_by<T, F>(v: &[T], mut is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    v.windows(2).all(|w| !is_less(&w[1], &w[0]))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::ScheduleRecord;
    use proptest::prelude::*;

    fn arb_record() -> impl Strategy<Value = ScheduleRecord> {
        (
            0..5i32,
            prop::sample::select(vec!["2024-01-01", "2024-01-02", "2024-03-15"]),
            "[a-z]{1,6}",
            prop::sample::select(vec!["06:10", "09:00", "18:45"]),
            0..5i32,
        )
            .prop_map(|(n, d, ty, t, m)| ScheduleRecord::new(n, d, ty, t, m))
    }

    fn arb_records() -> impl Strategy<Value = Vec<ScheduleRecord>> {
        prop::collection::vec(arb_record(), 0..80)
    }

    /// Records drawn from a handful of ordering keys, so most have equal
    /// twins. The train type carries the input position.
    fn arb_tied_groups() -> impl Strategy<Value = Vec<ScheduleRecord>> {
        prop::collection::vec((0..3i32, 0..2i32), 0..60).prop_map(|keys| {
            keys.into_iter()
                .enumerate()
                .map(|(pos, (n, m))| {
                    ScheduleRecord::new(n, "2024-01-01", format!("{pos:03}"), "09:00", m)
                })
                .collect()
        })
    }

    /// Multiset equality including train type.
    fn same_elements(a: &[ScheduleRecord], b: &[ScheduleRecord]) -> bool {
        let key = |r: &ScheduleRecord| r.to_csv_line();
        let mut a: Vec<String> = a.iter().map(key).collect();
        let mut b: Vec<String> = b.iter().map(key).collect();
        a.sort();
        b.sort();
        a == b
    }

    proptest! {
        /// Output is a sorted permutation of the input
        #[test]
        fn sorted_permutation(input in arb_records()) {
            for alg in Algorithm::ALL {
                let mut v = input.clone();
                alg.sort(&mut v);
                prop_assert!(is_sorted_by(&v, |a, b| a < b), "{} not sorted", alg);
                prop_assert!(v.windows(2).all(|w| w[0] <= w[1]));
                prop_assert!(same_elements(&input, &v), "{} lost elements", alg);
            }
        }

        /// Sorting sorted data again changes nothing
        #[test]
        fn idempotent(input in arb_records()) {
            for alg in Algorithm::ALL {
                let mut once = input.clone();
                alg.sort(&mut once);
                let mut twice = once.clone();
                alg.sort(&mut twice);
                prop_assert_eq!(&once, &twice, "{}", alg);
                // Unstable sorts may still swap equal records.
                if alg.is_stable() {
                    let once_lines: Vec<String> = once.iter().map(|r| r.to_csv_line()).collect();
                    let twice_lines: Vec<String> = twice.iter().map(|r| r.to_csv_line()).collect();
                    prop_assert_eq!(once_lines, twice_lines, "{}", alg);
                }
            }
        }

        /// Stable sorts keep equal records in input order
        #[test]
        fn stable_sorts_preserve_input_order(input in arb_tied_groups()) {
            for alg in Algorithm::ALL.into_iter().filter(|a| a.is_stable()) {
                let mut v = input.clone();
                alg.sort(&mut v);
                for w in v.windows(2) {
                    if w[0] == w[1] {
                        prop_assert!(w[0].train_type < w[1].train_type, "{} reordered ties", alg);
                    }
                }
            }
        }

        /// All sorts agree with the library sort, ignoring train type
        #[test]
        fn agrees_with_library_sort(input in arb_records()) {
            let mut expected = input.clone();
            expected.sort();
            for alg in Algorithm::ALL {
                let mut v = input.clone();
                alg.sort(&mut v);
                prop_assert_eq!(&v, &expected, "{}", alg);
            }
        }

        /// Plain integers with many duplicates
        #[test]
        fn integers(input in prop::collection::vec(-20..20i32, 0..200)) {
            let mut expected = input.clone();
            expected.sort();
            for alg in Algorithm::ALL {
                let mut v = input.clone();
                alg.sort(&mut v);
                prop_assert_eq!(&v, &expected, "{}", alg);
            }
        }
    }
}
