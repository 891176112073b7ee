//! In-process sorting routines.

use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use vs_harness::{RoutineError, SortRoutine};

/// Textbook bubble sort: `n - 1` full passes, adjacent swaps.
pub fn bubble_sort(data: &mut [i32]) {
    let n = data.len();
    for pass in 0..n.saturating_sub(1) {
        for j in 0..n - 1 - pass {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
            }
        }
    }
}

/// Bubble sort that stops scanning past the last swap of the previous pass.
///
/// Produces exactly the same output as [`bubble_sort`] in fewer comparisons.
pub fn bubble_sort_fast(data: &mut [i32]) {
    let mut end = data.len();
    while end > 1 {
        let mut last_swap = 0;
        for j in 1..end {
            if data[j - 1] > data[j] {
                data.swap(j - 1, j);
                last_swap = j;
            }
        }
        end = last_swap;
    }
}

pub fn insertion_sort(data: &mut [i32]) {
    for i in 1..data.len() {
        let value = data[i];
        let mut j = i;
        while j > 0 && data[j - 1] > value {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = value;
    }
}

/// Routines compiled into this crate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Builtin {
    Bubble,
    BubbleFast,
    Insertion,
    /// `slice::sort_unstable`
    Std,
    /// Leaves the buffer untouched
    Identity,
}

impl Builtin {
    /// Every built-in routine name.
    pub fn names() -> Vec<&'static str> {
        Builtin::iter().map(<&'static str>::from).collect()
    }
}

impl SortRoutine for Builtin {
    fn sort(&self, data: &mut [i32]) -> Result<(), RoutineError> {
        match self {
            Builtin::Bubble => bubble_sort(data),
            Builtin::BubbleFast => bubble_sort_fast(data),
            Builtin::Insertion => insertion_sort(data),
            Builtin::Std => data.sort_unstable(),
            Builtin::Identity => {}
        }
        Ok(())
    }

    fn name(&self) -> &str {
        let name: &'static str = (*self).into();
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_names_cover_every_builtin() {
        assert_eq!(
            Builtin::names(),
            vec!["bubble", "bubble-fast", "insertion", "std", "identity"]
        );
    }

    #[test]
    fn test_edge_lengths() {
        for routine in Builtin::iter() {
            let mut empty: [i32; 0] = [];
            routine.sort(&mut empty).unwrap();

            let mut one = [42];
            routine.sort(&mut one).unwrap();
            assert_eq!(one, [42]);
        }
    }

    #[test]
    fn test_handles_extremes_and_duplicates() {
        let input = [i32::MAX, 0, i32::MIN, 5, 5, -1, i32::MAX];
        let expected = [i32::MIN, -1, 0, 5, 5, i32::MAX, i32::MAX];
        for routine in Builtin::iter().filter(|r| *r != Builtin::Identity) {
            let mut data = input;
            routine.sort(&mut data).unwrap();
            assert_eq!(data, expected, "{routine}");
        }
    }

    #[test]
    fn test_identity_leaves_input() {
        let mut data = [3, 1, 2];
        Builtin::Identity.sort(&mut data).unwrap();
        assert_eq!(data, [3, 1, 2]);
    }

    #[test]
    fn test_names() {
        assert_eq!(Builtin::BubbleFast.name(), "bubble-fast");
        assert_eq!(Builtin::Std.to_string(), "std");
        assert_eq!("insertion".parse::<Builtin>().unwrap(), Builtin::Insertion);
        assert!("quick".parse::<Builtin>().is_err());
    }

    proptest! {
        #[test]
        fn prop_sorting_routines_match_std(v in prop::collection::vec(any::<i32>(), 0..200)) {
            let mut expected = v.clone();
            expected.sort();
            for sort in [bubble_sort, bubble_sort_fast, insertion_sort] {
                let mut data = v.clone();
                sort(&mut data);
                prop_assert_eq!(&data, &expected);
            }
        }
    }
}
