use std::collections::HashSet;
use std::hash::Hash;

pub trait Dedup<T> {
    fn dedup_merge(self) -> Vec<T>;
}

impl<T: Copy + Eq + Hash> Dedup<T> for Vec<Vec<T>> {
    fn dedup_merge(self) -> Vec<T> {
        let mut seen = HashSet::new();
        let mut merged = vec![];
        for sequence in self {
            for element in sequence {
                if seen.insert(element) {
                    merged.push(element);
                }
            }
        }
        merged
    }
}

#[cfg(test)]
mod dedup_merge {
    use super::*;

    #[test]
    fn overlapping() {
        let a = vec![1, 2, 3];
        let b = vec![3, 4];
        let merged = vec![a, b].dedup_merge();
        assert_eq!(merged, vec![1, 2, 3, 4]);
    }

    #[test]
    fn disjointed() {
        let a = vec![1, 2];
        let b = vec![5, 6];
        let merged = vec![a, b].dedup_merge();
        assert_eq!(merged, vec![1, 2, 5, 6]);
    }

    #[test]
    fn first_occurrence_order() {
        let a = vec![3, 1];
        let b = vec![2, 3, 1];
        let merged = vec![a, b].dedup_merge();
        assert_eq!(merged, vec![3, 1, 2]);
    }

    #[test]
    fn repeats_within_one_sequence() {
        let a = vec![7, 7, 8, 7];
        let merged = vec![a].dedup_merge();
        assert_eq!(merged, vec![7, 8]);
    }

    #[test]
    fn empty() {
        let sequences: Vec<Vec<u32>> = vec![];
        let merged = sequences.dedup_merge();
        assert_eq!(merged, Vec::<u32>::new());
    }

    #[test]
    fn idempotent() {
        let sequences = || vec![vec![5, 2, 2, 9], vec![9, 5, 1]];
        let once = sequences().dedup_merge();
        let twice = vec![sequences().dedup_merge()].dedup_merge();
        assert_eq!(once, twice);
    }
}
