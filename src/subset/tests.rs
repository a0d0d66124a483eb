use super::*;
use crate::error::SolverError;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

const EXAMPLE: [i64; 6] = [3, 34, 4, 12, 5, 2];

fn included_sum(items: &[i64], path: &[bool]) -> i64 {
    items.iter().zip(path).filter(|(_, taken)| **taken).map(|(&item, _)| item).sum()
}

fn included(items: &[i64], path: &[bool]) -> Vec<i64> {
    items.iter().zip(path).filter(|(_, taken)| **taken).map(|(&item, _)| item).collect()
}

#[test]
fn test_example_instance() {
    assert!(is_subset_sum(&EXAMPLE, 9));
    assert!(has_subset_sum(&EXAMPLE, 9).unwrap());
    assert!(is_subset_sum_rec(&EXAMPLE, 9).unwrap());

    let tree = subset_sum(&EXAMPLE, 9).unwrap();
    let subsets: Vec<Vec<i64>> = find_subsets(&tree).iter().map(|p| included(&EXAMPLE, p)).collect();
    assert!(subsets.contains(&vec![4, 5]));
    assert!(subsets.contains(&vec![3, 4, 2]));
    assert_eq!(subsets.len(), 2);

    assert!(!is_subset_sum(&EXAMPLE, 30));
    assert!(!has_subset_sum(&EXAMPLE, 30).unwrap());
}

#[test]
fn test_tree_shape() {
    let tree = subset_sum(&[5, 7], 7).unwrap();
    assert_eq!(tree.node_count(), 7);

    let root = tree.root();
    assert_eq!(root.index(), 0);
    assert_eq!(root.current_sum(), 0);
    assert!(!root.satisfied());

    let include = root.include_child().unwrap();
    let exclude = root.exclude_child().unwrap();
    assert_eq!((include.index(), include.current_sum()), (1, 5));
    assert_eq!((exclude.index(), exclude.current_sum()), (1, 0));

    let leaf = exclude.include_child().unwrap();
    assert_eq!((leaf.index(), leaf.current_sum()), (2, 7));
    assert!(leaf.satisfied());
    assert!(leaf.is_leaf());
    assert!(leaf.include_child().is_none());
    assert!(leaf.exclude_child().is_none());

    assert_eq!(find_subsets(&tree), vec![vec![false, true]]);
}

#[test]
fn test_paths_are_include_first_and_full_length() {
    let items = [1, 1, 1];
    let tree = subset_sum(&items, 2).unwrap();
    let paths = find_subsets(&tree);
    assert_eq!(
        paths,
        vec![
            vec![true, true, false],
            vec![true, false, true],
            vec![false, true, true],
        ]
    );
}

#[test]
fn test_zero_target_is_trivial() {
    assert!(is_subset_sum(&[], 0));
    assert!(is_subset_sum(&[4, 6], 0));
    assert!(is_subset_sum_rec(&[], 0).unwrap());
    assert!(has_subset_sum(&[], 0).unwrap());

    let tree = subset_sum(&[], 0).unwrap();
    assert_eq!(find_subsets(&tree), vec![Vec::<bool>::new()]);
    assert!(tree.root().satisfied());

    let tree = subset_sum(&[4, 6], 0).unwrap();
    assert_eq!(find_subsets(&tree), vec![vec![false, false]]);
}

#[test]
fn test_empty_input_with_positive_target() {
    assert!(!is_subset_sum(&[], 3));
    assert!(!is_subset_sum_rec(&[], 3).unwrap());
    assert!(!has_subset_sum(&[], 3).unwrap());
    assert!(find_subsets(&subset_sum(&[], 3).unwrap()).is_empty());
}

#[test]
fn test_negative_numbers() {
    // Branching handles them without pruning.
    assert!(is_subset_sum(&[5, -3, 2], 2));
    let tree = subset_sum(&[5, -3, 2], 2).unwrap();
    let paths = find_subsets(&tree);
    assert_eq!(paths, vec![vec![true, true, false], vec![false, false, true]]);

    // Table and recursion refuse them.
    assert!(matches!(
        subset_sum_table(&[5, -3, 2], 2),
        Err(SolverError::InvalidArgument(_))
    ));
    assert!(matches!(
        subset_sum_table(&[5, 3], -1),
        Err(SolverError::InvalidArgument(_))
    ));
    assert!(is_subset_sum_rec(&[1], -1).is_err());
}

#[test]
fn test_tree_depth_limit() {
    let items = vec![1i64; MAX_TREE_DEPTH + 1];
    assert!(matches!(subset_sum(&items, 3), Err(SolverError::InvalidArgument(_))));
}

#[test]
fn test_table_invariants() {
    let table = subset_sum_table(&EXAMPLE, 9).unwrap();
    assert_eq!(table.rows(), EXAMPLE.len() + 1);
    assert_eq!(table.cols(), 10);
    for i in 0..table.rows() {
        assert!(table.reachable(i, 0));
    }
    for j in 1..table.cols() {
        assert!(!table.reachable(0, j));
    }
    // Reachability never shrinks as more numbers are allowed.
    for i in 1..table.rows() {
        for j in 0..table.cols() {
            assert!(!table.reachable(i - 1, j) || table.reachable(i, j));
        }
    }
}

#[test]
fn test_table_reconstruction() {
    let table = subset_sum_table(&EXAMPLE, 9).unwrap();
    let witness = subset_from_table(&EXAMPLE, &table).unwrap();
    assert_eq!(witness.iter().sum::<i64>(), 9);
    assert_eq!(witness, vec![4, 5]);

    let table = subset_sum_table(&EXAMPLE, 30).unwrap();
    assert_eq!(subset_from_table(&EXAMPLE, &table), None);

    let table = subset_sum_table(&EXAMPLE, 0).unwrap();
    assert_eq!(subset_from_table(&EXAMPLE, &table), Some(vec![]));

    // Mismatched items.
    let table = subset_sum_table(&EXAMPLE, 9).unwrap();
    assert_eq!(subset_from_table(&[4, 5], &table), None);
}

#[test]
fn test_reconstruction_rejects_foreign_items() {
    let table = subset_sum_table(&EXAMPLE, 9).unwrap();
    assert_eq!(subset_from_table(&[100; 6], &table), None);
    assert_eq!(subset_from_table(&[3, 34, 4, 12, -5, 2], &table), None);
    assert_eq!(subset_from_table(&[3, 34, 4, 12, 1, 2], &table), None);
}

#[test]
fn test_table_refuses_huge_targets() {
    assert!(matches!(
        subset_sum_table(&[1, 2], 1 << 27),
        Err(SolverError::TableTooLarge { .. })
    ));
    assert!(matches!(has_subset_sum(&[1], i64::MAX), Err(SolverError::TableTooLarge { .. })));
}

#[test]
fn test_reconstruction_with_zeros_and_repeats() {
    let items = [0, 2, 2, 0, 3];
    let table = subset_sum_table(&items, 7).unwrap();
    let witness = subset_from_table(&items, &table).unwrap();
    assert_eq!(witness, vec![2, 2, 3]);
}

#[test]
fn test_solvers_agree_on_random_inputs() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
    for _ in 0..300 {
        let n = rng.random_range(0..=10);
        let items: Vec<i64> = (0..n).map(|_| rng.random_range(0..=20)).collect();
        let target = rng.random_range(0..=60);

        let branching = is_subset_sum(&items, target);
        let recursive = is_subset_sum_rec(&items, target).unwrap();
        let table = subset_sum_table(&items, target).unwrap();
        let tree = subset_sum(&items, target).unwrap();
        let paths = find_subsets(&tree);

        assert_eq!(branching, table.answer(), "items {:?} target {}", items, target);
        assert_eq!(recursive, table.answer());
        assert_eq!(!paths.is_empty(), table.answer());
        assert_eq!(tree.any_satisfied(), table.answer());

        for path in &paths {
            assert_eq!(path.len(), items.len());
            assert_eq!(included_sum(&items, path), target);
        }

        match subset_from_table(&items, &table) {
            Some(witness) => {
                assert!(table.answer());
                assert_eq!(witness.iter().sum::<i64>(), target);
            }
            None => assert!(!table.answer()),
        }
    }
}
