use ordered_tree::{Order, Tree, TreeError};

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and to a sorted `Vec`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes both hold the same values, duplicates included.
/// Returns how many deletions actually removed something.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, model: &mut Vec<i8>) -> usize {
    let mut deleted = 0;
    for op in ops {
        match op {
            Op::Insert(x) => {
                tree.insert(*x);
                let pos = model.partition_point(|y| y <= x);
                model.insert(pos, *x);
            }
            Op::Delete(x) => {
                let removed = tree.delete(x);
                match model.binary_search(x) {
                    Ok(pos) => {
                        model.remove(pos);
                        assert_eq!(removed, Some(*x));
                        deleted += 1;
                    }
                    Err(_) => assert_eq!(removed, None),
                }
            }
        }
    }

    deleted
}

/// Rebuilds `tree` by inserting its values in pre-order. Insertion routes a
/// value left when it is less than or equal to a node and right when greater,
/// so the rebuilt tree has the same shape exactly when every node of `tree`
/// already respects that ordering against all of its descendants.
fn keeps_ordering(tree: &Tree<i8>) -> bool {
    let mut pre_order = Vec::new();
    tree.pre_order(|x| pre_order.push(*x));
    let rebuilt: Tree<_> = pre_order.into_iter().collect();

    format!("{:?}", rebuilt) == format!("{:?}", tree)
}

fn in_order(tree: &Tree<i8>) -> Vec<i8> {
    let mut values = Vec::new();
    tree.in_order(|x| values.push(*x));
    values
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model);
    in_order(&tree) == model
}

#[quickcheck]
fn ordering_survives_operations(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model);
    keeps_ordering(&tree)
}

#[quickcheck]
fn ordering_survives_deleting_duplicates(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    // Folding into a small range forces plenty of duplicate successors.
    let mut tree: Tree<_> = xs.into_iter().map(|x| x % 8).collect();
    for x in &deletes {
        tree.delete(&(x % 8));
        if !keeps_ordering(&tree) {
            return false;
        }
    }

    true
}

#[test]
fn duplicate_successor_stays_left_of_promoted_copy() {
    let mut tree: Tree<_> = [10, 5, 20, 15, 15, 17].into_iter().collect();
    tree.delete(&10);

    assert_eq!(tree.render(Order::PreOrder), "15 5 15 20 17");
    assert!(keeps_ordering(&tree));
}

#[quickcheck]
fn size_tracks_inserts_and_deletes(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = Vec::new();

    let deleted = do_ops(&ops, &mut tree, &mut model);
    let inserted = ops.iter().filter(|op| matches!(op, Op::Insert(_))).count();
    tree.size() == inserted - deleted && tree.is_empty() == (tree.size() == 0)
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    for x in &deletes {
        tree.delete(x);
    }

    in_order(&tree).windows(2).all(|w| w[0] <= w[1])
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let mut still_present = xs;
    for delete in &deletes {
        tree.delete(delete);
        // Only one copy goes per delete.
        if let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    still_present.iter().all(|x| tree.contains(x)) && tree.size() == still_present.len()
}

#[quickcheck]
fn min_and_max(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    match (xs.iter().min(), xs.iter().max()) {
        (Some(min), Some(max)) => {
            tree.find_min() == Ok(min)
                && tree.find_min_recursive() == Ok(min)
                && tree.find_max() == Ok(max)
                && tree.find_max_recursive() == Ok(max)
        }
        _ => {
            tree.find_min() == Err(TreeError::EmptyTree)
                && tree.find_max() == Err(TreeError::EmptyTree)
        }
    }
}

#[quickcheck]
fn kth_largest_matches_sorted(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let mut descending = xs.clone();
    descending.sort_unstable_by(|a, b| b.cmp(a));

    descending
        .iter()
        .enumerate()
        .all(|(i, x)| tree.kth_largest(i + 1) == Ok(x))
        && tree.kth_largest(0) == Err(TreeError::RankOutOfRange { k: 0 })
        && tree.kth_largest(xs.len() + 1)
            == Err(TreeError::RankOutOfRange { k: xs.len() + 1 })
}

#[quickcheck]
fn pre_order_rebuilds_same_tree(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let mut pre_order = Vec::new();
    tree.pre_order(|x| pre_order.push(*x));

    // Reinserting in pre-order reproduces both the contents and the shape.
    let rebuilt: Tree<_> = pre_order.into_iter().collect();
    in_order(&rebuilt) == in_order(&tree) && format!("{:?}", rebuilt) == format!("{:?}", tree)
}

#[quickcheck]
fn max_depth_bounds(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let size = tree.size();
    let depth = tree.max_depth();

    // At least a perfectly balanced tree's height, at most a list's.
    let min_depth = (usize::BITS - size.leading_zeros()) as usize;
    min_depth <= depth && depth <= size
}

#[quickcheck]
fn dispose_is_idempotent(xs: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();

    tree.dispose() == xs.len() && tree.is_empty() && tree.dispose() == 0 && tree.is_empty()
}
