use log::{debug, trace};

use crate::error::{Result, SolverError};

/// Deepest decision tree that will be materialized.
pub const MAX_TREE_DEPTH: usize = 22;

/// Full include/exclude decision tree over a list of numbers.
///
/// Nodes live in a flat arena in heap order: the root is slot 0, the include
/// child of slot `p` is `2p + 1` and its exclude child `2p + 2`. Depth and
/// the decision path are implied by the slot, so only the running sums are
/// stored.
#[derive(Clone, Debug)]
pub struct SubsetTree {
    items: Vec<i64>,
    target: i64,
    sums: Vec<i64>,
}

/// Borrowed view of one node of a `SubsetTree`.
#[derive(Copy, Clone, Debug)]
pub struct TreeNode<'a> {
    tree: &'a SubsetTree,
    position: usize,
}

impl<'a> TreeNode<'a> {
    /// Number of decisions taken so far (0 at the root, `n` at the leaves).
    pub fn index(&self) -> usize {
        (usize::BITS - 1 - (self.position + 1).leading_zeros()) as usize
    }

    pub fn current_sum(&self) -> i64 {
        self.tree.sums[self.position]
    }

    pub fn satisfied(&self) -> bool {
        self.current_sum() == self.tree.target
    }

    pub fn is_leaf(&self) -> bool {
        self.index() == self.tree.depth()
    }

    pub fn include_child(&self) -> Option<TreeNode<'a>> {
        self.child(2 * self.position + 1)
    }

    pub fn exclude_child(&self) -> Option<TreeNode<'a>> {
        self.child(2 * self.position + 2)
    }

    fn child(&self, position: usize) -> Option<TreeNode<'a>> {
        (!self.is_leaf()).then_some(TreeNode {
            tree: self.tree,
            position,
        })
    }
}

impl SubsetTree {
    pub fn root(&self) -> TreeNode<'_> {
        TreeNode {
            tree: self,
            position: 0,
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn items(&self) -> &[i64] {
        &self.items
    }

    pub fn depth(&self) -> usize {
        self.items.len()
    }

    pub fn node_count(&self) -> usize {
        self.sums.len()
    }

    /// True if any node, at any depth, hits the target.
    pub fn any_satisfied(&self) -> bool {
        self.sums.iter().any(|&sum| sum == self.target)
    }
}

/// Builds the complete decision tree of depth `items.len()`.
pub fn subset_sum(items: &[i64], target: i64) -> Result<SubsetTree> {
    let n = items.len();
    if n > MAX_TREE_DEPTH {
        return Err(SolverError::invalid_argument(format!(
            "decision tree depth {} exceeds {}",
            n, MAX_TREE_DEPTH
        )));
    }

    let node_count = (1usize << (n + 1)) - 1;
    let mut sums = vec![0i64; node_count];

    for (depth, &item) in items.iter().enumerate() {
        let level_start = (1usize << depth) - 1;
        let level_end = (1usize << (depth + 1)) - 1;
        for p in level_start..level_end {
            sums[2 * p + 1] = sums[p] + item;
            sums[2 * p + 2] = sums[p];
        }
    }

    debug!("subset_sum: built decision tree with {} nodes", node_count);

    Ok(SubsetTree {
        items: items.to_vec(),
        target,
        sums,
    })
}

/// Collects every root-to-leaf inclusion path whose leaf hits the target.
///
/// The whole tree is visited; paths come out include-first, so the subset
/// taking the earliest items is listed first.
pub fn find_subsets(tree: &SubsetTree) -> Vec<Vec<bool>> {
    let mut results = Vec::new();
    let mut path = Vec::with_capacity(tree.depth());
    collect_paths(tree.root(), &mut path, &mut results);
    results
}

fn collect_paths(node: TreeNode, path: &mut Vec<bool>, results: &mut Vec<Vec<bool>>) {
    if node.is_leaf() {
        if node.satisfied() {
            trace!("Found subset path: {:?}", path);
            results.push(path.clone());
        }
        return;
    }

    if let Some(child) = node.include_child() {
        path.push(true);
        collect_paths(child, path, results);
        path.pop();
    }
    if let Some(child) = node.exclude_child() {
        path.push(false);
        collect_paths(child, path, results);
        path.pop();
    }
}

/// Existence check over the same include/exclude branching, without
/// building the tree. Stops at the first node whose running sum hits the
/// target, at any depth.
pub fn is_subset_sum(items: &[i64], target: i64) -> bool {
    // Overshooting can only be pruned when sums never decrease.
    let prune = items.iter().all(|&item| item >= 0);
    branch(items, 0, 0, target, prune)
}

fn branch(items: &[i64], index: usize, current_sum: i64, target: i64, prune: bool) -> bool {
    if current_sum == target {
        return true;
    }
    if index >= items.len() || (prune && current_sum > target) {
        return false;
    }

    branch(items, index + 1, current_sum + items[index], target, prune)
        || branch(items, index + 1, current_sum, target, prune)
}
