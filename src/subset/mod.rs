mod recursive;
mod table;
mod tree;

pub use recursive::is_subset_sum_rec;
pub use table::{SubsetTable, has_subset_sum, subset_from_table, subset_sum_table};
pub use tree::{MAX_TREE_DEPTH, SubsetTree, TreeNode, find_subsets, is_subset_sum, subset_sum};

#[cfg(test)]
mod tests;
