use super::EntryKind;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeNode {
    pub name: String,
    pub kind: EntryKind,
    pub children: Vec<TreeNode>,
}
