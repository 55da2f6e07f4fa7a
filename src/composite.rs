//! Composite tree: leaves and branches behind one uniform handle.
//!
//! Nodes are shared handles (`Rc<RefCell<..>>`). A branch owns its children
//! strongly; every node points back to its parent weakly, so dropping the
//! root drops the whole tree.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use termtree::Tree;
use tracing::{debug, instrument};

use crate::errors::{PatternError, PatternResult};

/// Labels and delimiter used when a tree is rendered to text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderStyle {
    pub leaf_label: String,
    pub branch_label: String,
    pub delimiter: String,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            leaf_label: "Leaf".into(),
            branch_label: "Branch".into(),
            delimiter: "+".into(),
        }
    }
}

#[derive(Debug)]
enum NodeKind {
    Leaf,
    Branch(Vec<Component>),
}

#[derive(Debug)]
struct Node {
    kind: NodeKind,
    /// Bookkeeping only, never used for ownership
    parent: Weak<RefCell<Node>>,
}

/// Handle to a node in a composite tree.
///
/// Cloning the handle does not clone the node: both handles refer to the
/// same node, and identity (not structure) is what `remove` matches on.
#[derive(Debug, Clone)]
pub struct Component(Rc<RefCell<Node>>);

impl Component {
    pub fn leaf() -> Self {
        Self::from_kind(NodeKind::Leaf)
    }

    pub fn branch() -> Self {
        Self::from_kind(NodeKind::Branch(Vec::new()))
    }

    fn from_kind(kind: NodeKind) -> Self {
        Component(Rc::new(RefCell::new(Node {
            kind,
            parent: Weak::new(),
        })))
    }

    /// True for branches, false for leaves.
    pub fn is_composite(&self) -> bool {
        matches!(self.0.borrow().kind, NodeKind::Branch(_))
    }

    /// Identity comparison: do both handles point at the same node?
    pub fn ptr_eq(&self, other: &Component) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn parent(&self) -> Option<Component> {
        self.0.borrow().parent.upgrade().map(Component)
    }

    /// Snapshot of the children in insertion order (empty for leaves).
    pub fn children(&self) -> Vec<Component> {
        match &self.0.borrow().kind {
            NodeKind::Leaf => Vec::new(),
            NodeKind::Branch(children) => children.clone(),
        }
    }

    pub fn len(&self) -> usize {
        match &self.0.borrow().kind {
            NodeKind::Leaf => 0,
            NodeKind::Branch(children) => children.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Walks parent links up to the topmost node.
    pub fn root(&self) -> Component {
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current
    }

    /// True if `candidate` is this node or one of its ancestors.
    fn is_self_or_descendant_of(&self, candidate: &Component) -> bool {
        let mut current = Some(self.clone());
        while let Some(node) = current {
            if node.ptr_eq(candidate) {
                return true;
            }
            current = node.parent();
        }
        false
    }

    /// Appends `child` and points its parent link at this branch.
    ///
    /// A child that already sits in another branch is moved, so a node is
    /// never listed by two parents.
    ///
    /// # Errors
    /// * `NotComposite` if called on a leaf
    /// * `CycleDetected` if `child` is this node or one of its ancestors
    #[instrument(level = "debug", skip_all)]
    pub fn add(&self, child: &Component) -> PatternResult<()> {
        if !self.is_composite() {
            return Err(PatternError::NotComposite);
        }
        if self.is_self_or_descendant_of(child) {
            return Err(PatternError::CycleDetected);
        }

        if let Some(previous) = child.parent() {
            debug!("Reparenting child away from its previous branch");
            previous.detach(child);
        }

        if let NodeKind::Branch(children) = &mut self.0.borrow_mut().kind {
            children.push(child.clone());
        }
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        Ok(())
    }

    /// Removes the first child with the same identity as `child` and clears
    /// its parent link.
    ///
    /// # Errors
    /// * `NotComposite` if called on a leaf
    /// * `ChildNotFound` if `child` is not held by this branch; the tree is
    ///   left unchanged
    #[instrument(level = "debug", skip_all)]
    pub fn remove(&self, child: &Component) -> PatternResult<()> {
        let removed = {
            let mut node = self.0.borrow_mut();
            let NodeKind::Branch(children) = &mut node.kind else {
                return Err(PatternError::NotComposite);
            };
            let Some(pos) = children.iter().position(|c| c.ptr_eq(child)) else {
                return Err(PatternError::ChildNotFound);
            };
            children.remove(pos)
        };
        removed.0.borrow_mut().parent = Weak::new();
        Ok(())
    }

    fn detach(&self, child: &Component) {
        if let NodeKind::Branch(children) = &mut self.0.borrow_mut().kind {
            if let Some(pos) = children.iter().position(|c| c.ptr_eq(child)) {
                children.remove(pos);
            }
        }
    }

    /// Renders with the default style, e.g. `Branch(Leaf+Leaf)`.
    pub fn operation(&self) -> String {
        self.operation_with(&RenderStyle::default())
    }

    pub fn operation_with(&self, style: &RenderStyle) -> String {
        match &self.0.borrow().kind {
            NodeKind::Leaf => style.leaf_label.clone(),
            NodeKind::Branch(children) => format!(
                "{}({})",
                style.branch_label,
                children
                    .iter()
                    .map(|c| c.operation_with(style))
                    .join(&style.delimiter)
            ),
        }
    }

    pub fn depth(&self) -> usize {
        match &self.0.borrow().kind {
            NodeKind::Leaf => 1,
            NodeKind::Branch(children) => {
                1 + children.iter().map(Component::depth).max().unwrap_or(0)
            }
        }
    }

    pub fn leaf_count(&self) -> usize {
        match &self.0.borrow().kind {
            NodeKind::Leaf => 1,
            NodeKind::Branch(children) => children.iter().map(Component::leaf_count).sum(),
        }
    }

    /// Structure as a printable `termtree` tree.
    pub fn to_tree(&self, style: &RenderStyle) -> Tree<String> {
        match &self.0.borrow().kind {
            NodeKind::Leaf => Tree::new(style.leaf_label.clone()),
            NodeKind::Branch(children) => Tree::new(style.branch_label.clone())
                .with_leaves(children.iter().map(|c| c.to_tree(style))),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.operation())
    }
}

/// Client helper: grafts `child` onto `target` only if `target` can hold
/// children, then renders `target`.
///
/// Callers never have to inspect the concrete node kind.
pub fn add_if_composite(target: &Component, child: &Component) -> PatternResult<String> {
    if target.is_composite() {
        target.add(child)?;
    }
    Ok(target.operation())
}

/// The demo tree: `Branch(Branch(Leaf+Leaf)+Branch(Leaf))`.
pub fn sample_tree() -> PatternResult<Component> {
    let tree = Component::branch();

    let first = Component::branch();
    first.add(&Component::leaf())?;
    first.add(&Component::leaf())?;

    let second = Component::branch();
    second.add(&Component::leaf())?;

    tree.add(&first)?;
    tree.add(&second)?;
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_leaf_when_operation_then_returns_label() {
        let leaf = Component::leaf();
        assert_eq!(leaf.operation(), "Leaf");
        assert!(!leaf.is_composite());
    }

    #[test]
    fn given_two_leaves_when_operation_then_joins_in_branch() {
        let branch = Component::branch();
        branch.add(&Component::leaf()).unwrap();
        branch.add(&Component::leaf()).unwrap();
        assert_eq!(branch.operation(), "Branch(Leaf+Leaf)");
    }

    #[test]
    fn given_empty_branch_when_operation_then_renders_empty_parens() {
        assert_eq!(Component::branch().operation(), "Branch()");
    }

    #[test]
    fn given_child_when_added_then_parent_is_set() {
        let branch = Component::branch();
        let leaf = Component::leaf();
        branch.add(&leaf).unwrap();
        assert!(leaf.parent().unwrap().ptr_eq(&branch));
    }

    #[test]
    fn given_child_when_removed_then_parent_is_cleared() {
        let branch = Component::branch();
        let leaf = Component::leaf();
        branch.add(&leaf).unwrap();
        branch.remove(&leaf).unwrap();
        assert!(leaf.parent().is_none());
        assert!(branch.is_empty());
    }

    #[test]
    fn given_leaf_when_add_then_not_composite() {
        let leaf = Component::leaf();
        assert_eq!(leaf.add(&Component::leaf()), Err(PatternError::NotComposite));
        assert_eq!(leaf.remove(&Component::leaf()), Err(PatternError::NotComposite));
    }

    #[test]
    fn given_branch_when_added_to_itself_then_cycle_detected() {
        let branch = Component::branch();
        assert_eq!(branch.add(&branch), Err(PatternError::CycleDetected));
    }

    #[test]
    fn given_dropped_parent_when_reading_parent_then_none() {
        let leaf = Component::leaf();
        {
            let branch = Component::branch();
            branch.add(&leaf).unwrap();
        }
        assert!(leaf.parent().is_none());
    }

    #[test]
    fn given_sample_tree_when_rendered_then_matches_demo_output() {
        let tree = sample_tree().unwrap();
        assert_eq!(tree.operation(), "Branch(Branch(Leaf+Leaf)+Branch(Leaf))");
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.leaf_count(), 3);
    }
}
