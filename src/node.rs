//! Search trees and solution paths.
//!
//! Nodes live in an append-only arena, [`SearchTree`]. Parent-to-child edges
//! are owned id lists and child-to-parent links are plain ids, so the tree
//! can be walked in both directions without reference cycles. A child is
//! always appended after its parent, which keeps ids increasing along every
//! root-to-leaf branch.

use std::fmt;

use crate::puzzle::Puzzle;

/// Handle to a node inside one [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Slot<P> {
    puzzle: P,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A tree of puzzle states grown during a search.
#[derive(Debug, Clone)]
pub struct SearchTree<P> {
    slots: Vec<Slot<P>>,
}

impl<P> SearchTree<P> {
    /// Create a tree holding only `root`.
    pub fn new(root: P) -> Self {
        Self {
            slots: vec![Slot {
                puzzle: root,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root_id(&self) -> NodeId {
        NodeId(0)
    }

    pub fn root(&self) -> Node<'_, P> {
        self.node(self.root_id())
    }

    /// View the node behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this tree.
    pub fn node(&self, id: NodeId) -> Node<'_, P> {
        assert!(
            id.0 < self.slots.len(),
            "{:?} does not belong to this tree",
            id
        );
        Node { tree: self, id }
    }

    /// Append `puzzle` as the last child of `parent`.
    pub fn add_child(&mut self, parent: NodeId, puzzle: P) -> NodeId {
        let id = NodeId(self.slots.len());
        self.slots[parent.0].children.push(id);
        self.slots.push(Slot {
            puzzle,
            parent: Some(parent),
            children: Vec::new(),
        });
        id
    }

    pub fn node_count(&self) -> usize {
        self.slots.len()
    }

    /// Keep only the branch from the root down to `leaf`.
    ///
    /// Every ancestor of `leaf` ends up with exactly one child, the next
    /// node on the trace. All other branches are dropped.
    pub fn into_path(self, leaf: NodeId) -> SolutionPath<P> {
        let mut on_path = vec![false; self.slots.len()];
        let mut cursor = Some(leaf);
        while let Some(id) = cursor {
            on_path[id.0] = true;
            cursor = self.slots[id.0].parent;
        }

        // Index order is root-to-leaf order on a single branch.
        let kept: Vec<P> = self
            .slots
            .into_iter()
            .zip(on_path)
            .filter(|(_, keep)| *keep)
            .map(|(slot, _)| slot.puzzle)
            .collect();

        SolutionPath {
            tree: SearchTree {
                slots: chain_slots(kept),
            },
        }
    }
}

fn chain_slots<P>(puzzles: Vec<P>) -> Vec<Slot<P>> {
    let len = puzzles.len();
    puzzles
        .into_iter()
        .enumerate()
        .map(|(i, puzzle)| Slot {
            puzzle,
            parent: i.checked_sub(1).map(NodeId),
            children: if i + 1 < len {
                vec![NodeId(i + 1)]
            } else {
                Vec::new()
            },
        })
        .collect()
}

/// Borrowed view of one node in a [`SearchTree`].
pub struct Node<'a, P> {
    tree: &'a SearchTree<P>,
    id: NodeId,
}

impl<P> Clone for Node<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Node<'_, P> {}

impl<'a, P> Node<'a, P> {
    fn slot(&self) -> &'a Slot<P> {
        &self.tree.slots[self.id.0]
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn puzzle(&self) -> &'a P {
        &self.slot().puzzle
    }

    pub fn parent(&self) -> Option<Node<'a, P>> {
        let tree = self.tree;
        self.slot().parent.map(|id| Node { tree, id })
    }

    /// Children in the order they were added.
    pub fn children(&self) -> impl Iterator<Item = Node<'a, P>> + 'a {
        let tree = self.tree;
        self.slot()
            .children
            .iter()
            .map(move |&id| Node { tree, id })
    }

    pub fn child_count(&self) -> usize {
        self.slot().children.len()
    }

    pub fn is_leaf(&self) -> bool {
        self.slot().children.is_empty()
    }

    /// Number of edges between this node and the root.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut cursor = self.parent();
        while let Some(node) = cursor {
            depth += 1;
            cursor = node.parent();
        }
        depth
    }
}

impl<P: Puzzle> Node<'_, P> {
    /// Canonical key for the subtree rooted here.
    ///
    /// Each state signature is written as `len:signature`, and children
    /// follow inside `[...]`, so the encoding stays unambiguous whatever
    /// characters a state signature contains. Child keys are sorted, so
    /// two subtrees that compare equal always share a signature regardless
    /// of child order.
    pub fn signature(&self) -> String {
        let state = self.puzzle().signature();
        let mut key = format!("{}:{}", state.len(), state);
        let mut children: Vec<String> = self.children().map(|child| child.signature()).collect();
        if !children.is_empty() {
            children.sort();
            key.push('[');
            key.extend(children);
            key.push(']');
        }
        key
    }
}

/// Equal states and the same children, in any order.
impl<P: PartialEq> PartialEq for Node<'_, P> {
    fn eq(&self, other: &Self) -> bool {
        self.puzzle() == other.puzzle()
            && self
                .children()
                .all(|mine| other.children().any(|theirs| theirs == mine))
            && other
                .children()
                .all(|theirs| self.children().any(|mine| mine == theirs))
    }
}

impl<P: fmt::Debug> fmt::Debug for Node<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("puzzle", self.puzzle())
            .field("children", &self.slot().children)
            .finish()
    }
}

impl<P: fmt::Display> fmt::Display for Node<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\n", self.puzzle())?;
        for (i, child) in self.children().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", child)?;
        }
        Ok(())
    }
}

/// A single-branch tree leading from a start state to a solved one.
#[derive(Debug, Clone)]
pub struct SolutionPath<P> {
    tree: SearchTree<P>,
}

impl<P> SolutionPath<P> {
    /// Build a path from `root` through each state of `rest` in turn.
    pub fn from_chain(root: P, rest: impl IntoIterator<Item = P>) -> Self {
        let mut tree = SearchTree::new(root);
        let mut tip = tree.root_id();
        for puzzle in rest {
            tip = tree.add_child(tip, puzzle);
        }
        Self { tree }
    }

    pub fn root(&self) -> Node<'_, P> {
        self.tree.root()
    }

    pub fn tree(&self) -> &SearchTree<P> {
        &self.tree
    }

    /// Number of states on the path.
    pub fn len(&self) -> usize {
        self.tree.node_count()
    }

    /// Never true: a path holds at least its start state.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of moves from the start state to the solved state.
    pub fn transitions(&self) -> usize {
        self.len() - 1
    }

    /// States from the start to the solved end.
    pub fn states(&self) -> impl Iterator<Item = &P> {
        self.tree.slots.iter().map(|slot| &slot.puzzle)
    }

    pub fn start_state(&self) -> &P {
        self.root().puzzle()
    }

    pub fn solved_state(&self) -> &P {
        &self.tree.slots[self.tree.slots.len() - 1].puzzle
    }

    pub fn into_states(self) -> Vec<P> {
        self.tree.slots.into_iter().map(|slot| slot.puzzle).collect()
    }
}

impl<P: PartialEq> PartialEq for SolutionPath<P> {
    fn eq(&self, other: &Self) -> bool {
        self.root() == other.root()
    }
}

impl<P: fmt::Display> fmt::Display for SolutionPath<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root())
    }
}
