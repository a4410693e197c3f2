use indextree::NodeEdge as IndexTreeNodeEdge;

use crate::error::Error;
use crate::treedata::{Node, Tree};

/// Node edges.
///
/// Used by [`Tree::traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeEdge {
    /// The start edge of a node. In case of an element
    /// this is the start tag; in case of a DTD the
    /// `<!DOCTYPE` opening.
    Start(Node),
    /// The end edge of a node. For leaf values the
    /// end edge occurs immediately after the start
    /// edge.
    End(Node),
}

/// ## Read-only access
impl Tree {
    /// Get parent node.
    ///
    /// Returns [`None`] if the node has not been inserted anywhere, or was
    /// removed from its parent.
    pub fn parent(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].parent().map(Node::new)
    }

    /// Iterator over the child nodes of a container.
    ///
    /// Leaf values such as text, comments or DTD declarations cannot have
    /// children; asking for them is an
    /// [`Error::UnsupportedOperation`](crate::Error::UnsupportedOperation).
    ///
    /// ```rust
    /// use xmlwright::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// let dtd = tree.new_dtd("note", None, None)?;
    /// let entity = tree.add_dtd_entity(dtd, "abc", None)?;
    ///
    /// assert_eq!(tree.children(dtd)?.collect::<Vec<_>>(), vec![entity]);
    /// assert!(matches!(tree.children(entity), Err(Error::UnsupportedOperation(_))));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn children(&self, node: Node) -> Result<impl Iterator<Item = Node> + '_, Error> {
        self.container_check(node)?;
        Ok(node.get().children(self.arena()).map(Node::new))
    }

    pub(crate) fn container_check(&self, node: Node) -> Result<(), Error> {
        self.removed_check(node)?;
        let value_type = self.value_type(node);
        if !value_type.is_container() {
            return Err(Error::UnsupportedOperation(value_type));
        }
        Ok(())
    }

    /// The number of children; always 0 for leaf values.
    pub fn child_count(&self, node: Node) -> usize {
        node.get().children(self.arena()).count()
    }

    /// Get first child.
    ///
    /// Returns [`None`] if there are no children.
    pub fn first_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].first_child().map(Node::new)
    }

    /// Get last child.
    ///
    /// Returns [`None`] if there are no children.
    pub fn last_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].last_child().map(Node::new)
    }

    /// Get next sibling.
    ///
    /// Returns [`None`] if there is no next sibling.
    pub fn next_sibling(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].next_sibling().map(Node::new)
    }

    /// Get previous sibling.
    ///
    /// Returns [`None`] if there is no previous sibling.
    pub fn previous_sibling(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].previous_sibling().map(Node::new)
    }

    /// Get the child at `index`, if there is one.
    pub fn child_at(&self, parent: Node, index: usize) -> Option<Node> {
        parent.get().children(self.arena()).nth(index).map(Node::new)
    }

    /// Get index of child.
    ///
    /// Returns [`None`] if the node is not a child of this node.
    pub fn index_of(&self, parent: Node, child: Node) -> Option<usize> {
        if self.parent(child) != Some(parent) {
            return None;
        }
        parent
            .get()
            .children(self.arena())
            .position(|n| n == child.get())
    }

    /// Iterator over ancestor nodes, including this one.
    pub fn ancestors(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().ancestors(self.arena()).map(Node::new)
    }

    /// Check whether a node has been removed with [`Tree::remove`].
    ///
    /// This stays true even when the arena slot of the removed node has
    /// been reused by a node created later.
    pub fn is_removed(&self, node: Node) -> bool {
        node.get().is_removed(self.arena())
    }

    pub(crate) fn removed_check(&self, node: Node) -> Result<(), Error> {
        if self.is_removed(node) {
            return Err(Error::InvalidArgument(format!("{:?} has been removed", node)));
        }
        Ok(())
    }

    /// Traverse over node edges.
    ///
    /// This can be used to traverse the tree in document order
    /// iteratively without the need for recursion, while still
    /// having information about structure (unlike in descendants).
    pub fn traverse(&self, node: Node) -> impl Iterator<Item = NodeEdge> + '_ {
        node.get().traverse(self.arena()).map(|edge| match edge {
            IndexTreeNodeEdge::Start(node_id) => NodeEdge::Start(Node::new(node_id)),
            IndexTreeNodeEdge::End(node_id) => NodeEdge::End(Node::new(node_id)),
        })
    }
}
