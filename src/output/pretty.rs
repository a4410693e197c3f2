use crate::output::Output;
use crate::treedata::{Node, Tree};

// The stack tracks the containers we are in. Inside a mixed element (one
// with text or references among its children) we don't add any whitespace
// anymore, including for its descendants. In an unmixed container we
// remember the indentation level of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StackEntry {
    Unmixed(usize),
    Mixed,
}

pub(crate) struct Pretty<'a> {
    tree: &'a Tree,
    top: Node,
    stack: Vec<StackEntry>,
}

impl<'a> Pretty<'a> {
    pub(crate) fn new(tree: &'a Tree, top: Node) -> Self {
        Pretty {
            tree,
            top,
            stack: Vec::new(),
        }
    }

    fn level(&self) -> usize {
        match self.stack.last() {
            Some(StackEntry::Unmixed(level)) => *level,
            _ => 0,
        }
    }

    fn enter(&mut self, node: Node) {
        let has_inline_child = self
            .tree
            .children(node)
            .map(|mut children| children.any(|child| self.tree.value_type(child).is_inline()))
            .unwrap_or(false);
        let entry = if has_inline_child || self.stack.last() == Some(&StackEntry::Mixed) {
            StackEntry::Mixed
        } else {
            StackEntry::Unmixed(self.level() + 1)
        };
        self.stack.push(entry);
    }

    fn node_start(&self, node: Node) -> Option<usize> {
        if node == self.top {
            return None;
        }
        let parent = self.tree.parent(node)?;
        // document children are separated by newlines but never indented
        if self.tree.is_document(parent) {
            return self.tree.previous_sibling(node).map(|_| 0);
        }
        match self.stack.last() {
            Some(StackEntry::Unmixed(level)) => Some(*level),
            _ => None,
        }
    }

    /// Returns the indentation level if the output token should start on a
    /// new line.
    pub(crate) fn prettify(&mut self, node: Node, output: &Output) -> Option<usize> {
        use Output::*;
        match output {
            Declaration(_)
            | DoctypeOpen(_)
            | DtdAttlist(_)
            | DtdElement(_)
            | DtdEntity(_)
            | DtdNotation(_)
            | DtdParamEntityRef(_)
            | StartTagOpen(_)
            | Text(_)
            | CData(_)
            | CharRef(..)
            | EntityRef(_)
            | Comment(_)
            | ProcessingInstruction(..) => self.node_start(node),
            InternalSubsetOpen => {
                self.enter(node);
                None
            }
            InternalSubsetClose => {
                self.stack.pop();
                Some(self.level())
            }
            StartTagClose => {
                if self.tree.first_child(node).is_some() {
                    self.enter(node);
                }
                None
            }
            EndTag(_) => {
                if self.tree.first_child(node).is_none() {
                    return None;
                }
                match self.stack.pop() {
                    Some(StackEntry::Unmixed(_)) => Some(self.level()),
                    _ => None,
                }
            }
            DoctypeClose | Attribute(..) => None,
        }
    }
}
