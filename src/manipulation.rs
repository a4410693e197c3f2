use log::{debug, trace};

use crate::dtd::DtdChild;
use crate::error::Error;
use crate::treedata::{Node, Tree};
use crate::xmlvalue::ValueType;

/// Manipulation of the tree structure.
///
/// This maintains a well-formed XML structure:
/// - Leaf values (text, comments, DTD declarations, ...) have no children.
/// - A DTD only holds markup declarations, parameter entity references,
///   comments and processing instructions.
/// - An element holds elements, text, CDATA sections, character and
///   entity references, comments and processing instructions.
/// - A document holds at most one XML declaration, which comes first, at
///   most one DTD, and at most one document element, which must follow the
///   DTD. Comments and processing instructions can go anywhere after the
///   declaration.
///
/// A node has at most one parent. Inserting a node that already has a
/// parent moves it.
impl Tree {
    /// Insert a child into a container at `index`, or at the end if `index`
    /// is `None`.
    ///
    /// If the child already has another parent it is detached from it
    /// first. If it is already a child of `parent` nothing happens and
    /// `None` is returned; otherwise the inserted child is returned.
    ///
    /// ```rust
    /// use xmlwright::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let dtd = tree.new_dtd("note", None, None)?;
    /// let entity = tree.new_dtd_entity("abc")?;
    ///
    /// assert_eq!(tree.insert_child(dtd, entity, None)?, Some(entity));
    /// assert_eq!(tree.insert_child(dtd, entity, Some(0))?, None);
    /// assert_eq!(tree.parent(entity), Some(dtd));
    /// # Ok::<(), xmlwright::Error>(())
    /// ```
    pub fn insert_child(
        &mut self,
        parent: Node,
        child: Node,
        index: Option<usize>,
    ) -> Result<Option<Node>, Error> {
        self.container_check(parent)?;
        self.removed_check(child)?;
        self.add_structure_check(parent, child)?;
        if self.ancestors(parent).any(|ancestor| ancestor == child) {
            return Err(Error::InvalidArgument(
                "cannot insert a node into itself or its descendants".into(),
            ));
        }
        if self.parent(child) == Some(parent) {
            debug!("{:?} is already a child of {:?}", child, parent);
            return Ok(None);
        }
        let len = self.child_count(parent);
        let index = index.unwrap_or(len);
        if index > len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        if self.is_document(parent) {
            self.document_structure_check(parent, child, index)?;
        }
        if let Some(previous_parent) = self.parent(child) {
            debug!("moving {:?} away from {:?}", child, previous_parent);
            child.get().detach(self.arena_mut());
        }
        match self.child_at(parent, index) {
            Some(reference) => reference
                .get()
                .checked_insert_before(child.get(), self.arena_mut())?,
            None => parent.get().checked_append(child.get(), self.arena_mut())?,
        }
        debug!("inserted {:?} into {:?} at {}", child, parent, index);
        Ok(Some(child))
    }

    /// Append a child to the end of the children of the given parent.
    pub fn append_child(&mut self, parent: Node, child: Node) -> Result<Option<Node>, Error> {
        self.insert_child(parent, child, None)
    }

    /// Detach a child from its parent.
    ///
    /// The child stays usable and can be inserted somewhere else.
    pub fn remove_child(&mut self, parent: Node, child: Node) -> Result<(), Error> {
        self.container_check(parent)?;
        self.removed_check(child)?;
        if self.parent(child) != Some(parent) {
            return Err(Error::NotFound);
        }
        child.get().detach(self.arena_mut());
        debug!("removed {:?} from {:?}", child, parent);
        Ok(())
    }

    /// Detach the child at `index` from its parent and return it.
    pub fn remove_child_at_index(&mut self, parent: Node, index: usize) -> Result<Node, Error> {
        self.container_check(parent)?;
        let child = self.child_at(parent, index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.child_count(parent),
        })?;
        child.get().detach(self.arena_mut());
        debug!("removed {:?} from {:?} at {}", child, parent, index);
        Ok(child)
    }

    /// Remove a node and its descendants from the tree entirely.
    ///
    /// Afterwards the node is reported by [`Tree::is_removed`] and mutations
    /// involving it fail with [`Error::InvalidArgument`]. Removing a node
    /// twice does nothing.
    pub fn remove(&mut self, node: Node) {
        if self.is_removed(node) {
            return;
        }
        node.get().remove_subtree(self.arena_mut());
        debug!("removed subtree {:?}", node);
    }

    fn add_structure_check(&self, parent: Node, child: Node) -> Result<(), Error> {
        let child_type = self.value_type(child);
        match self.value_type(parent) {
            ValueType::Dtd => match DtdChild::try_from(child_type)? {
                DtdChild::Attlist
                | DtdChild::Element
                | DtdChild::Entity
                | DtdChild::Notation
                | DtdChild::ParamEntityRef => {
                    trace!("{:?} is a markup declaration", child_type);
                }
                DtdChild::Comment | DtdChild::ProcessingInstruction => {}
            },
            ValueType::Element => {
                if !matches!(
                    child_type,
                    ValueType::Element
                        | ValueType::Text
                        | ValueType::CData
                        | ValueType::CharRef
                        | ValueType::EntityRef
                        | ValueType::Comment
                        | ValueType::ProcessingInstruction
                ) {
                    return Err(Error::InvalidArgument(format!(
                        "{:?} cannot appear in an element",
                        child_type
                    )));
                }
            }
            ValueType::Document => {
                if !matches!(
                    child_type,
                    ValueType::Declaration
                        | ValueType::Dtd
                        | ValueType::Element
                        | ValueType::Comment
                        | ValueType::ProcessingInstruction
                ) {
                    return Err(Error::InvalidArgument(format!(
                        "{:?} cannot appear in a document",
                        child_type
                    )));
                }
            }
            parent_type => return Err(Error::UnsupportedOperation(parent_type)),
        }
        Ok(())
    }

    // `child` is not yet a child of `document`; `index` is where it would go
    fn document_structure_check(
        &self,
        document: Node,
        child: Node,
        index: usize,
    ) -> Result<(), Error> {
        let siblings = document
            .get()
            .children(self.arena())
            .map(|n| self.value_type(Node::new(n)))
            .collect::<Vec<_>>();
        let position = |value_type| siblings.iter().position(|t| *t == value_type);
        match self.value_type(child) {
            ValueType::Declaration => {
                if position(ValueType::Declaration).is_some() {
                    return Err(Error::DocumentStructure(
                        "document already has an XML declaration".into(),
                    ));
                }
                if index != 0 {
                    return Err(Error::DocumentStructure(
                        "XML declaration must be the first child".into(),
                    ));
                }
            }
            child_type => {
                if index == 0 && position(ValueType::Declaration).is_some() {
                    return Err(Error::DocumentStructure(
                        "XML declaration must be the first child".into(),
                    ));
                }
                if child_type == ValueType::Dtd {
                    if position(ValueType::Dtd).is_some() {
                        return Err(Error::DocumentStructure("document already has a DTD".into()));
                    }
                    if position(ValueType::Element).is_some_and(|element| index > element) {
                        return Err(Error::DocumentStructure(
                            "DTD must come before the document element".into(),
                        ));
                    }
                }
                if child_type == ValueType::Element {
                    if position(ValueType::Element).is_some() {
                        return Err(Error::DocumentStructure(
                            "document already has a document element".into(),
                        ));
                    }
                    if position(ValueType::Dtd).is_some_and(|dtd| index <= dtd) {
                        return Err(Error::DocumentStructure(
                            "document element must come after the DTD".into(),
                        ));
                    }
                }
            }
        }
        Ok(())
    }
}

/// ## Adding new nodes
///
/// These create a node and insert it in one step, returning the new node.
/// If the insertion fails the new node is discarded.
impl Tree {
    fn add_new(&mut self, parent: Node, child: Node, index: Option<usize>) -> Result<Node, Error> {
        match self.insert_child(parent, child, index) {
            Ok(_) => Ok(child),
            Err(err) => {
                self.remove(child);
                Err(err)
            }
        }
    }

    /// Add an XML declaration to a document.
    pub fn add_declaration(&mut self, document: Node) -> Result<Node, Error> {
        let node = self.new_declaration();
        self.add_new(document, node, Some(0))
    }

    /// Add a DTD to a document.
    pub fn add_dtd(
        &mut self,
        document: Node,
        name: &str,
        sys_id: Option<&str>,
        pub_id: Option<&str>,
        index: Option<usize>,
    ) -> Result<Node, Error> {
        let node = self.new_dtd(name, sys_id, pub_id)?;
        self.add_new(document, node, index)
    }

    /// Add an `<!ATTLIST ...>` declaration to a DTD.
    pub fn add_dtd_attlist(
        &mut self,
        dtd: Node,
        text: &str,
        index: Option<usize>,
    ) -> Result<Node, Error> {
        let node = self.new_dtd_attlist(text)?;
        self.add_new(dtd, node, index)
    }

    /// Add an `<!ELEMENT ...>` declaration to a DTD.
    pub fn add_dtd_element(
        &mut self,
        dtd: Node,
        text: &str,
        index: Option<usize>,
    ) -> Result<Node, Error> {
        let node = self.new_dtd_element(text)?;
        self.add_new(dtd, node, index)
    }

    /// Add an `<!ENTITY ...>` declaration to a DTD.
    pub fn add_dtd_entity(
        &mut self,
        dtd: Node,
        text: &str,
        index: Option<usize>,
    ) -> Result<Node, Error> {
        let node = self.new_dtd_entity(text)?;
        self.add_new(dtd, node, index)
    }

    /// Add a `<!NOTATION ...>` declaration to a DTD.
    pub fn add_dtd_notation(
        &mut self,
        dtd: Node,
        text: &str,
        index: Option<usize>,
    ) -> Result<Node, Error> {
        let node = self.new_dtd_notation(text)?;
        self.add_new(dtd, node, index)
    }

    /// Add a parameter entity reference to a DTD.
    pub fn add_dtd_param_entity_ref(
        &mut self,
        dtd: Node,
        name: &str,
        index: Option<usize>,
    ) -> Result<Node, Error> {
        let node = self.new_dtd_param_entity_ref(name)?;
        self.add_new(dtd, node, index)
    }

    /// Add an element to a document or element.
    pub fn add_element(
        &mut self,
        parent: Node,
        name: &str,
        index: Option<usize>,
    ) -> Result<Node, Error> {
        let node = self.new_element(name)?;
        self.add_new(parent, node, index)
    }

    /// Add a text node to an element.
    pub fn add_text(&mut self, parent: Node, text: &str, index: Option<usize>) -> Result<Node, Error> {
        let node = self.new_text(text)?;
        self.add_new(parent, node, index)
    }

    /// Add a CDATA section to an element.
    pub fn add_cdata(
        &mut self,
        parent: Node,
        text: &str,
        index: Option<usize>,
    ) -> Result<Node, Error> {
        let node = self.new_cdata(text)?;
        self.add_new(parent, node, index)
    }

    /// Add a character reference to an element.
    pub fn add_char_ref(
        &mut self,
        parent: Node,
        char: char,
        hex: bool,
        index: Option<usize>,
    ) -> Result<Node, Error> {
        let node = self.new_char_ref(char, hex)?;
        self.add_new(parent, node, index)
    }

    /// Add an entity reference to an element.
    pub fn add_entity_ref(
        &mut self,
        parent: Node,
        name: &str,
        index: Option<usize>,
    ) -> Result<Node, Error> {
        let node = self.new_entity_ref(name)?;
        self.add_new(parent, node, index)
    }

    /// Add a comment to any container.
    pub fn add_comment(
        &mut self,
        parent: Node,
        text: &str,
        index: Option<usize>,
    ) -> Result<Node, Error> {
        let node = self.new_comment(text)?;
        self.add_new(parent, node, index)
    }

    /// Add a processing instruction to any container.
    pub fn add_processing_instruction(
        &mut self,
        parent: Node,
        target: &str,
        content: Option<&str>,
        index: Option<usize>,
    ) -> Result<Node, Error> {
        let node = self.new_processing_instruction(target, content)?;
        self.add_new(parent, node, index)
    }
}
