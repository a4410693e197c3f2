use crate::dtd::{Dtd, DtdAttlist, DtdElement, DtdEntity, DtdNotation, DtdParamEntityRef};
use crate::error::Error;
use crate::treedata::{Node, Tree};
use crate::xmlvalue::{
    CData, CharRef, Comment, Declaration, Element, EntityRef, ProcessingInstruction, Text, Value,
};

/// ## Creation
///
/// Nodes are created detached: they have no parent until you insert them
/// with [`Tree::insert_child`] or one of its variants. Values are checked
/// before anything is allocated in the tree.
impl Tree {
    pub(crate) fn new_node(&mut self, value: Value) -> Node {
        Node::new(self.arena_mut().new_node(value))
    }

    /// Create a new document node.
    ///
    /// A document holds an optional XML declaration, an optional DTD, a
    /// single document element, and any number of comments and processing
    /// instructions.
    pub fn new_document(&mut self) -> Node {
        self.new_node(Value::Document)
    }

    /// Create a new XML declaration for version `1.0`.
    pub fn new_declaration(&mut self) -> Node {
        self.new_node(Value::Declaration(Declaration::default()))
    }

    /// Create a new document type declaration.
    ///
    /// ```rust
    /// use xmlwright::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let dtd = tree.new_dtd("note", Some("note.dtd"), None)?;
    /// assert_eq!(tree.to_string(dtd)?, "<!DOCTYPE note SYSTEM 'note.dtd'>");
    /// # Ok::<(), xmlwright::Error>(())
    /// ```
    pub fn new_dtd(
        &mut self,
        name: &str,
        sys_id: Option<&str>,
        pub_id: Option<&str>,
    ) -> Result<Node, Error> {
        let dtd = Dtd::new(name, sys_id, pub_id)?;
        Ok(self.new_node(Value::Dtd(dtd)))
    }

    /// Create a new `<!ATTLIST ...>` declaration.
    pub fn new_dtd_attlist(&mut self, text: &str) -> Result<Node, Error> {
        let value = Value::DtdAttlist(DtdAttlist::new(text)?);
        Ok(self.new_node(value))
    }

    /// Create a new `<!ELEMENT ...>` declaration.
    pub fn new_dtd_element(&mut self, text: &str) -> Result<Node, Error> {
        let value = Value::DtdElement(DtdElement::new(text)?);
        Ok(self.new_node(value))
    }

    /// Create a new `<!ENTITY ...>` declaration.
    pub fn new_dtd_entity(&mut self, text: &str) -> Result<Node, Error> {
        let value = Value::DtdEntity(DtdEntity::new(text)?);
        Ok(self.new_node(value))
    }

    /// Create a new `<!NOTATION ...>` declaration.
    pub fn new_dtd_notation(&mut self, text: &str) -> Result<Node, Error> {
        let value = Value::DtdNotation(DtdNotation::new(text)?);
        Ok(self.new_node(value))
    }

    /// Create a new parameter entity reference, `%name;`.
    pub fn new_dtd_param_entity_ref(&mut self, name: &str) -> Result<Node, Error> {
        let value = Value::DtdParamEntityRef(DtdParamEntityRef::new(name)?);
        Ok(self.new_node(value))
    }

    /// Create a new element without attributes.
    pub fn new_element(&mut self, name: &str) -> Result<Node, Error> {
        let value = Value::Element(Element::new(name)?);
        Ok(self.new_node(value))
    }

    /// Create a new text node.
    pub fn new_text(&mut self, text: &str) -> Result<Node, Error> {
        let value = Value::Text(Text::new(text)?);
        Ok(self.new_node(value))
    }

    /// Create a new CDATA section.
    pub fn new_cdata(&mut self, text: &str) -> Result<Node, Error> {
        let value = Value::CData(CData::new(text)?);
        Ok(self.new_node(value))
    }

    /// Create a new character reference, decimal unless `hex` is set.
    pub fn new_char_ref(&mut self, char: char, hex: bool) -> Result<Node, Error> {
        let value = Value::CharRef(CharRef::new(char, hex)?);
        Ok(self.new_node(value))
    }

    /// Create a new entity reference, `&name;`.
    pub fn new_entity_ref(&mut self, name: &str) -> Result<Node, Error> {
        let value = Value::EntityRef(EntityRef::new(name)?);
        Ok(self.new_node(value))
    }

    /// Create a new comment.
    pub fn new_comment(&mut self, text: &str) -> Result<Node, Error> {
        let value = Value::Comment(Comment::new(text)?);
        Ok(self.new_node(value))
    }

    /// Create a new processing instruction.
    pub fn new_processing_instruction(
        &mut self,
        target: &str,
        content: Option<&str>,
    ) -> Result<Node, Error> {
        let value = Value::ProcessingInstruction(ProcessingInstruction::new(target, content)?);
        Ok(self.new_node(value))
    }
}
