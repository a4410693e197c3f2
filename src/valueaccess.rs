use crate::dtd::{Dtd, DtdAttlist, DtdElement, DtdEntity, DtdNotation, DtdParamEntityRef};
use crate::treedata::{Node, Tree};
use crate::xmlvalue::{
    CData, CharRef, Comment, Declaration, Element, EntityRef, ProcessingInstruction, Text, Value,
    ValueType,
};

macro_rules! value_access {
    ($(($variant:ident, $type:ty, $get:ident, $get_mut:ident, $what:literal)),* $(,)?) => {
        impl Tree {
            $(
                #[doc = concat!("If this node's value is ", $what, ", return a reference to it.")]
                pub fn $get(&self, node: Node) -> Option<&$type> {
                    if let Some(Value::$variant(value)) = self.live_value(node) {
                        Some(value)
                    } else {
                        None
                    }
                }

                #[doc = concat!("If this node's value is ", $what, ", return a mutable reference to it.")]
                pub fn $get_mut(&mut self, node: Node) -> Option<&mut $type> {
                    if let Some(Value::$variant(value)) = self.live_value_mut(node) {
                        Some(value)
                    } else {
                        None
                    }
                }
            )*
        }
    };
}

value_access!(
    (Declaration, Declaration, declaration, declaration_mut, "an XML declaration"),
    (Dtd, Dtd, dtd, dtd_mut, "a DTD"),
    (DtdAttlist, DtdAttlist, dtd_attlist, dtd_attlist_mut, "an attribute list declaration"),
    (DtdElement, DtdElement, dtd_element, dtd_element_mut, "an element declaration"),
    (DtdEntity, DtdEntity, dtd_entity, dtd_entity_mut, "an entity declaration"),
    (DtdNotation, DtdNotation, dtd_notation, dtd_notation_mut, "a notation declaration"),
    (
        DtdParamEntityRef,
        DtdParamEntityRef,
        dtd_param_entity_ref,
        dtd_param_entity_ref_mut,
        "a parameter entity reference"
    ),
    (Element, Element, element, element_mut, "an element"),
    (Text, Text, text, text_mut, "text"),
    (CData, CData, cdata, cdata_mut, "a CDATA section"),
    (CharRef, CharRef, char_ref, char_ref_mut, "a character reference"),
    (EntityRef, EntityRef, entity_ref, entity_ref_mut, "an entity reference"),
    (Comment, Comment, comment, comment_mut, "a comment"),
    (
        ProcessingInstruction,
        ProcessingInstruction,
        processing_instruction,
        processing_instruction_mut,
        "a processing instruction"
    ),
);

/// Obtain XML values and their types.
///
/// These are handy if you only need to match against a single value or know
/// the value type already. If you want to handle all value types, use a
/// `match` statement on [`Value`](crate::Value) instead.
impl Tree {
    /// Access to the XML value for this node.
    ///
    /// ```rust
    /// use xmlwright::{Tree, Value};
    ///
    /// let mut tree = Tree::new();
    /// let dtd = tree.new_dtd("note", None, None)?;
    ///
    /// match tree.value(dtd) {
    ///     Value::Dtd(dtd) => assert_eq!(dtd.name(), "note"),
    ///     _ => unreachable!(),
    /// }
    /// # Ok::<(), xmlwright::Error>(())
    /// ```
    ///
    /// Panics if the node has been removed; the typed accessors such as
    /// [`Tree::element`] return [`None`] instead.
    #[inline]
    pub fn value(&self, node: Node) -> &Value {
        self.arena()[node.get()].get()
    }

    // `None` for removed nodes, including stale handles to a reused slot
    fn live_value(&self, node: Node) -> Option<&Value> {
        self.arena().get(node.get()).map(|n| n.get())
    }

    // there is no public untyped `value_mut`: swapping in a value of
    // another kind would bypass the structure checks done on insertion
    fn live_value_mut(&mut self, node: Node) -> Option<&mut Value> {
        self.arena_mut().get_mut(node.get()).map(|n| n.get_mut())
    }

    /// Get the [`ValueType`](crate::ValueType) of a node.
    pub fn value_type(&self, node: Node) -> ValueType {
        self.value(node).value_type()
    }

    /// Return true if node is a document.
    pub fn is_document(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Document
    }

    /// Return true if node is an element.
    pub fn is_element(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Element
    }

    /// Return true if node is a DTD.
    pub fn is_dtd(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Dtd
    }

    /// If this node's value is text, return a reference to the string.
    pub fn text_str(&self, node: Node) -> Option<&str> {
        self.text(node).map(|n| n.get())
    }

    /// If this node's value is a comment, return a reference to the string.
    pub fn comment_str(&self, node: Node) -> Option<&str> {
        self.comment(node).map(|n| n.get())
    }
}
