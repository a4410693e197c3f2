use std::io::{self, Write};

use log::trace;

use crate::error::Error;
use crate::output::{gen_outputs, xml::Parameters, XmlSerializer};
use crate::treedata::{Node, Tree};

/// ## Serialization
impl Tree {
    /// Serialize node as XML string with the default
    /// [`Parameters`](crate::output::xml::Parameters): pretty printed with
    /// two space indentation and `'` as the quote character.
    ///
    /// This serializes the node and its descendants.
    ///
    /// ```rust
    /// use xmlwright::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let dtd = tree.new_dtd("note", Some("note.dtd"), Some("-//example//note"))?;
    /// assert_eq!(
    ///     tree.to_string(dtd)?,
    ///     "<!DOCTYPE note PUBLIC '-//example//note' 'note.dtd'>"
    /// );
    /// # Ok::<(), xmlwright::Error>(())
    /// ```
    pub fn to_string(&self, node: Node) -> Result<String, Error> {
        self.serialize_xml_string(Parameters::default(), node)
    }

    /// Serialize node as XML string.
    ///
    /// Fails with [`Error::QuoteConflict`] if a system or public id contains
    /// the quote character selected by the parameters.
    pub fn serialize_xml_string(&self, parameters: Parameters, node: Node) -> Result<String, Error> {
        let mut buf = Vec::new();
        self.serialize_xml_write(parameters, node, &mut buf)?;
        String::from_utf8(buf).map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    /// Write node as XML.
    ///
    /// Output may be partially written when this fails.
    pub fn serialize_xml_write(
        &self,
        parameters: Parameters,
        node: Node,
        w: &mut impl Write,
    ) -> Result<(), Error> {
        trace!("serializing {:?} with {:?}", node, parameters);
        let pretty = parameters.pretty;
        let outputs = gen_outputs(self, node);
        let mut serializer = XmlSerializer::new(self, parameters);
        if pretty {
            serializer.serialize_pretty(w, outputs, node)
        } else {
            serializer.serialize(w, outputs)
        }
    }
}
