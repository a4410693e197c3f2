//! Parameters for XML serialization.

/// Parameters for XML serialization.
///
/// ```rust
/// use xmlwright::{output, Tree};
///
/// let mut tree = Tree::new();
/// let dtd = tree.new_dtd("note", Some("note.dtd"), None)?;
/// tree.add_dtd_entity(dtd, "abc", None)?;
///
/// let parameters = output::xml::Parameters {
///     pretty: false,
///     double_quotes: true,
///     ..Default::default()
/// };
/// assert_eq!(
///     tree.serialize_xml_string(parameters, dtd)?,
///     r#"<!DOCTYPE note SYSTEM "note.dtd" [<!ENTITY abc>]>"#
/// );
/// # Ok::<(), xmlwright::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Parameters {
    /// Put children of elements, DTDs and documents on their own lines.
    ///
    /// Elements that contain text, CDATA sections or references are left
    /// as they are, including everything inside them.
    pub pretty: bool,
    /// Inserted once per nesting level when pretty printing.
    pub indent: String,
    /// Line separator used when pretty printing.
    pub newline: String,
    /// Quote identifiers and attribute values with `"` instead of `'`.
    pub double_quotes: bool,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            pretty: true,
            indent: "  ".to_string(),
            newline: "\n".to_string(),
            double_quotes: false,
        }
    }
}

impl Parameters {
    pub(crate) fn quote(&self) -> char {
        if self.double_quotes {
            '"'
        } else {
            '\''
        }
    }
}
