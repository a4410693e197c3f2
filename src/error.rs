use crate::xmlvalue::ValueType;

/// Errors raised while building or serializing an XML tree.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A node of the wrong kind was passed, for instance a text node
    /// inserted into a DTD, or a node inserted into itself.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A string violates the XML grammar for the field it is assigned to.
    #[error("invalid {what}: {value:?}")]
    InvalidFormat {
        /// The field or production that was violated, i.e. `"name"`.
        what: &'static str,
        /// The rejected value.
        value: String,
    },
    /// A cross-field rule was broken, i.e. a public id without a system id.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
    /// The value cannot be quoted with the quote character selected for
    /// serialization.
    #[error("cannot quote {value:?} with {quote}")]
    QuoteConflict { value: String, quote: char },
    /// Child management on a node kind that cannot have children.
    #[error("{0:?} nodes cannot have children")]
    UnsupportedOperation(ValueType),
    /// The node is not a child of the given parent.
    #[error("node not found among children")]
    NotFound,
    /// A child index is beyond the end of the child list.
    #[error("index {index} out of range for {len} children")]
    IndexOutOfRange { index: usize, len: usize },
    /// An element already has an attribute with this name.
    #[error("duplicate attribute: {0}")]
    DuplicateAttribute(String),
    /// The document would no longer be well-formed, i.e. two root elements.
    #[error("document structure: {0}")]
    DocumentStructure(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Tree(#[from] indextree::NodeError),
}
