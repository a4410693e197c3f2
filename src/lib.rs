#![forbid(unsafe_code)]

//! Build well-formed XML documents node by node.
//!
//! All nodes live in a [`Tree`]; a [`Node`] is a cheap handle into it.
//! Values are checked against the XML grammar when they are created or
//! changed, and the tree structure is checked when nodes are inserted, so
//! a tree can always be serialized. The one exception is quoting: whether
//! a DTD identifier can be quoted depends on the quote character chosen at
//! serialization time.
//!
//! ```rust
//! use xmlwright::{output, Tree};
//!
//! let mut tree = Tree::new();
//! let document = tree.new_document();
//! tree.add_declaration(document)?;
//! let dtd = tree.add_dtd(document, "note", Some("note.dtd"), None, None)?;
//! tree.add_dtd_element(dtd, "note (#PCDATA)", None)?;
//! let note = tree.add_element(document, "note", None)?;
//! tree.add_text(note, "Don't forget me", None)?;
//!
//! let parameters = output::xml::Parameters {
//!     pretty: false,
//!     ..Default::default()
//! };
//! assert_eq!(
//!     tree.serialize_xml_string(parameters, document)?,
//!     "<?xml version='1.0'?><!DOCTYPE note SYSTEM 'note.dtd' [<!ELEMENT note (#PCDATA)>]><note>Don't forget me</note>"
//! );
//! # Ok::<(), xmlwright::Error>(())
//! ```

mod access;
mod creation;
mod dtd;
mod entity;
mod error;
mod manipulation;
pub mod output;
mod serialize;
mod treedata;
pub mod validate;
mod valueaccess;
mod xmlvalue;

pub use access::NodeEdge;
pub use dtd::{Dtd, DtdAttlist, DtdChild, DtdElement, DtdEntity, DtdNotation, DtdParamEntityRef};
pub use error::Error;
pub use treedata::{Node, Tree};
pub use xmlvalue::{
    Attribute, CData, CharRef, Comment, Declaration, Element, EntityRef, ProcessingInstruction,
    Text, Value, ValueType,
};
