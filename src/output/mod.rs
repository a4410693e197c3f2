//! Control over how trees are serialized.
//!
//! Serialization turns a node and its descendants into a stream of
//! output tokens, which are then rendered to text, optionally with
//! indentation added.
mod pretty;
mod serializer;
pub mod xml;
mod xml_serializer;

pub(crate) use pretty::Pretty;
pub(crate) use serializer::gen_outputs;
pub(crate) use serializer::{Output, OutputToken};
pub(crate) use xml_serializer::XmlSerializer;
