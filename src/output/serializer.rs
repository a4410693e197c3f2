use genawaiter::rc::gen;
use genawaiter::yield_;

use crate::access::NodeEdge;
use crate::dtd::Dtd;
use crate::treedata::{Node, Tree};
use crate::xmlvalue::{Declaration, Element, Value};

/// Output of serialization
///
/// Each token is one piece of markup for a node in the tree. A leaf value
/// produces a single token; containers produce an opening and a closing
/// token around the tokens of their children.
#[derive(Debug, PartialEq)]
pub(crate) enum Output<'a> {
    /// `<?xml version='1.0'?>`
    Declaration(&'a Declaration),
    /// `<!DOCTYPE name` including any system or public id
    DoctypeOpen(&'a Dtd),
    /// `>` closing a DTD without internal subset
    DoctypeClose,
    /// ` [` opening the internal subset
    InternalSubsetOpen,
    /// `]>` closing the internal subset and the DTD
    InternalSubsetClose,
    /// `<!ATTLIST ...>`
    DtdAttlist(&'a str),
    /// `<!ELEMENT ...>`
    DtdElement(&'a str),
    /// `<!ENTITY ...>`
    DtdEntity(&'a str),
    /// `<!NOTATION ...>`
    DtdNotation(&'a str),
    /// `%name;`
    DtdParamEntityRef(&'a str),
    /// Start tag open, i.e `<foo`
    StartTagOpen(&'a Element),
    /// Attribute, i.e. `foo='bar'`
    Attribute(&'a str, &'a str),
    /// Start tag close, either `>` or `/>`
    StartTagClose,
    /// End tag, i.e. `</foo>`; empty for elements without children
    EndTag(&'a Element),
    /// Text, i.e. `foo`
    Text(&'a str),
    /// `<![CDATA[...]]>`
    CData(&'a str),
    /// `&#65;` or `&#x41;`
    CharRef(char, bool),
    /// `&name;`
    EntityRef(&'a str),
    /// Comment, i.e. `<!--foo-->`
    Comment(&'a str),
    /// Processing instruction, i.e. `<?foo bar?>`
    ProcessingInstruction(&'a str, Option<&'a str>),
}

pub(crate) fn gen_outputs(tree: &Tree, node: Node) -> impl Iterator<Item = (Node, Output<'_>)> + '_ {
    gen!({
        for edge in tree.traverse(node) {
            match edge {
                NodeEdge::Start(current_node) => {
                    let gen = gen_edge_start(tree, current_node);
                    for output in gen {
                        yield_!((current_node, output));
                    }
                }
                NodeEdge::End(current_node) => {
                    let gen = gen_edge_end(tree, current_node);
                    for output in gen {
                        yield_!((current_node, output));
                    }
                }
            }
        }
    })
    .into_iter()
}

fn gen_edge_start(tree: &Tree, node: Node) -> impl Iterator<Item = Output<'_>> + '_ {
    gen!({
        let has_children = tree.first_child(node).is_some();
        match tree.value(node) {
            Value::Document => {}
            Value::Declaration(declaration) => {
                yield_!(Output::Declaration(declaration));
            }
            Value::Dtd(dtd) => {
                yield_!(Output::DoctypeOpen(dtd));
                if has_children {
                    yield_!(Output::InternalSubsetOpen);
                } else {
                    yield_!(Output::DoctypeClose);
                }
            }
            Value::DtdAttlist(attlist) => {
                yield_!(Output::DtdAttlist(attlist.get()));
            }
            Value::DtdElement(element) => {
                yield_!(Output::DtdElement(element.get()));
            }
            Value::DtdEntity(entity) => {
                yield_!(Output::DtdEntity(entity.get()));
            }
            Value::DtdNotation(notation) => {
                yield_!(Output::DtdNotation(notation.get()));
            }
            Value::DtdParamEntityRef(reference) => {
                yield_!(Output::DtdParamEntityRef(reference.name()));
            }
            Value::Element(element) => {
                yield_!(Output::StartTagOpen(element));
                for attribute in element.attributes() {
                    yield_!(Output::Attribute(attribute.name(), attribute.value()));
                }
                yield_!(Output::StartTagClose);
            }
            Value::Text(text) => {
                yield_!(Output::Text(text.get()));
            }
            Value::CData(cdata) => {
                yield_!(Output::CData(cdata.get()));
            }
            Value::CharRef(char_ref) => {
                yield_!(Output::CharRef(char_ref.get(), char_ref.hex()));
            }
            Value::EntityRef(entity_ref) => {
                yield_!(Output::EntityRef(entity_ref.name()));
            }
            Value::Comment(comment) => {
                yield_!(Output::Comment(comment.get()));
            }
            Value::ProcessingInstruction(pi) => {
                yield_!(Output::ProcessingInstruction(pi.target(), pi.content()));
            }
        }
    })
    .into_iter()
}

fn gen_edge_end(tree: &Tree, node: Node) -> impl Iterator<Item = Output<'_>> + '_ {
    gen!({
        match tree.value(node) {
            Value::Element(element) => {
                yield_!(Output::EndTag(element));
            }
            Value::Dtd(_) => {
                if tree.first_child(node).is_some() {
                    yield_!(Output::InternalSubsetClose);
                }
            }
            _ => {}
        }
    })
    .into_iter()
}

/// Output token
///
/// This represents an [`Output`] as a rendered output token.
pub(crate) struct OutputToken {
    /// Whether the token is prefixed by a space character.
    pub(crate) space: bool,
    /// The token.
    ///
    /// This is a fragment of XML like `<foo` or `a='A'` or `/>`, etc.
    pub(crate) text: String,
}
