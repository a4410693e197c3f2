use std::io;

use crate::entity::{serialize_attribute, serialize_text};
use crate::error::Error;
use crate::treedata::{Node, Tree};

use super::xml::Parameters;
use super::{Output, OutputToken, Pretty};

pub(crate) struct XmlSerializer<'a> {
    tree: &'a Tree,
    parameters: Parameters,
}

impl<'a> XmlSerializer<'a> {
    pub(crate) fn new(tree: &'a Tree, parameters: Parameters) -> Self {
        Self { tree, parameters }
    }

    pub(crate) fn serialize<W: io::Write>(
        &mut self,
        w: &mut W,
        outputs: impl Iterator<Item = (Node, Output<'a>)>,
    ) -> Result<(), Error> {
        for (node, output) in outputs {
            self.serialize_node(w, node, output)?;
        }
        Ok(())
    }

    pub(crate) fn serialize_pretty<W: io::Write>(
        &mut self,
        w: &mut W,
        outputs: impl Iterator<Item = (Node, Output<'a>)>,
        top: Node,
    ) -> Result<(), Error> {
        let mut pretty = Pretty::new(self.tree, top);
        for (node, output) in outputs {
            if let Some(indentation) = pretty.prettify(node, &output) {
                w.write_all(self.parameters.newline.as_bytes())?;
                w.write_all(self.parameters.indent.repeat(indentation).as_bytes())?;
            }
            self.serialize_node(w, node, output)?;
        }
        Ok(())
    }

    pub(crate) fn serialize_node<W: io::Write>(
        &mut self,
        w: &mut W,
        node: Node,
        output: Output<'a>,
    ) -> Result<(), Error> {
        let data = self.render_output(node, &output)?;
        if data.space {
            w.write_all(b" ")?;
        }
        w.write_all(data.text.as_bytes())?;
        Ok(())
    }

    // identifiers cannot be escaped, so a value holding the quote character
    // cannot be written at all
    fn quoted(&self, value: &str) -> Result<String, Error> {
        let quote = self.parameters.quote();
        if value.contains(quote) {
            return Err(Error::QuoteConflict {
                value: value.to_string(),
                quote,
            });
        }
        Ok(format!("{}{}{}", quote, value, quote))
    }

    pub(crate) fn render_output(
        &mut self,
        node: Node,
        output: &Output<'a>,
    ) -> Result<OutputToken, Error> {
        use Output::*;
        let r = match output {
            Declaration(declaration) => {
                let mut text = format!("<?xml version={}", self.quoted(declaration.version())?);
                if let Some(encoding) = declaration.encoding() {
                    text.push_str(&format!(" encoding={}", self.quoted(encoding)?));
                }
                if let Some(standalone) = declaration.standalone() {
                    let standalone = if standalone { "yes" } else { "no" };
                    text.push_str(&format!(" standalone={}", self.quoted(standalone)?));
                }
                text.push_str("?>");
                OutputToken { space: false, text }
            }
            DoctypeOpen(dtd) => {
                let mut text = format!("<!DOCTYPE {}", dtd.name());
                match (dtd.pub_id(), dtd.sys_id()) {
                    (None, Some(sys_id)) => {
                        text.push_str(&format!(" SYSTEM {}", self.quoted(sys_id)?));
                    }
                    (Some(pub_id), Some(sys_id)) => {
                        text.push_str(&format!(
                            " PUBLIC {} {}",
                            self.quoted(pub_id)?,
                            self.quoted(sys_id)?
                        ));
                    }
                    (Some(_), None) => {
                        return Err(Error::InvariantViolation(
                            "public id requires a system id".into(),
                        ));
                    }
                    (None, None) => {}
                }
                OutputToken { space: false, text }
            }
            DoctypeClose => OutputToken {
                space: false,
                text: ">".to_string(),
            },
            InternalSubsetOpen => OutputToken {
                space: true,
                text: "[".to_string(),
            },
            InternalSubsetClose => OutputToken {
                space: false,
                text: "]>".to_string(),
            },
            DtdAttlist(text) => OutputToken {
                space: false,
                text: format!("<!ATTLIST {}>", text),
            },
            DtdElement(text) => OutputToken {
                space: false,
                text: format!("<!ELEMENT {}>", text),
            },
            DtdEntity(text) => OutputToken {
                space: false,
                text: format!("<!ENTITY {}>", text),
            },
            DtdNotation(text) => OutputToken {
                space: false,
                text: format!("<!NOTATION {}>", text),
            },
            DtdParamEntityRef(name) => OutputToken {
                space: false,
                text: format!("%{};", name),
            },
            StartTagOpen(element) => OutputToken {
                space: false,
                text: format!("<{}", element.name()),
            },
            Attribute(name, value) => {
                let quote = self.parameters.quote();
                OutputToken {
                    space: true,
                    text: format!(
                        "{}={}{}{}",
                        name,
                        quote,
                        serialize_attribute((*value).into(), quote),
                        quote
                    ),
                }
            }
            StartTagClose => {
                if self.tree.first_child(node).is_none() {
                    OutputToken {
                        space: false,
                        text: "/>".to_string(),
                    }
                } else {
                    OutputToken {
                        space: false,
                        text: ">".to_string(),
                    }
                }
            }
            EndTag(element) => {
                if self.tree.first_child(node).is_some() {
                    OutputToken {
                        space: false,
                        text: format!("</{}>", element.name()),
                    }
                } else {
                    OutputToken {
                        space: false,
                        text: "".to_string(),
                    }
                }
            }
            Text(text) => OutputToken {
                space: false,
                text: serialize_text((*text).into()).to_string(),
            },
            CData(text) => OutputToken {
                space: false,
                text: format!("<![CDATA[{}]]>", text),
            },
            CharRef(c, hex) => {
                let text = if *hex {
                    format!("&#x{:X};", *c as u32)
                } else {
                    format!("&#{};", *c as u32)
                };
                OutputToken { space: false, text }
            }
            EntityRef(name) => OutputToken {
                space: false,
                text: format!("&{};", name),
            },
            Comment(text) => OutputToken {
                space: false,
                text: format!("<!--{}-->", text),
            },
            ProcessingInstruction(target, content) => {
                let text = if let Some(content) = content {
                    format!("<?{} {}?>", target, content)
                } else {
                    format!("<?{}?>", target)
                };
                OutputToken { space: false, text }
            }
        };
        Ok(r)
    }
}
