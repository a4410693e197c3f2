use crate::dtd::{Dtd, DtdAttlist, DtdElement, DtdEntity, DtdNotation, DtdParamEntityRef};
use crate::error::Error;
use crate::validate::{check_chars, check_name, is_xml_char};

/// The type of the XML node.
///
/// Access it using [`Value::value_type`] or
/// [`Tree::value_type`](crate::Tree::value_type).
///
/// The `ValueType` can be used if you are interested in
/// the type of the value without needing to match on it.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ValueType {
    /// Document that holds everything. Note that this not the same as the
    /// document element.
    Document,
    /// XML declaration, i.e. `<?xml version='1.0'?>`.
    Declaration,
    /// Document type declaration with its internal subset.
    Dtd,
    /// `<!ATTLIST ...>` in a DTD.
    DtdAttlist,
    /// `<!ELEMENT ...>` in a DTD.
    DtdElement,
    /// `<!ENTITY ...>` in a DTD.
    DtdEntity,
    /// `<!NOTATION ...>` in a DTD.
    DtdNotation,
    /// `%name;` in a DTD.
    DtdParamEntityRef,
    /// Element; it has a name and attributes.
    Element,
    /// Text. You can get and set the text value.
    Text,
    /// CDATA section.
    CData,
    /// Character reference, i.e. `&#x41;`.
    CharRef,
    /// Entity reference, i.e. `&amp;`.
    EntityRef,
    /// Comment.
    Comment,
    /// Processing instruction.
    ProcessingInstruction,
}

impl ValueType {
    /// Whether nodes of this type can hold children.
    pub fn is_container(&self) -> bool {
        matches!(self, ValueType::Document | ValueType::Element | ValueType::Dtd)
    }

    // content that flows with text; an element holding any of these is
    // serialized without added whitespace
    pub(crate) fn is_inline(&self) -> bool {
        matches!(
            self,
            ValueType::Text | ValueType::CData | ValueType::CharRef | ValueType::EntityRef
        )
    }
}

/// An XML value.
///
/// Access it using [`Tree::value`](crate::Tree::value), or mutably through
/// the typed accessors such as [`Tree::element_mut`](crate::Tree::element_mut).
#[derive(Debug, Clone)]
pub enum Value {
    /// Document that holds everything.
    Document,
    /// XML declaration.
    Declaration(Declaration),
    /// Document type declaration.
    Dtd(Dtd),
    /// Attribute list declaration.
    DtdAttlist(DtdAttlist),
    /// Element type declaration.
    DtdElement(DtdElement),
    /// Entity declaration.
    DtdEntity(DtdEntity),
    /// Notation declaration.
    DtdNotation(DtdNotation),
    /// Parameter entity reference.
    DtdParamEntityRef(DtdParamEntityRef),
    /// Element; it has a name and attributes.
    Element(Element),
    /// Text.
    Text(Text),
    /// CDATA section.
    CData(CData),
    /// Character reference.
    CharRef(CharRef),
    /// Entity reference.
    EntityRef(EntityRef),
    /// Comment.
    Comment(Comment),
    /// Processing instruction.
    ProcessingInstruction(ProcessingInstruction),
}

impl Value {
    /// Returns the type of the XML value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Document => ValueType::Document,
            Value::Declaration(_) => ValueType::Declaration,
            Value::Dtd(_) => ValueType::Dtd,
            Value::DtdAttlist(_) => ValueType::DtdAttlist,
            Value::DtdElement(_) => ValueType::DtdElement,
            Value::DtdEntity(_) => ValueType::DtdEntity,
            Value::DtdNotation(_) => ValueType::DtdNotation,
            Value::DtdParamEntityRef(_) => ValueType::DtdParamEntityRef,
            Value::Element(_) => ValueType::Element,
            Value::Text(_) => ValueType::Text,
            Value::CData(_) => ValueType::CData,
            Value::CharRef(_) => ValueType::CharRef,
            Value::EntityRef(_) => ValueType::EntityRef,
            Value::Comment(_) => ValueType::Comment,
            Value::ProcessingInstruction(_) => ValueType::ProcessingInstruction,
        }
    }
}

/// XML declaration value.
///
/// Example: `<?xml version='1.0' encoding='UTF-8' standalone='yes'?>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub(crate) version: String,
    pub(crate) encoding: Option<String>,
    pub(crate) standalone: Option<bool>,
}

impl Default for Declaration {
    fn default() -> Self {
        Declaration {
            version: "1.0".to_string(),
            encoding: None,
            standalone: None,
        }
    }
}

impl Declaration {
    /// The XML version, `1.0` unless changed.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Set the version. It must be `1.` followed by one or more digits.
    pub fn set_version<S: Into<String>>(&mut self, version: S) -> Result<(), Error> {
        let version = version.into();
        let valid = version
            .strip_prefix("1.")
            .is_some_and(|minor| !minor.is_empty() && minor.chars().all(|c| c.is_ascii_digit()));
        if !valid {
            return Err(Error::InvalidFormat {
                what: "version",
                value: version,
            });
        }
        self.version = version;
        Ok(())
    }

    pub fn encoding(&self) -> Option<&str> {
        self.encoding.as_deref()
    }

    /// Set the encoding name, i.e. `UTF-8`.
    pub fn set_encoding(&mut self, encoding: Option<&str>) -> Result<(), Error> {
        if let Some(encoding) = encoding {
            let mut chars = encoding.chars();
            let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
            if !valid {
                return Err(Error::InvalidFormat {
                    what: "encoding",
                    value: encoding.to_string(),
                });
            }
        }
        self.encoding = encoding.map(str::to_string);
        Ok(())
    }

    pub fn standalone(&self) -> Option<bool> {
        self.standalone
    }

    /// Set the standalone flag; `None` leaves it out of the declaration.
    pub fn set_standalone(&mut self, standalone: Option<bool>) {
        self.standalone = standalone;
    }
}

/// An attribute on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub(crate) name: String,
    pub(crate) value: String,
}

impl Attribute {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// XML element value.
///
/// Example: `<foo/>` or `<foo bar='baz'/>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub(crate) name: String,
    pub(crate) attributes: Vec<Attribute>,
}

impl Element {
    pub(crate) fn new(name: &str) -> Result<Self, Error> {
        check_name("element name", name)?;
        Ok(Element {
            name: name.to_string(),
            attributes: Vec::new(),
        })
    }

    /// The name of the element.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the element.
    pub fn set_name<S: Into<String>>(&mut self, name: S) -> Result<(), Error> {
        let name = name.into();
        check_name("element name", &name)?;
        self.name = name;
        Ok(())
    }

    /// The attributes of the element, in insertion order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Get an attribute value by name.
    ///
    /// ```rust
    /// use xmlwright::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let doc = tree.new_element("doc")?;
    /// let element = tree.element_mut(doc).unwrap();
    /// element.add_attribute("a", "A")?;
    ///
    /// assert_eq!(element.get_attribute("a"), Some("A"));
    /// assert_eq!(element.get_attribute("b"), None);
    /// # Ok::<(), xmlwright::Error>(())
    /// ```
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| attribute.value.as_str())
    }

    /// Add a new attribute.
    ///
    /// Rejects a name that is already present on this element.
    pub fn add_attribute(&mut self, name: &str, value: &str) -> Result<(), Error> {
        check_name("attribute name", name)?;
        check_chars("attribute value", value)?;
        if self.get_attribute(name).is_some() {
            return Err(Error::DuplicateAttribute(name.to_string()));
        }
        self.attributes.push(Attribute {
            name: name.to_string(),
            value: value.to_string(),
        });
        Ok(())
    }

    /// Set an attribute value, replacing any existing value in place.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), Error> {
        check_chars("attribute value", value)?;
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(attribute) => {
                attribute.value = value.to_string();
                Ok(())
            }
            None => self.add_attribute(name, value),
        }
    }

    /// Remove an attribute. Returns the old value if it was present.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let index = self.attributes.iter().position(|a| a.name == name)?;
        Some(self.attributes.remove(index).value)
    }
}

/// XML text value.
///
/// Example: `Bar` in `<foo>Bar</foo>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub(crate) text: String,
}

impl Text {
    pub(crate) fn new(text: &str) -> Result<Self, Error> {
        check_chars("text", text)?;
        Ok(Text {
            text: text.to_string(),
        })
    }

    /// Get the text value.
    pub fn get(&self) -> &str {
        &self.text
    }

    /// Set the text value. Markup characters are escaped on output.
    pub fn set<S: Into<String>>(&mut self, text: S) -> Result<(), Error> {
        let text = text.into();
        check_chars("text", &text)?;
        self.text = text;
        Ok(())
    }
}

/// CDATA section.
///
/// Example: `<![CDATA[a < b]]>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CData {
    pub(crate) text: String,
}

impl CData {
    pub(crate) fn new(text: &str) -> Result<Self, Error> {
        Self::check(text)?;
        Ok(CData {
            text: text.to_string(),
        })
    }

    fn check(text: &str) -> Result<(), Error> {
        check_chars("CDATA", text)?;
        if text.contains("]]>") {
            return Err(Error::InvalidFormat {
                what: "CDATA",
                value: text.to_string(),
            });
        }
        Ok(())
    }

    pub fn get(&self) -> &str {
        &self.text
    }

    /// Set the content. Rejects content containing `]]>`.
    pub fn set<S: Into<String>>(&mut self, text: S) -> Result<(), Error> {
        let text = text.into();
        Self::check(&text)?;
        self.text = text;
        Ok(())
    }
}

/// Character reference.
///
/// Example: `&#65;` or, in hexadecimal form, `&#x41;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharRef {
    pub(crate) char: char,
    pub(crate) hex: bool,
}

impl CharRef {
    pub(crate) fn new(char: char, hex: bool) -> Result<Self, Error> {
        Self::check(char)?;
        Ok(CharRef { char, hex })
    }

    fn check(char: char) -> Result<(), Error> {
        if !is_xml_char(char) {
            return Err(Error::InvalidFormat {
                what: "character reference",
                value: char.to_string(),
            });
        }
        Ok(())
    }

    /// The referenced character.
    pub fn get(&self) -> char {
        self.char
    }

    pub fn set(&mut self, char: char) -> Result<(), Error> {
        Self::check(char)?;
        self.char = char;
        Ok(())
    }

    /// Whether the reference is written in hexadecimal.
    pub fn hex(&self) -> bool {
        self.hex
    }

    pub fn set_hex(&mut self, hex: bool) {
        self.hex = hex;
    }
}

/// Entity reference.
///
/// Example: `&copy;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRef {
    pub(crate) name: String,
}

impl EntityRef {
    pub(crate) fn new(name: &str) -> Result<Self, Error> {
        check_name("entity name", name)?;
        Ok(EntityRef {
            name: name.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name<S: Into<String>>(&mut self, name: S) -> Result<(), Error> {
        let name = name.into();
        check_name("entity name", &name)?;
        self.name = name;
        Ok(())
    }
}

/// XML comment.
///
/// Example: `<!-- foo -->`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub(crate) text: String,
}

impl Comment {
    pub(crate) fn new(text: &str) -> Result<Self, Error> {
        Self::check(text)?;
        Ok(Comment {
            text: text.to_string(),
        })
    }

    fn check(text: &str) -> Result<(), Error> {
        check_chars("comment", text)?;
        if text.contains("--") || text.ends_with('-') {
            return Err(Error::InvalidFormat {
                what: "comment",
                value: text.to_string(),
            });
        }
        Ok(())
    }

    /// Get the comment text.
    pub fn get(&self) -> &str {
        &self.text
    }

    /// Set the comment text.
    ///
    /// Rejects comments that contain `--` or end with `-` as illegal.
    pub fn set<S: Into<String>>(&mut self, text: S) -> Result<(), Error> {
        let text = text.into();
        Self::check(&text)?;
        self.text = text;
        Ok(())
    }
}

/// XML processing instruction value.
///
/// Example: `<?foo?>` or `<?foo bar?>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingInstruction {
    pub(crate) target: String,
    pub(crate) content: Option<String>,
}

impl ProcessingInstruction {
    pub(crate) fn new(target: &str, content: Option<&str>) -> Result<Self, Error> {
        Self::check_target(target)?;
        if let Some(content) = content {
            Self::check_content(content)?;
        }
        Ok(ProcessingInstruction {
            target: target.to_string(),
            content: content.filter(|c| !c.is_empty()).map(str::to_string),
        })
    }

    fn check_target(target: &str) -> Result<(), Error> {
        check_name("processing instruction target", target)?;
        if target.eq_ignore_ascii_case("xml") {
            return Err(Error::InvalidFormat {
                what: "processing instruction target",
                value: target.to_string(),
            });
        }
        Ok(())
    }

    fn check_content(content: &str) -> Result<(), Error> {
        check_chars("processing instruction content", content)?;
        if content.contains("?>") {
            return Err(Error::InvalidFormat {
                what: "processing instruction content",
                value: content.to_string(),
            });
        }
        Ok(())
    }

    /// Get processing instruction target.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Get processing instruction content.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Set target.
    ///
    /// Rejects any target that is the string `"xml"` (or case variations) as
    /// it's reserved for XML.
    pub fn set_target<S: Into<String>>(&mut self, target: S) -> Result<(), Error> {
        let target = target.into();
        Self::check_target(&target)?;
        self.target = target;
        Ok(())
    }

    /// Set content. Empty content is dropped.
    pub fn set_content(&mut self, content: Option<&str>) -> Result<(), Error> {
        let content = content.filter(|c| !c.is_empty());
        if let Some(content) = content {
            Self::check_content(content)?;
        }
        self.content = content.map(str::to_string);
        Ok(())
    }
}
