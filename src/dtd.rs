//! Document type declaration values.
//!
//! A [`Dtd`] node renders as `<!DOCTYPE ...>` and holds the internal subset
//! as its children. The declaration kinds that may appear in the subset
//! are plain leaf values; their content is not interpreted beyond a
//! character check.

use crate::error::Error;
use crate::validate::{check_chars, check_name, is_chars, is_pubid_chars};
use crate::xmlvalue::ValueType;

/// The kinds of node that may appear in a DTD internal subset.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum DtdChild {
    Attlist,
    Element,
    Entity,
    Notation,
    ParamEntityRef,
    Comment,
    ProcessingInstruction,
}

impl TryFrom<ValueType> for DtdChild {
    type Error = Error;

    fn try_from(value_type: ValueType) -> Result<Self, Self::Error> {
        match value_type {
            ValueType::DtdAttlist => Ok(DtdChild::Attlist),
            ValueType::DtdElement => Ok(DtdChild::Element),
            ValueType::DtdEntity => Ok(DtdChild::Entity),
            ValueType::DtdNotation => Ok(DtdChild::Notation),
            ValueType::DtdParamEntityRef => Ok(DtdChild::ParamEntityRef),
            ValueType::Comment => Ok(DtdChild::Comment),
            ValueType::ProcessingInstruction => Ok(DtdChild::ProcessingInstruction),
            ValueType::Document
            | ValueType::Declaration
            | ValueType::Dtd
            | ValueType::Element
            | ValueType::Text
            | ValueType::CData
            | ValueType::CharRef
            | ValueType::EntityRef => Err(Error::InvalidArgument(format!(
                "{:?} cannot appear in a DTD",
                value_type
            ))),
        }
    }
}

/// Document type declaration.
///
/// Example: `<!DOCTYPE html PUBLIC '-//W3C//DTD XHTML 1.0 Strict//EN' 'strict.dtd'>`.
///
/// A public id can only be present together with a system id. Every
/// setter checks its value, and this rule, before changing anything.
///
/// ```rust
/// use xmlwright::{Dtd, Error};
///
/// let mut dtd = Dtd::new("note", Some("note.dtd"), Some("-//example//note"))?;
/// assert!(matches!(dtd.set_sys_id(None), Err(Error::InvariantViolation(_))));
/// assert_eq!(dtd.sys_id(), Some("note.dtd"));
///
/// dtd.set_pub_id(None)?;
/// dtd.set_sys_id(None)?;
/// assert_eq!(dtd.sys_id(), None);
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dtd {
    pub(crate) name: String,
    pub(crate) sys_id: Option<String>,
    pub(crate) pub_id: Option<String>,
}

impl Dtd {
    /// Create a DTD value with a root element name and optional identifiers.
    pub fn new(name: &str, sys_id: Option<&str>, pub_id: Option<&str>) -> Result<Self, Error> {
        check_name("DTD name", name)?;
        if let Some(sys_id) = sys_id {
            check_sys_id(sys_id)?;
        }
        if let Some(pub_id) = pub_id {
            check_pub_id(pub_id)?;
            if sys_id.is_none() {
                return Err(Error::InvariantViolation(
                    "public id requires a system id".into(),
                ));
            }
        }
        Ok(Dtd {
            name: name.to_string(),
            sys_id: sys_id.map(str::to_string),
            pub_id: pub_id.map(str::to_string),
        })
    }

    /// The name of the document element this DTD describes.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name<S: Into<String>>(&mut self, name: S) -> Result<(), Error> {
        let name = name.into();
        check_name("DTD name", &name)?;
        self.name = name;
        Ok(())
    }

    /// The system identifier.
    pub fn sys_id(&self) -> Option<&str> {
        self.sys_id.as_deref()
    }

    /// Set or clear the system identifier.
    ///
    /// A system id may contain `'` or `"`, but not both. It cannot be
    /// cleared while a public id is set.
    pub fn set_sys_id(&mut self, sys_id: Option<&str>) -> Result<(), Error> {
        match sys_id {
            Some(sys_id) => {
                check_sys_id(sys_id)?;
                self.sys_id = Some(sys_id.to_string());
            }
            None => {
                if self.pub_id.is_some() {
                    return Err(Error::InvariantViolation(
                        "cannot remove system id while a public id is set".into(),
                    ));
                }
                self.sys_id = None;
            }
        }
        Ok(())
    }

    /// The public identifier.
    pub fn pub_id(&self) -> Option<&str> {
        self.pub_id.as_deref()
    }

    /// Set or clear the public identifier.
    ///
    /// Setting a public id requires a system id to be present already.
    pub fn set_pub_id(&mut self, pub_id: Option<&str>) -> Result<(), Error> {
        match pub_id {
            Some(pub_id) => {
                check_pub_id(pub_id)?;
                if self.sys_id.is_none() {
                    return Err(Error::InvariantViolation(
                        "public id requires a system id".into(),
                    ));
                }
                self.pub_id = Some(pub_id.to_string());
            }
            None => self.pub_id = None,
        }
        Ok(())
    }
}

fn check_sys_id(sys_id: &str) -> Result<(), Error> {
    if !is_chars(sys_id) || (sys_id.contains('\'') && sys_id.contains('"')) {
        return Err(Error::InvalidFormat {
            what: "system id",
            value: sys_id.to_string(),
        });
    }
    Ok(())
}

fn check_pub_id(pub_id: &str) -> Result<(), Error> {
    if !is_pubid_chars(pub_id) {
        return Err(Error::InvalidFormat {
            what: "public id",
            value: pub_id.to_string(),
        });
    }
    Ok(())
}

macro_rules! dtd_declaration {
    ($(#[$meta:meta])* $name:ident, $what:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            pub(crate) text: String,
        }

        impl $name {
            pub(crate) fn new(text: &str) -> Result<Self, Error> {
                check_chars($what, text)?;
                Ok($name {
                    text: text.to_string(),
                })
            }

            /// The declaration body, written verbatim between the keyword and `>`.
            pub fn get(&self) -> &str {
                &self.text
            }

            /// Set the declaration body.
            pub fn set<S: Into<String>>(&mut self, text: S) -> Result<(), Error> {
                let text = text.into();
                check_chars($what, &text)?;
                self.text = text;
                Ok(())
            }
        }
    };
}

dtd_declaration!(
    /// Attribute list declaration.
    ///
    /// Example: `<!ATTLIST img src CDATA #REQUIRED>`; the value holds
    /// `img src CDATA #REQUIRED`.
    DtdAttlist,
    "attribute list declaration"
);

dtd_declaration!(
    /// Element type declaration.
    ///
    /// Example: `<!ELEMENT note (to,from)>`.
    DtdElement,
    "element declaration"
);

dtd_declaration!(
    /// Entity declaration.
    ///
    /// Example: `<!ENTITY copy "&#169;">`.
    DtdEntity,
    "entity declaration"
);

dtd_declaration!(
    /// Notation declaration.
    ///
    /// Example: `<!NOTATION gif SYSTEM "image/gif">`.
    DtdNotation,
    "notation declaration"
);

/// Parameter entity reference inside a DTD.
///
/// Example: `%common;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DtdParamEntityRef {
    pub(crate) name: String,
}

impl DtdParamEntityRef {
    pub(crate) fn new(name: &str) -> Result<Self, Error> {
        check_name("parameter entity name", name)?;
        Ok(DtdParamEntityRef {
            name: name.to_string(),
        })
    }

    /// The referenced parameter entity.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name<S: Into<String>>(&mut self, name: S) -> Result<(), Error> {
        let name = name.into();
        check_name("parameter entity name", &name)?;
        self.name = name;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_new_rejects_pub_id_without_sys_id() {
        let err = Dtd::new("note", None, Some("-//x//y")).unwrap_err();
        assert!(matches!(err, Error::InvariantViolation(_)));
    }

    #[rstest]
    #[case("")]
    #[case("1note")]
    #[case("no te")]
    fn test_new_rejects_bad_name(#[case] name: &str) {
        let err = Dtd::new(name, None, None).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat { what: "DTD name", .. }));
    }

    #[rstest]
    #[case("a'b\"c")]
    #[case("bad\u{1}")]
    fn test_sys_id_rejected(#[case] sys_id: &str) {
        let mut dtd = Dtd::new("note", None, None).unwrap();
        let err = dtd.set_sys_id(Some(sys_id)).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat { what: "system id", .. }));
        assert_eq!(dtd.sys_id(), None);
    }

    #[test]
    fn test_sys_id_with_one_kind_of_quote() {
        let mut dtd = Dtd::new("note", None, None).unwrap();
        dtd.set_sys_id(Some("it's.dtd")).unwrap();
        dtd.set_sys_id(Some("say \"hi\".dtd")).unwrap();
        assert_eq!(dtd.sys_id(), Some("say \"hi\".dtd"));
    }

    #[test]
    fn test_pub_id_rejects_non_pubid_chars() {
        let mut dtd = Dtd::new("note", Some("note.dtd"), None).unwrap();
        let err = dtd.set_pub_id(Some("quote\"")).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat { what: "public id", .. }));
        assert_eq!(dtd.pub_id(), None);
    }

    #[test]
    fn test_pub_id_requires_sys_id() {
        let mut dtd = Dtd::new("note", None, None).unwrap();
        let err = dtd.set_pub_id(Some("-//x//y")).unwrap_err();
        assert!(matches!(err, Error::InvariantViolation(_)));
        dtd.set_pub_id(None).unwrap();
    }

    #[test]
    fn test_dtd_child_kinds() {
        assert_eq!(
            DtdChild::try_from(ValueType::DtdEntity).unwrap(),
            DtdChild::Entity
        );
        assert!(DtdChild::try_from(ValueType::Text).is_err());
        assert!(DtdChild::try_from(ValueType::Dtd).is_err());
    }

    #[test]
    fn test_declaration_rejects_illegal_chars() {
        assert!(DtdEntity::new("abc \u{8}").is_err());
        let mut notation = DtdNotation::new("gif SYSTEM 'gif'").unwrap();
        assert!(notation.set("\u{B}").is_err());
        assert_eq!(notation.get(), "gif SYSTEM 'gif'");
    }

    #[test]
    fn test_param_entity_ref_requires_name() {
        assert!(DtdParamEntityRef::new("common").is_ok());
        assert!(DtdParamEntityRef::new("com mon").is_err());
    }
}
