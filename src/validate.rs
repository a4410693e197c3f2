//! Character class and name checks from the XML 1.0 (Fifth Edition)
//! grammar.
//!
//! These are pure predicates; the node types turn a `false` into the
//! appropriate [`Error`](crate::Error).

use crate::error::Error;

/// `Char ::= #x9 | #xA | #xD | [#x20-#xD7FF] | [#xE000-#xFFFD] | [#x10000-#x10FFFF]`
pub fn is_xml_char(c: char) -> bool {
    matches!(c as u32,
        0x09 | 0x0A | 0x0D | 0x20..=0xD7FF | 0xE000..=0xFFFD | 0x0001_0000..=0x0010_FFFF
    )
}

/// `NameStartChar`, production `[4]`.
pub fn is_name_start_char(c: char) -> bool {
    matches!(c,
        ':' | 'A'..='Z' | '_' | 'a'..='z' |
        '\u{C0}'..='\u{D6}' | '\u{D8}'..='\u{F6}' | '\u{F8}'..='\u{2FF}' |
        '\u{370}'..='\u{37D}' | '\u{37F}'..='\u{1FFF}' |
        '\u{200C}'..='\u{200D}' | '\u{2070}'..='\u{218F}' |
        '\u{2C00}'..='\u{2FEF}' | '\u{3001}'..='\u{D7FF}' |
        '\u{F900}'..='\u{FDCF}' | '\u{FDF0}'..='\u{FFFD}' |
        '\u{10000}'..='\u{EFFFF}'
    )
}

/// `NameChar`, production `[4a]`.
pub fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '-' | '.' | '0'..='9' | '\u{B7}' |
            '\u{300}'..='\u{36F}' | '\u{203F}'..='\u{2040}'
        )
}

/// `PubidChar ::= #x20 | #xD | #xA | [a-zA-Z0-9] | [-'()+,./:=?;!*#@$_%]`
pub fn is_pubid_char(c: char) -> bool {
    matches!(c,
        ' ' | '\r' | '\n' |
        'a'..='z' | 'A'..='Z' | '0'..='9' |
        '-' | '\'' | '(' | ')' | '+' | ',' | '.' | '/' | ':' |
        '=' | '?' | ';' | '!' | '*' | '#' | '@' | '$' | '_' | '%'
    )
}

/// True if `s` is a non-empty XML `Name`.
pub fn is_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => is_name_start_char(first) && chars.all(is_name_char),
        None => false,
    }
}

/// True if every character of `s` is a legal XML character. The empty
/// string passes.
pub fn is_chars(s: &str) -> bool {
    s.chars().all(is_xml_char)
}

/// True if every character of `s` may appear in a public identifier.
pub fn is_pubid_chars(s: &str) -> bool {
    s.chars().all(is_pubid_char)
}

pub(crate) fn check_name(what: &'static str, value: &str) -> Result<(), Error> {
    if !is_name(value) {
        return Err(Error::InvalidFormat {
            what,
            value: value.to_string(),
        });
    }
    Ok(())
}

pub(crate) fn check_chars(what: &'static str, value: &str) -> Result<(), Error> {
    if !is_chars(value) {
        return Err(Error::InvalidFormat {
            what,
            value: value.to_string(),
        });
    }
    Ok(())
}
