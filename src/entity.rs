use std::borrow::Cow;

// returns the content unchanged if nothing needs escaping
fn escape<F>(content: Cow<str>, entity_for: F) -> Cow<str>
where
    F: Fn(char) -> Option<&'static str>,
{
    if !content.chars().any(|c| entity_for(c).is_some()) {
        return content;
    }
    let mut result = String::with_capacity(content.len() + 8);
    for c in content.chars() {
        match entity_for(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    result.into()
}

pub(crate) fn serialize_text(content: Cow<str>) -> Cow<str> {
    escape(content, |c| match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        _ => None,
    })
}

pub(crate) fn serialize_attribute(content: Cow<str>, quote: char) -> Cow<str> {
    escape(content, |c| match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '"' if quote == '"' => Some("&quot;"),
        '\'' if quote == '\'' => Some("&apos;"),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_text() {
        let text = "A & B <c> 'd' \"e\"";
        assert_eq!(
            serialize_text(text.into()),
            "A &amp; B &lt;c&gt; 'd' \"e\""
        );
    }

    #[test]
    fn test_serialize_attribute_single_quote() {
        let text = "it's \"x\" & <y>";
        assert_eq!(
            serialize_attribute(text.into(), '\''),
            "it&apos;s \"x\" &amp; &lt;y>"
        );
    }

    #[test]
    fn test_serialize_attribute_double_quote() {
        let text = "it's \"x\"";
        assert_eq!(
            serialize_attribute(text.into(), '"'),
            "it's &quot;x&quot;"
        );
    }

    #[test]
    fn test_serialize_no_entities() {
        let text = "hello";
        let result = serialize_text(text.into());
        // this is the same slice
        assert!(std::ptr::eq(text, result.as_ref()));
    }
}
