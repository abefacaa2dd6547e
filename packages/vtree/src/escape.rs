use std::borrow::Cow;

/// Escapes the characters that are significant in markup (`&`, `<`, `>`, `"`, and `'`) by
/// replacing them with character references.
///
/// This is used for both text content and attribute values. The input is returned unchanged (and
/// without allocating) if it contains nothing that needs escaping.
///
/// # Example
///
/// ```
/// assert_eq!(vtree::escape("a < b && c"), "a &lt; b &amp;&amp; c");
/// assert_eq!(vtree::escape("plain"), "plain");
/// ```
pub fn escape(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(needs_escape) else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len() + 8);
    out.push_str(&text[..first]);
    for c in text[first..].chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

fn needs_escape(c: char) -> bool {
    matches!(c, '&' | '<' | '>' | '"' | '\'')
}
