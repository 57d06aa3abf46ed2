//! HTML Escaping
//!
//! User-supplied text (titles, descriptions, comment bodies, handles)
//! must pass through [`escape_html`] before being composed into any
//! markup. Renderers on top of this crate are expected to use it
//! consistently; nothing in the data model is pre-escaped.

/// Escape the five HTML-significant characters in `input`.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_html("lost wallet near gate 3"), "lost wallet near gate 3");
    }

    #[test]
    fn test_script_tag_neutralized() {
        assert_eq!(
            escape_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_ampersand_first() {
        // "&lt;" must not double-escape into "&amp;lt;" on the way in,
        // but a literal "&" always becomes "&amp;".
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_quotes_escaped_for_attributes() {
        assert_eq!(escape_html(r#"say "hi""#), "say &quot;hi&quot;");
    }
}
