//! Context-aware output encoding
//!
//! Every user-supplied value is encoded for the context it lands in:
//! HTML text, HTML attribute, CSS value or URL. Stored options are
//! sanitized on the way in, but the renderer does not rely on that.

/// Escape for HTML text content.
pub fn html_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Escape for a double-quoted HTML attribute value.
pub fn html_attr(input: &str) -> String {
    // Same character set as text content; attributes are always emitted
    // double-quoted.
    html_text(input)
}

/// Encode for a CSS declaration value.
///
/// Whitelist filter: anything that could terminate the declaration or
/// open a new context (braces, semicolons, slashes, angle brackets,
/// backslashes) is dropped. Covers hex colors, keywords and font stacks.
pub fn css_value(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | ',' | '-' | '\'' | '#' | '.' | '%'))
        .collect()
}

/// Validate and encode an outbound link for an href attribute.
///
/// Only http(s) and site-relative URLs are accepted; anything else
/// (javascript:, data:, protocol-relative) yields `None` and the link is
/// omitted from the markup.
pub fn url_attr(input: &str) -> Option<String> {
    let trimmed = input.trim();
    let accepted = trimmed.starts_with("https://")
        || trimmed.starts_with("http://")
        || (trimmed.starts_with('/') && !trimmed.starts_with("//"));
    if !accepted {
        return None;
    }
    Some(html_attr(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_text_neutralizes_markup() {
        assert_eq!(
            html_text("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn html_attr_escapes_quotes() {
        assert_eq!(
            html_attr(r#"" onmouseover="steal()"#),
            "&quot; onmouseover=&quot;steal()"
        );
    }

    #[test]
    fn css_value_drops_declaration_breakouts() {
        assert_eq!(css_value("red;} body{display:none"), "red bodydisplaynone");
        assert_eq!(css_value("url(//evil)/*"), "urlevil");
    }

    #[test]
    fn css_value_keeps_font_stacks_and_colors() {
        assert_eq!(
            css_value("'Helvetica Neue', Helvetica, sans-serif"),
            "'Helvetica Neue', Helvetica, sans-serif"
        );
        assert_eq!(css_value("#E1195B"), "#E1195B");
    }

    #[test]
    fn url_attr_rejects_unsafe_schemes() {
        assert!(url_attr("javascript:alert(1)").is_none());
        assert!(url_attr("data:text/html,x").is_none());
        assert!(url_attr("//evil.example").is_none());
        assert_eq!(
            url_attr("https://example.com/privacy"),
            Some("https://example.com/privacy".to_string())
        );
        assert_eq!(url_attr("/privacy"), Some("/privacy".to_string()));
    }
}
