//! Text escaping shared by the HTML and SVG emitters

/// Escape text for XML/HTML content and double-quoted attributes
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Make free text safe as a CSS declaration value
///
/// Drops characters that end a declaration or block (`;{}\<>` and
/// control characters) and quotes that are left unbalanced.
pub fn sanitize_css_value(value: &str) -> String {
    let kept: String = value
        .chars()
        .filter(|c| !matches!(c, ';' | '{' | '}' | '\\' | '<' | '>') && !c.is_control())
        .collect();

    let unbalanced = |q: char| kept.matches(q).count() % 2 == 1;
    let (drop_double, drop_single) = (unbalanced('"'), unbalanced('\''));
    kept.chars()
        .filter(|c| !(drop_double && *c == '"') && !(drop_single && *c == '\''))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape_xml("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
        assert_eq!(escape_xml("'Segoe UI'"), "&#39;Segoe UI&#39;");
        assert_eq!(escape_xml("plain"), "plain");
    }

    #[test]
    fn test_sanitize_css_value() {
        assert_eq!(
            sanitize_css_value("system-ui, 'Segoe UI', sans-serif"),
            "system-ui, 'Segoe UI', sans-serif"
        );
        assert_eq!(
            sanitize_css_value("Arial; } .card { display: none }"),
            "Arial  .card  display: none "
        );
        assert_eq!(sanitize_css_value("\"Open Sans"), "Open Sans");
        assert_eq!(sanitize_css_value("a\nb</style>"), "ab/style");
    }
}
