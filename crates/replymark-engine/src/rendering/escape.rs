use std::borrow::Cow;

/// HTML-escapes raw reply text.
///
/// Replaces the three characters that can break HTML parsing or enable
/// injection: `&` → `&amp;`, `<` → `&lt;`, `>` → `&gt;`. Nothing else is
/// touched; quotes stay as-is because the output is never placed inside an
/// attribute. Must run exactly once per render, before block
/// classification: a second pass would double-escape.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}
