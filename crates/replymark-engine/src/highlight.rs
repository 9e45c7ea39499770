//! Search-hit highlighting for history previews.

use regex::RegexBuilder;

/// Escapes `text` and wraps every case-insensitive match of `query` in a
/// `<mark class="search-highlight">` tag.
///
/// The query is a literal string, not a pattern: regex metacharacters in
/// it are inert. An empty query returns the escaped text unchanged.
/// Matching runs against the escaped text, so a query containing `&`,
/// `<`, or `>` will not line up with its entity form; callers search
/// plain prose.
pub fn highlight_matches(text: &str, query: &str) -> String {
    let escaped = html_escape::encode_text(text);
    if query.is_empty() {
        return escaped.into_owned();
    }

    let pattern = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .expect("Invalid highlight regex");
    pattern
        .replace_all(&escaped, "<mark class=\"search-highlight\">$0</mark>")
        .into_owned()
}
