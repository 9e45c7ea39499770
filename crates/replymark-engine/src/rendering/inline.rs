use regex::Regex;
use std::sync::OnceLock;

fn code_regex() -> &'static Regex {
    static CODE_REGEX: OnceLock<Regex> = OnceLock::new();
    CODE_REGEX.get_or_init(|| Regex::new(r"`([^`]+)`").expect("Invalid code span regex"))
}

fn bold_regex() -> &'static Regex {
    static BOLD_REGEX: OnceLock<Regex> = OnceLock::new();
    BOLD_REGEX.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").expect("Invalid bold regex"))
}

fn italic_regex() -> &'static Regex {
    static ITALIC_REGEX: OnceLock<Regex> = OnceLock::new();
    ITALIC_REGEX.get_or_init(|| Regex::new(r"\*(.+?)\*").expect("Invalid italic regex"))
}

/// Applies inline substitutions to one line's already-escaped text.
///
/// Passes run in a fixed order: code spans, then bold, then italic.
/// Code spans are raw zones that suppress the emphasis passes inside them,
/// and bold before italic keeps `**` from being eaten as two `*` matches.
/// Substitutions are non-recursive: replaced output is never re-scanned,
/// only the text between matches flows on to the remaining passes.
pub fn apply_inline(text: &str) -> String {
    wrap_matches(text, code_regex(), "code", apply_bold)
}

fn apply_bold(text: &str) -> String {
    wrap_matches(text, bold_regex(), "strong", apply_italic)
}

fn apply_italic(text: &str) -> String {
    wrap_matches(text, italic_regex(), "em", |s| s.to_string())
}

/// Wraps every match's capture in `<tag>…</tag>` and feeds the unmatched
/// gaps through `rest`, the remaining passes. Matched content is final.
fn wrap_matches(text: &str, re: &Regex, tag: &str, rest: impl Fn(&str) -> String) -> String {
    let mut out = String::new();
    let mut cursor = 0;
    for caps in re.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        out.push_str(&rest(&text[cursor..whole.start()]));
        out.push_str(&format!("<{tag}>{}</{tag}>", inner.as_str()));
        cursor = whole.end();
    }
    out.push_str(&rest(&text[cursor..]));
    out
}
