use regex::Regex;
use std::sync::OnceLock;

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of rendering: each line is classified independently,
/// without reference to the surrounding list state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A `#`/`##`/`###` heading. `level` is the output element level
    /// (h2-h4): one more than the marker count, since h1 is reserved for
    /// page-level titles.
    Heading { level: u8, text: &'a str },
    /// A line that is nothing but `**bold**` after trimming, promoted to
    /// an h3 heading.
    BoldHeading { text: &'a str },
    /// A numbered list item (`1.` or `1)` marker). The source numeral is
    /// discarded; HTML list numbering takes over.
    OrderedItem { text: &'a str },
    /// A bullet list item (`-`, `*`, or `•` marker).
    UnorderedItem { text: &'a str },
    /// A whitespace-only line.
    Blank,
    /// Anything else; rendered as a paragraph.
    Plain { text: &'a str },
}

fn heading_regex() -> &'static Regex {
    static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
    HEADING_REGEX
        .get_or_init(|| Regex::new(r"^(#{1,3})\s+(.+)$").expect("Invalid heading regex"))
}

fn bold_heading_regex() -> &'static Regex {
    static BOLD_HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
    BOLD_HEADING_REGEX
        .get_or_init(|| Regex::new(r"^\*\*(.+?)\*\*$").expect("Invalid bold heading regex"))
}

fn ordered_item_regex() -> &'static Regex {
    static ORDERED_ITEM_REGEX: OnceLock<Regex> = OnceLock::new();
    ORDERED_ITEM_REGEX
        .get_or_init(|| Regex::new(r"^\s*[0-9]+[.)]\s+(.+)$").expect("Invalid ordered item regex"))
}

fn bullet_item_regex() -> &'static Regex {
    static BULLET_ITEM_REGEX: OnceLock<Regex> = OnceLock::new();
    BULLET_ITEM_REGEX
        .get_or_init(|| Regex::new(r"^\s*[-*•]\s+(.+)$").expect("Invalid bullet item regex"))
}

/// Classifies a line into a [`LineKind`].
///
/// Patterns are tried in a fixed priority order because a line can match
/// more than one of them (a `**bold**` payload inside a list item, for
/// example): heading, bold-only heading, numbered item, bullet item,
/// blank, paragraph. First match wins.
pub fn classify(line: &str) -> LineKind<'_> {
    let line = line.strip_suffix('\r').unwrap_or(line);

    if let Some(caps) = heading_regex().captures(line) {
        let (_, [markers, text]) = caps.extract();
        return LineKind::Heading {
            level: markers.len() as u8 + 1,
            text,
        };
    }

    let trimmed = line.trim();
    if let Some(caps) = bold_heading_regex().captures(trimmed) {
        let (_, [text]) = caps.extract();
        return LineKind::BoldHeading { text };
    }

    if let Some(caps) = ordered_item_regex().captures(line) {
        let (_, [text]) = caps.extract();
        return LineKind::OrderedItem { text };
    }

    if let Some(caps) = bullet_item_regex().captures(line) {
        let (_, [text]) = caps.extract();
        return LineKind::UnorderedItem { text };
    }

    if trimmed.is_empty() {
        return LineKind::Blank;
    }

    LineKind::Plain { text: line }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_count_maps_to_h2_through_h4() {
        assert_eq!(
            classify("# Title"),
            LineKind::Heading { level: 2, text: "Title" }
        );
        assert_eq!(
            classify("## Subtitle"),
            LineKind::Heading { level: 3, text: "Subtitle" }
        );
        assert_eq!(
            classify("### Deep"),
            LineKind::Heading { level: 4, text: "Deep" }
        );
    }

    #[test]
    fn four_markers_is_not_a_heading() {
        assert_eq!(
            classify("#### Too deep"),
            LineKind::Plain { text: "#### Too deep" }
        );
    }

    #[test]
    fn heading_requires_whitespace_after_markers() {
        assert_eq!(classify("#Title"), LineKind::Plain { text: "#Title" });
    }

    #[test]
    fn bold_only_line_is_a_heading() {
        assert_eq!(
            classify("**Summary**"),
            LineKind::BoldHeading { text: "Summary" }
        );
    }

    #[test]
    fn bold_only_line_may_carry_surrounding_whitespace() {
        assert_eq!(
            classify("  **Summary**  "),
            LineKind::BoldHeading { text: "Summary" }
        );
    }

    #[test]
    fn bold_with_trailing_text_is_a_paragraph() {
        assert_eq!(
            classify("**Summary** continued"),
            LineKind::Plain { text: "**Summary** continued" }
        );
    }

    #[test]
    fn numbered_items_accept_dot_and_paren_markers() {
        assert_eq!(classify("1. one"), LineKind::OrderedItem { text: "one" });
        assert_eq!(classify("12) twelve"), LineKind::OrderedItem { text: "twelve" });
        assert_eq!(classify("  3. three"), LineKind::OrderedItem { text: "three" });
    }

    #[test]
    fn numeral_is_not_part_of_the_item_text() {
        assert_eq!(classify("7. seven"), LineKind::OrderedItem { text: "seven" });
    }

    #[test]
    fn bullet_items_accept_all_three_marker_characters() {
        assert_eq!(classify("- dash"), LineKind::UnorderedItem { text: "dash" });
        assert_eq!(classify("* star"), LineKind::UnorderedItem { text: "star" });
        assert_eq!(classify("• dot"), LineKind::UnorderedItem { text: "dot" });
    }

    #[test]
    fn list_marker_requires_following_whitespace() {
        assert_eq!(classify("-dash"), LineKind::Plain { text: "-dash" });
        assert_eq!(classify("1.one"), LineKind::Plain { text: "1.one" });
    }

    #[test]
    fn bold_payload_in_a_list_stays_a_list_item() {
        assert_eq!(
            classify("- **important**"),
            LineKind::UnorderedItem { text: "**important**" }
        );
    }

    #[test]
    fn whitespace_only_lines_are_blank() {
        assert_eq!(classify(""), LineKind::Blank);
        assert_eq!(classify("   "), LineKind::Blank);
        assert_eq!(classify("\t"), LineKind::Blank);
    }

    #[test]
    fn crlf_lines_classify_like_lf_lines() {
        assert_eq!(
            classify("# Title\r"),
            LineKind::Heading { level: 2, text: "Title" }
        );
        assert_eq!(classify("\r"), LineKind::Blank);
    }
}
