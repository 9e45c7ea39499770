//! # Reply Rendering
//!
//! Two-phase rendering of AI reply text into a safe HTML fragment.
//!
//! ## Rendering Phases
//!
//! 1. **Escaping** (`escape`): the raw text is HTML-escaped once, before any
//!    structural parsing, so untrusted input can never inject markup and
//!    marker punctuation stays visible to the classifier
//!
//! 2. **Line Classification** (`classify`): each line is classified into a
//!    [`LineKind`] containing local facts only, without reference to
//!    surrounding list state
//!
//! 3. **HTML Building** (`builder`): an [`HtmlBuilder`] folds the classified
//!    lines into HTML fragments, tracking the currently open list and
//!    closing it at the right points
//!
//! Inline formatting (`inline`) is applied to each line's text payload as
//! the builder emits it.
//!
//! ## Key Invariants
//!
//! - Every `<ol>`/`<ul>` opened in the output is closed before
//!   [`render_markdown`] returns, however the input ends
//! - No unescaped `&`, `<`, or `>` from the input survives into the output
//! - Escaping runs exactly once per call; rendering already-rendered output
//!   would double-encode it

pub mod builder;
pub mod classify;
pub mod escape;
pub mod inline;

pub use builder::{HtmlBuilder, ListKind};
pub use classify::{LineKind, classify};

use escape::escape_text;

/// Renders a restricted Markdown subset into a safe HTML fragment.
///
/// Supports headings, bold, italic, numbered lists, bullet lists, inline
/// code, and paragraphs. The output uses only the
/// `h2 h3 h4 p ol ul li strong em code` vocabulary plus escaped text, and
/// can be injected into a display surface verbatim.
///
/// The function is total: empty input produces empty output, and a line
/// matching no construct falls through to a paragraph.
pub fn render_markdown(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let escaped = escape_text(text);
    let mut builder = HtmlBuilder::new();
    for line in escaped.split('\n') {
        builder.push(classify(line));
    }
    builder.finish()
}
