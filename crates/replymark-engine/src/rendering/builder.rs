use super::classify::LineKind;
use super::inline::apply_inline;

/// Which list element is currently open in the output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Unordered,
}

impl ListKind {
    /// The HTML tag name for this list kind.
    fn tag(self) -> &'static str {
        match self {
            ListKind::Ordered => "ol",
            ListKind::Unordered => "ul",
        }
    }
}

/// Accumulates HTML fragments for classified lines.
///
/// This is phase 2 of rendering: the builder owns the single piece of
/// parse state, the currently open list. Every list opened through
/// [`HtmlBuilder::push`] is closed by the time [`HtmlBuilder::finish`]
/// returns, so the output is always well formed.
#[derive(Debug, Default)]
pub struct HtmlBuilder {
    html: String,
    open_list: Option<ListKind>,
}

impl HtmlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the HTML fragment for one classified line.
    pub fn push(&mut self, line: LineKind<'_>) {
        match line {
            LineKind::Heading { level, text } => {
                self.close_list();
                let inner = apply_inline(text);
                self.html.push_str(&format!("<h{level}>{inner}</h{level}>"));
            }
            LineKind::BoldHeading { text } => {
                self.close_list();
                let inner = apply_inline(text);
                self.html.push_str(&format!("<h3>{inner}</h3>"));
            }
            LineKind::OrderedItem { text } => self.push_item(ListKind::Ordered, text),
            LineKind::UnorderedItem { text } => self.push_item(ListKind::Unordered, text),
            // Blank lines separate paragraphs but do not close an open list;
            // only a heading or plain line terminates it.
            LineKind::Blank => {}
            LineKind::Plain { text } => {
                self.close_list();
                let inner = apply_inline(text);
                self.html.push_str(&format!("<p>{inner}</p>"));
            }
        }
    }

    /// Closes any still-open list and returns the accumulated HTML.
    pub fn finish(mut self) -> String {
        // EOF close
        self.close_list();
        self.html
    }

    fn push_item(&mut self, kind: ListKind, text: &str) {
        if self.open_list != Some(kind) {
            // Switching kind closes the old list; kinds never nest or merge.
            self.close_list();
            self.html.push_str(&format!("<{}>", kind.tag()));
            self.open_list = Some(kind);
        }
        let inner = apply_inline(text);
        self.html.push_str(&format!("<li>{inner}</li>"));
    }

    fn close_list(&mut self) {
        if let Some(kind) = self.open_list.take() {
            self.html.push_str(&format!("</{}>", kind.tag()));
        }
    }
}
