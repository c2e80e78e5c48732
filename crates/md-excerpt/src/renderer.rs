//! Markdown-to-plain-text excerpt renderer.

use pulldown_cmark::{Event, LinkType, Options, Parser, Tag, TagEnd};

/// Renders a markdown event stream to a plain-text excerpt.
///
/// Per-node policy:
///
/// - **Suppressed** (no output, child text dropped): headings, block
///   quotes, code blocks, raw HTML, horizontal rules, tables, footnotes,
///   metadata blocks, images, autolinks, strikethrough, hard breaks, and
///   task-list markers.
/// - **Flattened**: emphasis of any strength passes its text through
///   unmarked; links keep their display text and drop the target; code
///   spans keep a single backtick on each side.
/// - **Spaced**: paragraphs and lists that produced any text end with one
///   separating space; empty ones leave the buffer untouched.
///
/// A renderer carries no per-document state between calls, so one value
/// can be reused across many documents.
pub struct ExcerptRenderer {
    output: String,
    /// Nesting depth of constructs whose text is dropped.
    suppress: usize,
    /// Buffer-length checkpoints for open paragraphs, lists, and items.
    markers: Vec<usize>,
    /// Which open links drop their display text (autolinks do).
    link_stack: Vec<bool>,
    gfm: bool,
    lists: bool,
}

impl ExcerptRenderer {
    /// Create a new renderer with GFM extensions enabled by default.
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: String::with_capacity(1024),
            suppress: 0,
            markers: Vec::new(),
            link_stack: Vec::new(),
            gfm: true,
            lists: true,
        }
    }

    /// Enable or disable GitHub Flavored Markdown extensions.
    ///
    /// Only affects the parser built by [`create_parser`](Self::create_parser)
    /// and [`render_markdown`](Self::render_markdown). With extensions
    /// disabled, extension syntax reaches the renderer as plain paragraph
    /// text and flows into the excerpt verbatim.
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Include or omit list item text (included by default).
    ///
    /// The default flattens list content the same way paragraphs are
    /// flattened. Pass `false` to drop lists from the excerpt entirely,
    /// nested paragraphs included.
    #[must_use]
    pub fn with_lists(mut self, enabled: bool) -> Self {
        self.lists = enabled;
        self
    }

    /// Get parser options based on GFM configuration.
    ///
    /// The GFM set includes footnotes so footnote markup is parsed (and
    /// suppressed) instead of leaking `[^1]` literals into the excerpt.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_FOOTNOTES
                | Options::ENABLE_GFM
        } else {
            Options::empty()
        }
    }

    /// Create a configured parser for the given markdown text.
    #[must_use]
    pub fn create_parser<'a>(&self, markdown: &'a str) -> Parser<'a> {
        Parser::new_ext(markdown, self.parser_options())
    }

    /// Render markdown text directly using configured parser options.
    pub fn render_markdown(&mut self, markdown: &str) -> String {
        self.render(self.create_parser(markdown))
    }

    /// Fold markdown events into the plain-text excerpt.
    ///
    /// Accepts any event iterator, so callers that own their parser (and
    /// its option set) can attach this renderer unchanged. Output byte
    /// order always matches event order.
    pub fn render<'a, I>(&mut self, events: I) -> String
    where
        I: Iterator<Item = Event<'a>>,
    {
        for event in events {
            self.process_event(event);
        }

        // A balanced stream drains all open state; clear it regardless so
        // the renderer can be reused for the next document.
        self.suppress = 0;
        self.markers.clear();
        self.link_stack.clear();

        std::mem::take(&mut self.output)
    }

    fn process_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.code_span(&code),
            Event::SoftBreak => self.soft_break(),
            // Structure-only events; nothing an excerpt wants.
            Event::Html(_)
            | Event::InlineHtml(_)
            | Event::HardBreak
            | Event::Rule
            | Event::TaskListMarker(_)
            | Event::FootnoteReference(_)
            | Event::InlineMath(_)
            | Event::DisplayMath(_) => {}
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph
            | Tag::Item
            | Tag::DefinitionListTitle
            | Tag::DefinitionListDefinition => {
                if !self.suppressed() {
                    self.open_block();
                }
            }
            Tag::List(_) | Tag::DefinitionList => self.start_list(),
            Tag::Link { link_type, .. } => {
                // Autolink display text is just the target again; drop it.
                let autolink = matches!(link_type, LinkType::Autolink | LinkType::Email);
                if autolink {
                    self.enter_suppressed();
                }
                self.link_stack.push(autolink);
            }
            Tag::Heading { .. }
            | Tag::BlockQuote(_)
            | Tag::CodeBlock(_)
            | Tag::HtmlBlock
            | Tag::FootnoteDefinition(_)
            | Tag::Table(_)
            | Tag::Image { .. }
            | Tag::Strikethrough
            | Tag::MetadataBlock(_) => self.enter_suppressed(),
            // Inline wrappers whose text flows through unmarked, and table
            // sub-parts already covered by the table suppression.
            Tag::Emphasis
            | Tag::Strong
            | Tag::Superscript
            | Tag::Subscript
            | Tag::TableHead
            | Tag::TableRow
            | Tag::TableCell => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph
            | TagEnd::Item
            | TagEnd::DefinitionListTitle
            | TagEnd::DefinitionListDefinition => {
                if !self.suppressed() {
                    self.close_block();
                }
            }
            TagEnd::List(_) | TagEnd::DefinitionList => self.end_list(),
            TagEnd::Link => {
                if self.link_stack.pop().unwrap_or(false) {
                    self.leave_suppressed();
                }
            }
            TagEnd::Heading(_)
            | TagEnd::BlockQuote(_)
            | TagEnd::CodeBlock
            | TagEnd::HtmlBlock
            | TagEnd::FootnoteDefinition
            | TagEnd::Table
            | TagEnd::Image
            | TagEnd::Strikethrough
            | TagEnd::MetadataBlock(_) => self.leave_suppressed(),
            TagEnd::Emphasis
            | TagEnd::Strong
            | TagEnd::Superscript
            | TagEnd::Subscript
            | TagEnd::TableHead
            | TagEnd::TableRow
            | TagEnd::TableCell => {}
        }
    }

    fn text(&mut self, text: &str) {
        if !self.suppressed() {
            self.output.push_str(text);
        }
    }

    /// Code spans keep one backtick on each side so inline code stays
    /// recognizable in an otherwise unmarked stream. An empty payload is
    /// a no-op rather than a bare backtick pair.
    fn code_span(&mut self, code: &str) {
        if self.suppressed() || code.is_empty() {
            return;
        }
        self.output.push('`');
        self.output.push_str(code);
        self.output.push('`');
    }

    fn soft_break(&mut self) {
        if !self.suppressed() {
            self.output.push('\n');
        }
    }

    fn start_list(&mut self) {
        if !self.lists {
            self.enter_suppressed();
            return;
        }
        if self.suppressed() {
            return;
        }
        // A nested list opens flush against the enclosing item's text;
        // separate them before capturing the marker.
        if !self.output.is_empty() && !self.output.ends_with([' ', '\n']) {
            self.output.push(' ');
        }
        self.open_block();
    }

    fn end_list(&mut self) {
        if !self.lists {
            self.leave_suppressed();
            return;
        }
        if !self.suppressed() {
            self.close_block();
        }
    }

    /// Capture the buffer length before a block's children render.
    fn open_block(&mut self) {
        self.markers.push(self.output.len());
    }

    /// Close a block: if its children produced nothing the buffer is left
    /// exactly as the marker recorded it, otherwise the block is
    /// terminated with a single separating space.
    fn close_block(&mut self) {
        let Some(marker) = self.markers.pop() else {
            return;
        };
        if self.output.len() == marker {
            return;
        }
        if !self.output.ends_with(' ') {
            self.output.push(' ');
        }
    }

    fn suppressed(&self) -> bool {
        self.suppress > 0
    }

    fn enter_suppressed(&mut self) {
        self.suppress += 1;
    }

    fn leave_suppressed(&mut self) {
        self.suppress = self.suppress.saturating_sub(1);
    }
}

impl Default for ExcerptRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render markdown to a plain-text excerpt with the default options.
#[must_use]
pub fn excerpt(markdown: &str) -> String {
    ExcerptRenderer::new().render_markdown(markdown)
}
