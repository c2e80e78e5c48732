//! Plain-text excerpt rendering for markdown documents.
//!
//! This crate provides [`ExcerptRenderer`], which folds a
//! [`pulldown_cmark`] event stream into an unformatted text excerpt
//! suitable for listings, search indexes, and summaries.
//!
//! # Architecture
//!
//! The renderer is a single pass over the parser's events. Structural
//! markup (headings, tables, block quotes, code blocks, raw HTML,
//! footnotes, images) is suppressed entirely, inline content (emphasis,
//! links, code spans) is flattened into readable text, and paragraphs and
//! lists each end in a single separating space so consecutive blocks do
//! not run together.
//!
//! The output is an unstructured text blob: it is not valid markdown or
//! HTML, leading/trailing whitespace is not trimmed, and truncation or
//! escaping for display is the caller's concern.
//!
//! # Example
//!
//! ```
//! use pulldown_cmark::Parser;
//! use md_excerpt::ExcerptRenderer;
//!
//! let markdown = "# Release notes\n\nShipped **three** fixes.";
//! let parser = Parser::new(markdown);
//! let text = ExcerptRenderer::new().render(parser);
//! assert_eq!(text, "Shipped three fixes. ");
//! ```

mod renderer;

pub use renderer::{ExcerptRenderer, excerpt};
