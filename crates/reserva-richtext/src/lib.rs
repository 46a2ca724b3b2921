//! Rich-text node tree to markdown renderer.
//!
//! Converts the typed rich-text trees stored by the content layer (headings,
//! paragraphs, nested lists, links, styled text runs) into markdown body
//! text for notification messages.
//!
//! Rendering is best-effort and never fails: absent entries are skipped,
//! unrecognized node kinds flatten into their children, and malformed input
//! to the defensive [`MarkdownRenderer::render_nodes`] entry point yields
//! the empty string.
//!
//! # Example
//!
//! ```
//! use reserva_richtext::{MarkdownRenderer, nodes_from_json};
//!
//! let nodes = nodes_from_json(
//!     r#"[{"type": "heading", "level": 2,
//!         "children": [{"text": "Introduction"}]}]"#,
//! )
//! .unwrap();
//!
//! let markdown = MarkdownRenderer::new(nodes).render();
//! assert!(markdown.contains("## Introduction"));
//! ```

mod error;
mod escape;
mod node;
mod renderer;

pub use error::RichTextError;
pub use escape::EscapeStrategy;
pub use node::{ElementNode, ListFormat, Node, NodeKind, TextNode, nodes_from_json};
pub use renderer::{MarkdownRenderer, RendererOptions};
