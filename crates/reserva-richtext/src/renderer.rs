//! Recursive markdown rendering over rich-text node trees.

use serde::{Deserialize, Serialize};

use crate::escape::EscapeStrategy;
use crate::node::{ElementNode, ListFormat, Node, NodeKind, TextNode};

/// One list indentation unit.
const INDENT: &str = "   ";

/// Renderer configuration, deserializable from plugin options JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RendererOptions {
    /// Escaping policy for text-node content. Defaults to strict.
    #[serde(default)]
    pub escape: EscapeStrategy,
}

/// Renders a rich-text node sequence to markdown.
///
/// Construction takes the node sequence and options; rendering is pure
/// recursive descent with the list numbering and indentation context passed
/// down explicitly, so a renderer can be shared and re-used freely.
///
/// # Example
///
/// ```
/// use reserva_richtext::{MarkdownRenderer, Node, TextNode};
///
/// let nodes = vec![Some(Node::Text(TextNode::plain("hello")))];
/// assert_eq!(MarkdownRenderer::new(nodes).render(), "hello");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    nodes: Vec<Option<Node>>,
    options: RendererOptions,
}

impl MarkdownRenderer {
    /// Create a renderer over `nodes` with default options.
    #[must_use]
    pub fn new(nodes: Vec<Option<Node>>) -> Self {
        Self::with_options(nodes, RendererOptions::default())
    }

    /// Create a renderer over `nodes` with explicit options.
    #[must_use]
    pub fn with_options(nodes: Vec<Option<Node>>, options: RendererOptions) -> Self {
        Self { nodes, options }
    }

    /// Render the node sequence supplied at construction.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_slice(&self.nodes)
    }

    /// Render an externally supplied JSON value with this renderer's
    /// configuration.
    ///
    /// Returns the empty string when the value is not an array. Array
    /// entries that are null or do not deserialize as nodes are treated as
    /// absent.
    #[must_use]
    pub fn render_nodes(&self, value: &serde_json::Value) -> String {
        let Some(items) = value.as_array() else {
            tracing::debug!("render_nodes called with a non-sequence value");
            return String::new();
        };

        let nodes: Vec<Option<Node>> = items
            .iter()
            .map(|item| serde_json::from_value(item.clone()).unwrap_or_default())
            .collect();
        self.render_slice(&nodes)
    }

    /// Render a typed node sequence with this renderer's configuration.
    #[must_use]
    pub fn render_slice(&self, nodes: &[Option<Node>]) -> String {
        let mut out = String::new();
        for node in nodes.iter().flatten() {
            let block = self.render_block(node);
            if block.is_empty() {
                continue;
            }
            // Consecutive blocks are separated by a blank line; absent and
            // empty nodes emit no separator at all.
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&block);
        }
        out
    }

    /// Render a single node in block position.
    fn render_block(&self, node: &Node) -> String {
        let Node::Element(element) = node else {
            return self.render_inline(node);
        };

        match element.kind {
            NodeKind::Heading => {
                let level = usize::from(element.level.unwrap_or(1));
                let body = self.render_inline_children(&element.children);
                format!("{} {body}\n", "#".repeat(level))
            }
            NodeKind::Paragraph => {
                let body = self.render_inline_children(&element.children);
                format!("{body}\n")
            }
            NodeKind::List => self.render_list(element, element.indent_level.unwrap_or(0)),
            NodeKind::Link => self.render_inline(node),
            // Unrecognized kinds (and stray list items) are flattened: their
            // children are spliced in as top-level siblings, and a node with
            // nothing to contribute renders as nothing.
            NodeKind::ListItem | NodeKind::Other => self.render_slice(&element.children),
        }
    }

    /// Render the items of a list at the given indentation depth.
    ///
    /// The numbering counter is local to this list; nested lists render on
    /// their own lines one level deeper without repeating the parent marker.
    fn render_list(&self, list: &ElementNode, indent: usize) -> String {
        let ordered = list.format == Some(ListFormat::Ordered);
        let mut out = String::new();
        let mut counter = 0_usize;

        for child in list.children.iter().flatten() {
            // List children are list items by invariant; skip anything else.
            let Node::Element(item) = child else { continue };
            if item.kind != NodeKind::ListItem {
                continue;
            }
            counter += 1;

            let mut line = String::new();
            let mut nested = String::new();
            for grandchild in item.children.iter().flatten() {
                match grandchild {
                    Node::Element(sublist) if sublist.kind == NodeKind::List => {
                        nested.push_str(&self.render_list(sublist, indent + 1));
                    }
                    inline => line.push_str(&self.render_inline(inline)),
                }
            }

            out.push_str(&INDENT.repeat(indent));
            if ordered {
                out.push_str(&counter.to_string());
                out.push_str(". ");
            } else {
                out.push_str("- ");
            }
            out.push_str(&line);
            out.push_str("\r\n");
            out.push_str(&nested);
        }

        out
    }

    /// Render a single node in inline position.
    fn render_inline(&self, node: &Node) -> String {
        match node {
            Node::Text(text) => self.render_text(text),
            Node::Element(element) => match element.kind {
                NodeKind::Link => {
                    let body = self.render_inline_children(&element.children);
                    let url = element.url.as_deref().unwrap_or_default();
                    format!("[{body}]({url})")
                }
                NodeKind::List => self.render_list(element, element.indent_level.unwrap_or(0)),
                _ => self.render_inline_children(&element.children),
            },
        }
    }

    /// Concatenate the inline rendering of present children.
    fn render_inline_children(&self, children: &[Option<Node>]) -> String {
        children
            .iter()
            .flatten()
            .map(|child| self.render_inline(child))
            .collect()
    }

    /// Escape a text run and wrap its marks, innermost to outermost:
    /// code, strikethrough, underline, bold, italic.
    fn render_text(&self, node: &TextNode) -> String {
        let mut out = self.options.escape.apply(&node.text);
        if node.code {
            out = format!("`{out}`");
        }
        if node.strikethrough {
            out = format!("~~{out}~~");
        }
        if node.underline {
            out = format!("<u>{out}</u>");
        }
        if node.bold {
            out = format!("**{out}**");
        }
        if node.italic {
            out = format!("*{out}*");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn text(s: &str) -> Option<Node> {
        Some(Node::Text(TextNode::plain(s)))
    }

    fn element(kind: NodeKind, children: Vec<Option<Node>>) -> ElementNode {
        ElementNode {
            kind,
            children,
            ..ElementNode::default()
        }
    }

    fn list(format: ListFormat, items: Vec<Vec<Option<Node>>>) -> Option<Node> {
        let children = items
            .into_iter()
            .map(|item| Some(Node::Element(element(NodeKind::ListItem, item))))
            .collect();
        Some(Node::Element(ElementNode {
            format: Some(format),
            ..element(NodeKind::List, children)
        }))
    }

    fn render(nodes: Vec<Option<Node>>) -> String {
        MarkdownRenderer::new(nodes).render()
    }

    #[test]
    fn test_heading() {
        let nodes = vec![Some(Node::Element(ElementNode {
            level: Some(2),
            ..element(NodeKind::Heading, vec![text("Introduction")])
        }))];
        assert_eq!(render(nodes), "## Introduction\n");
    }

    #[test]
    fn test_paragraph() {
        let nodes = vec![Some(Node::Element(element(
            NodeKind::Paragraph,
            vec![text("Booking confirmed")],
        )))];
        assert_eq!(render(nodes), "Booking confirmed\n");
    }

    #[test]
    fn test_blank_line_between_blocks() {
        let nodes = vec![
            Some(Node::Element(element(NodeKind::Paragraph, vec![text("one")]))),
            Some(Node::Element(element(NodeKind::Paragraph, vec![text("two")]))),
        ];
        assert_eq!(render(nodes), "one\n\ntwo\n");
    }

    #[test]
    fn test_absent_entries_skipped_without_separator() {
        let nodes = vec![
            None,
            Some(Node::Element(element(NodeKind::Paragraph, vec![text("only")]))),
            None,
        ];
        assert_eq!(render(nodes), "only\n");
    }

    #[test]
    fn test_marks() {
        let bold = TextNode {
            text: "Bold".to_owned(),
            bold: true,
            ..TextNode::default()
        };
        let italic = TextNode {
            text: "italic".to_owned(),
            italic: true,
            ..TextNode::default()
        };
        assert_eq!(render(vec![Some(Node::Text(bold))]), "**Bold**");
        assert_eq!(render(vec![Some(Node::Text(italic))]), "*italic*");
    }

    #[test]
    fn test_mark_nesting_order() {
        let node = TextNode {
            text: "x".to_owned(),
            bold: true,
            italic: true,
            underline: true,
            strikethrough: true,
            code: true,
        };
        assert_eq!(render(vec![Some(Node::Text(node))]), "***<u>~~`x`~~</u>***");
    }

    #[test]
    fn test_link() {
        let nodes = vec![Some(Node::Element(ElementNode {
            url: Some("https://example.com".to_owned()),
            ..element(NodeKind::Link, vec![text("Example")])
        }))];
        assert_eq!(render(nodes), "[Example](https://example.com)");
    }

    #[test]
    fn test_link_url_not_escaped() {
        let nodes = vec![Some(Node::Element(ElementNode {
            url: Some("https://example.com/a_(b)".to_owned()),
            ..element(NodeKind::Link, vec![text("x")])
        }))];
        assert_eq!(render(nodes), "[x](https://example.com/a_(b))");
    }

    #[test]
    fn test_ordered_list_numbering() {
        let nodes = vec![list(
            ListFormat::Ordered,
            vec![vec![text("First item")], vec![text("Second item")]],
        )];
        assert_eq!(render(nodes), "1. First item\r\n2. Second item\r\n");
    }

    #[test]
    fn test_unordered_list_bullets() {
        let nodes = vec![list(
            ListFormat::Unordered,
            vec![vec![text("one")], vec![text("two")]],
        )];
        assert_eq!(render(nodes), "- one\r\n- two\r\n");
    }

    #[test]
    fn test_empty_item_emits_marker_and_terminator() {
        let nodes = vec![list(
            ListFormat::Ordered,
            vec![vec![text("First item")], vec![]],
        )];
        assert_eq!(render(nodes), "1. First item\r\n2. \r\n");
    }

    #[test]
    fn test_nested_list_indents_and_restarts_numbering() {
        let nested = list(ListFormat::Ordered, vec![vec![text("inner")]]);
        let nodes = vec![list(
            ListFormat::Ordered,
            vec![vec![text("outer"), nested], vec![text("next")]],
        )];
        assert_eq!(
            render(nodes),
            "1. outer\r\n   1. inner\r\n2. next\r\n"
        );
    }

    #[test]
    fn test_list_indent_level_field() {
        let Some(Node::Element(mut el)) =
            list(ListFormat::Unordered, vec![vec![text("deep")]])
        else {
            panic!("expected list element");
        };
        el.indent_level = Some(2);
        assert_eq!(render(vec![Some(Node::Element(el))]), "      - deep\r\n");
    }

    #[test]
    fn test_non_item_list_children_skipped() {
        let mut children = vec![text("stray")];
        children.push(Some(Node::Element(element(
            NodeKind::ListItem,
            vec![text("kept")],
        ))));
        let nodes = vec![Some(Node::Element(ElementNode {
            format: Some(ListFormat::Ordered),
            ..element(NodeKind::List, children)
        }))];
        assert_eq!(render(nodes), "1. kept\r\n");
    }

    #[test]
    fn test_unrecognized_kind_flattens_children() {
        let inner = element(NodeKind::Paragraph, vec![text("still here")]);
        let nodes = vec![Some(Node::Element(element(
            NodeKind::Other,
            vec![Some(Node::Element(inner))],
        )))];
        assert_eq!(render(nodes), "still here\n");
    }

    #[test]
    fn test_unrecognized_kind_without_content_is_nothing() {
        let nodes = vec![
            Some(Node::Element(element(NodeKind::Other, vec![]))),
            Some(Node::Element(element(NodeKind::Paragraph, vec![text("p")]))),
        ];
        // No residual whitespace or separator from the empty node.
        assert_eq!(render(nodes), "p\n");
    }

    #[test]
    fn test_render_nodes_non_sequence_is_empty() {
        let renderer = MarkdownRenderer::default();
        assert_eq!(renderer.render_nodes(&json!("not-a-sequence")), "");
        assert_eq!(renderer.render_nodes(&json!({"type": "paragraph"})), "");
        assert_eq!(renderer.render_nodes(&json!(42)), "");
    }

    #[test]
    fn test_render_nodes_sequence() {
        let renderer = MarkdownRenderer::default();
        let value = json!([
            null,
            {"type": "heading", "level": 1, "children": [{"text": "Hi"}]},
        ]);
        assert_eq!(renderer.render_nodes(&value), "# Hi\n");
    }

    #[test]
    fn test_render_nodes_uses_configured_escaping() {
        let renderer = MarkdownRenderer::with_options(
            Vec::new(),
            RendererOptions {
                escape: EscapeStrategy::Lacy,
            },
        );
        let value = json!([{"type": "paragraph", "children": [{"text": "`code` *stars*"}]}]);
        assert_eq!(renderer.render_nodes(&value), "\\`code\\` *stars*\n");
    }

    #[test]
    fn test_strict_escaping_in_paragraph() {
        let nodes = vec![Some(Node::Element(element(
            NodeKind::Paragraph,
            vec![text("a*b_c")],
        )))];
        assert_eq!(render(nodes), "a\\*b\\_c\n");
    }

    #[test]
    fn test_kind_label_never_leaks() {
        let value = json!([{"type": "callout", "children": [{"text": "body"}]}]);
        let out = MarkdownRenderer::default().render_nodes(&value);
        assert_eq!(out, "body");
        assert!(!out.contains("callout"));
    }

    #[test]
    fn test_options_deserialize() {
        let options: RendererOptions = serde_json::from_str(r#"{"escape": "lacy"}"#).unwrap();
        assert_eq!(options.escape, EscapeStrategy::Lacy);

        let defaulted: RendererOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(defaulted.escape, EscapeStrategy::Strict);
    }
}
