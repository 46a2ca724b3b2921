//! Rich-text node types.
//!
//! Field names follow the content layer's JSON shape (`type`, `indentLevel`),
//! so node trees deserialize straight out of a rich-text field value.

use serde::{Deserialize, Serialize};

use crate::RichTextError;

/// One node of a rich-text tree: a styled text run or a typed element.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Node {
    /// Leaf text run with optional style marks.
    Text(TextNode),
    /// Element with a kind discriminator and children.
    Element(ElementNode),
}

/// A text run with inline style marks.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TextNode {
    /// Raw text content (escaped by the renderer, per strategy).
    pub text: String,
    /// Bold mark (`**…**`).
    #[serde(default)]
    pub bold: bool,
    /// Italic mark (`*…*`).
    #[serde(default)]
    pub italic: bool,
    /// Underline mark (`<u>…</u>`).
    #[serde(default)]
    pub underline: bool,
    /// Strikethrough mark (`~~…~~`).
    #[serde(default)]
    pub strikethrough: bool,
    /// Inline code mark (backticks, innermost wrapper).
    #[serde(default)]
    pub code: bool,
}

impl TextNode {
    /// Plain text run with no marks.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

/// An element node; which extra fields are meaningful depends on `kind`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ElementNode {
    /// Kind discriminator; unknown kinds deserialize to [`NodeKind::Other`].
    #[serde(rename = "type", default)]
    pub kind: NodeKind,
    /// Ordered children; absent (null) entries are preserved and skipped at
    /// render time.
    #[serde(default)]
    pub children: Vec<Option<Node>>,
    /// Heading level (`heading` only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    /// Link target (`link` only); emitted raw, never escaped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// List numbering format (`list` only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<ListFormat>,
    /// Leading indentation units for list items (`list` only); absent means 0.
    #[serde(
        rename = "indentLevel",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub indent_level: Option<usize>,
}

/// Recognized element kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    /// Heading block (`#` run).
    Heading,
    /// Paragraph block.
    Paragraph,
    /// Inline link.
    Link,
    /// Ordered or unordered list.
    List,
    /// One list entry.
    ListItem,
    /// Anything else; rendered by flattening its children.
    #[default]
    #[serde(other)]
    Other,
}

/// List numbering format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListFormat {
    /// Sequentially numbered items (`1. `), counter local to each list.
    Ordered,
    /// Bulleted items (`- `).
    Unordered,
}

/// Parse a rich-text field value (a JSON array of nodes) into a node
/// sequence. Null entries are kept as `None` and skipped at render time.
pub fn nodes_from_json(input: &str) -> Result<Vec<Option<Node>>, RichTextError> {
    Ok(serde_json::from_str(input)?)
}
