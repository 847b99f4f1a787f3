//! The nested style tree.

use super::ToCss;
use crate::util::is_root_like;

/// One entry of a node's ordered rule list.
#[derive(Debug)]
pub enum Rule {
    /// A nested block.
    Node(StyleNode),
    /// A flat declaration rendered as a single line.
    Decl(Box<dyn ToCss>),
}

impl Rule {
    /// Wrap a declaration.
    pub fn decl(decl: impl ToCss + 'static) -> Self {
        Rule::Decl(Box::new(decl))
    }

    /// The nested node, if this rule is one.
    pub fn as_node(&self) -> Option<&StyleNode> {
        match self {
            Rule::Node(node) => Some(node),
            Rule::Decl(_) => None,
        }
    }
}

impl From<StyleNode> for Rule {
    fn from(node: StyleNode) -> Self {
        Rule::Node(node)
    }
}

/// A selector with its declarations, fallback values and nested blocks.
///
/// An empty selector marks a root pseudo-node: its own braces are never
/// emitted but its children still render.
///
/// # Example
///
/// ```
/// use goss::{Property, StyleNode};
///
/// let sheet = StyleNode::root()
///     .with_node(
///         StyleNode::new(".button")
///             .with_fallback("background: red;")
///             .with_decl(Property::new("background", "linear-gradient(red, blue)")),
///     );
/// assert_eq!(sheet.nodes().count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct StyleNode {
    pub selector: String,
    pub rules: Vec<Rule>,
    pub fallbacks: Vec<Box<dyn ToCss>>,
}

impl StyleNode {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            rules: Vec::new(),
            fallbacks: Vec::new(),
        }
    }

    /// A node with an empty selector.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn with_decl(mut self, decl: impl ToCss + 'static) -> Self {
        self.push_decl(decl);
        self
    }

    pub fn with_node(mut self, node: StyleNode) -> Self {
        self.push_node(node);
        self
    }

    pub fn with_fallback(mut self, decl: impl ToCss + 'static) -> Self {
        self.push_fallback(decl);
        self
    }

    pub fn push_decl(&mut self, decl: impl ToCss + 'static) {
        self.rules.push(Rule::decl(decl));
    }

    pub fn push_node(&mut self, node: StyleNode) {
        self.rules.push(Rule::Node(node));
    }

    pub fn push_fallback(&mut self, decl: impl ToCss + 'static) {
        self.fallbacks.push(Box::new(decl));
    }

    /// Whether children of this node are candidates for class naming.
    pub fn is_root_like(&self) -> bool {
        is_root_like(&self.selector)
    }

    /// Direct nested nodes, in rule order.
    pub fn nodes(&self) -> impl Iterator<Item = &StyleNode> {
        self.rules.iter().filter_map(Rule::as_node)
    }

    /// Direct nested nodes, mutably, in rule order.
    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut StyleNode> {
        self.rules.iter_mut().filter_map(|rule| match rule {
            Rule::Node(node) => Some(node),
            Rule::Decl(_) => None,
        })
    }
}
