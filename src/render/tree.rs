//! Alphabetically reordered CSS emission.
//!
//! [`format_css`] converts a [`StyleNode`] into an arena-backed
//! [`DisplayTree`], and [`DisplayTree::print`] renders that tree with every
//! group of sibling outputs sorted as plain strings. The result does not
//! depend on the order blocks were added in, which makes it useful for
//! diffing generated stylesheets.
//!
//! Children without a selector are inlined into their parent's block and
//! printed two levels deeper than selector-bearing siblings. Inlined lines
//! keep formatter order (rules first, then fallbacks sorted by text).

use super::RenderOptions;
use crate::error::{Error, Result};
use crate::style::{Rule, StyleNode};
use crate::util::indent_str;

/// Index of a node in a [`DisplayTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayId(u32);

impl DisplayId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node in the display tree.
///
/// Leaves carry `text` and no selector. Block nodes carry a selector and
/// children. A node with neither only groups its children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayNode {
    pub selector: String,
    /// Enclosing node. Not consulted when printing.
    pub parent: Option<DisplayId>,
    pub children: Vec<DisplayId>,
    pub text: String,
}

impl DisplayNode {
    fn leaf(text: String, parent: DisplayId) -> Self {
        Self {
            parent: Some(parent),
            text,
            ..Default::default()
        }
    }
}

/// Arena of [`DisplayNode`]s built from a style tree.
#[derive(Debug, Clone, Default)]
pub struct DisplayTree {
    nodes: Vec<DisplayNode>,
    root: Option<DisplayId>,
}

/// Build a display tree for `node`.
///
/// The source tree is only read; the class namer in `options` is not
/// applied. Declarations render with `options` as usual.
pub fn format_css(node: &StyleNode, options: &RenderOptions) -> Result<DisplayTree> {
    log::debug!("formatting style tree {:?}", node.selector);
    let mut tree = DisplayTree::new();
    tree.append(node, None, options)?;
    Ok(tree)
}

impl DisplayTree {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc(&mut self, node: DisplayNode) -> DisplayId {
        let id = DisplayId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// The first node appended without a parent.
    pub fn root(&self) -> Option<DisplayId> {
        self.root
    }

    pub fn get(&self, id: DisplayId) -> Option<&DisplayNode> {
        self.nodes.get(id.index())
    }

    pub fn parent(&self, id: DisplayId) -> Option<DisplayId> {
        self.get(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: DisplayId) -> &[DisplayId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Convert `node` and attach it under `parent`.
    ///
    /// With no parent the new subtree becomes the root if the tree has none
    /// yet; otherwise it stays detached and can be printed via
    /// [`print_node`](Self::print_node).
    ///
    /// # Errors
    ///
    /// [`Error::UnknownNode`] if `parent` is not in this tree; nothing is
    /// added in that case.
    pub fn append(
        &mut self,
        node: &StyleNode,
        parent: Option<DisplayId>,
        options: &RenderOptions,
    ) -> Result<DisplayId> {
        if let Some(p) = parent.filter(|&p| self.get(p).is_none()) {
            return Err(Error::UnknownNode(p.0));
        }

        let len = self.nodes.len();
        let id = match self.build(node, parent, options) {
            Ok(id) => id,
            Err(e) => {
                self.nodes.truncate(len);
                return Err(e);
            }
        };
        match parent {
            Some(p) => self.nodes[p.index()].children.push(id),
            None if self.root.is_none() => self.root = Some(id),
            None => {}
        }
        Ok(id)
    }

    fn build(
        &mut self,
        node: &StyleNode,
        parent: Option<DisplayId>,
        options: &RenderOptions,
    ) -> Result<DisplayId> {
        let mut fallbacks = node
            .fallbacks
            .iter()
            .map(|f| f.to_css_string(options))
            .collect::<Result<Vec<_>>>()?;

        let current = self.alloc(DisplayNode {
            selector: node.selector.clone(),
            parent,
            ..Default::default()
        });

        for rule in &node.rules {
            let child = match rule {
                Rule::Node(nested) => self.build(nested, Some(current), options)?,
                Rule::Decl(decl) => {
                    let text = decl.to_css_string(options)?;
                    self.alloc(DisplayNode::leaf(text, current))
                }
            };
            self.nodes[current.index()].children.push(child);
        }

        fallbacks.sort();
        for text in fallbacks {
            let leaf = self.alloc(DisplayNode::leaf(text, current));
            self.nodes[current.index()].children.push(leaf);
        }

        Ok(current)
    }

    /// Print the root at `depth`. An empty tree prints as `""`.
    pub fn print(&self, depth: usize) -> String {
        match self.root {
            Some(root) => self.print_node(root, depth),
            None => String::new(),
        }
    }

    /// Print the subtree at `id`.
    pub fn print_node(&self, id: DisplayId, depth: usize) -> String {
        let Some(node) = self.get(id) else {
            return String::new();
        };

        let mut values = Vec::new();
        if !node.selector.is_empty() {
            if !node.children.is_empty() {
                let mut block = format!("{}{{", node.selector);
                for &child in &node.children {
                    let has_selector = self.get(child).is_some_and(|c| !c.selector.is_empty());
                    if has_selector {
                        values.push(self.print_node(child, depth));
                    } else {
                        block.push('\n');
                        block.push_str(&self.print_node(child, depth + 2));
                    }
                }
                block.push_str("\n}");
                values.push(block);
            }
        } else if !node.text.is_empty() {
            values.push(indent_str(&node.text, depth));
        } else {
            for &child in &node.children {
                values.push(self.print_node(child, depth));
            }
        }

        values.sort();
        values.join("\n")
    }
}
