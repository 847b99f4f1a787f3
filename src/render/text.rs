//! Order-preserving CSS emission.
//!
//! Declarations come out exactly in the order they were added to the tree,
//! fallbacks first. Nested nodes never render inside their parent's braces;
//! each one surfaces as a sibling block after the parent's own block.

use super::{ClassMap, RenderOptions};
use crate::error::Result;
use crate::style::{Rule, StyleNode};
use crate::util::{indent_str, is_root_like};

/// CSS text plus the class names generated while producing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub css: String,
    /// Only the entries generated by this pass.
    pub class_map: ClassMap,
}

/// Render a style tree, renaming root-level selectors in place.
///
/// When `options.class_namer` is set, every nested node directly under a
/// root-like node (`""` or `"root"`) has its selector replaced by the
/// generated name, and `options.class_map` records the original. The tree
/// keeps the generated names after the call, so a second pass over the
/// same tree names the generated names again. Use [`render`] for a pass that
/// leaves the tree untouched.
///
/// Passing `None` yields an empty string.
///
/// # Errors
///
/// [`Error::MissingClassMap`](crate::Error::MissingClassMap) if a namer is
/// configured without a class map, and any error raised by a declaration.
/// Names are only written back once the whole tree has rendered, so on
/// error neither the tree nor `options.class_map` has changed.
pub fn to_css<'a>(
    node: impl Into<Option<&'a mut StyleNode>>,
    options: &mut RenderOptions,
) -> Result<String> {
    let Some(node) = node.into() else {
        return Ok(String::new());
    };
    options.validate()?;

    log::debug!(
        "rendering style tree {:?} at indent {}",
        node.selector,
        options.indent
    );
    let mut writer = TextWriter::new(options);
    let css = writer.node(node, &node.selector)?;
    let assigned = writer.assigned;

    if let Some(map) = options.class_map.as_mut() {
        let mut names = assigned.into_iter().map(|(_, generated)| generated);
        apply_class_names(node, &mut names, map);
    }
    Ok(css)
}

/// Render a style tree without touching it.
///
/// Produces the same text [`to_css`] would on a fresh tree, but the
/// generated names live only in the returned [`Rendered::class_map`].
/// `options.class_map` is neither required nor written.
///
/// ```
/// use goss::{render, RenderOptions, StyleNode};
///
/// let tree = StyleNode::root().with_node(StyleNode::new(".btn").with_decl("color: red;"));
/// let opts = RenderOptions::new().with_class_namer(|s| format!("{s}-x"));
///
/// let out = render(&tree, &opts).unwrap();
/// assert!(out.css.contains(".btn-x {"));
/// assert_eq!(out.class_map.get(".btn"), Some(".btn-x"));
/// assert_eq!(tree.nodes().next().unwrap().selector, ".btn");
/// ```
pub fn render(node: &StyleNode, options: &RenderOptions) -> Result<Rendered> {
    log::debug!("rendering style tree {:?} without mutation", node.selector);
    let mut writer = TextWriter::new(options);
    let css = writer.node(node, &node.selector)?;
    Ok(Rendered {
        css,
        class_map: writer.assigned.into_iter().collect(),
    })
}

/// Rewrite the selectors of nodes directly under root-like nodes.
///
/// Visits nodes in the same order a render pass does, so stateful namers
/// see the same sequence of selectors either way.
pub fn assign_class_names(
    node: &mut StyleNode,
    namer: &dyn Fn(&str) -> String,
    map: &mut ClassMap,
) {
    let root_like = node.is_root_like();
    for child in node.nodes_mut() {
        if root_like {
            let generated = namer(&child.selector);
            log::trace!("class name {:?} -> {:?}", child.selector, generated);
            rename(child, generated, map);
        }
        assign_class_names(child, namer, map);
    }
}

/// Write names produced by a render pass back into the tree, in the order
/// the pass generated them.
fn apply_class_names<I>(node: &mut StyleNode, names: &mut I, map: &mut ClassMap)
where
    I: Iterator<Item = String>,
{
    let root_like = node.is_root_like();
    for child in node.nodes_mut() {
        if root_like {
            if let Some(generated) = names.next() {
                rename(child, generated, map);
            }
        }
        apply_class_names(child, names, map);
    }
}

fn rename(node: &mut StyleNode, generated: String, map: &mut ClassMap) {
    if map.contains_generated(&node.selector) {
        log::warn!(
            "selector {:?} is already a generated class name; naming it again",
            node.selector
        );
    }
    map.insert(node.selector.clone(), generated.clone());
    node.selector = generated;
}

struct TextWriter<'a> {
    options: &'a RenderOptions,
    /// `(original, generated)` pairs in the order they were generated.
    assigned: Vec<(String, String)>,
}

impl<'a> TextWriter<'a> {
    fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            assigned: Vec::new(),
        }
    }

    fn node(&mut self, node: &StyleNode, selector: &str) -> Result<String> {
        let base = self.options.indent;
        let depth = base + 1;

        let mut body = String::new();
        for fallback in &node.fallbacks {
            let line = fallback.to_css_string(self.options)?;
            push_line(&mut body, &indent_str(&line, depth));
        }

        let root_like = is_root_like(selector);
        let mut nested = String::new();
        for rule in &node.rules {
            match rule {
                Rule::Node(child) => {
                    let generated = if root_like {
                        self.class_name(&child.selector)
                    } else {
                        None
                    };
                    let text = self.node(child, generated.as_deref().unwrap_or(&child.selector))?;
                    push_line(&mut nested, &text);
                }
                Rule::Decl(decl) => {
                    let line = decl.to_css_string(self.options)?;
                    if selector.is_empty() {
                        push_line(&mut body, &line);
                    } else {
                        push_line(&mut body, &indent_str(&line, depth));
                    }
                }
            }
        }

        let mut out = if selector.is_empty() {
            body
        } else {
            let mut block = indent_str(&format!("{selector} {{\n{body}"), base);
            block.push('\n');
            block.push_str(&indent_str("}", base));
            block
        };
        if !nested.is_empty() {
            out.push('\n');
            out.push_str(&nested);
        }
        Ok(out)
    }

    fn class_name(&mut self, selector: &str) -> Option<String> {
        let namer = self.options.class_namer.as_ref()?;
        let generated = namer(selector);
        log::trace!("class name {:?} -> {:?}", selector, generated);
        self.assigned.push((selector.to_string(), generated.clone()));
        Some(generated)
    }
}

fn push_line(buf: &mut String, line: &str) {
    if !buf.is_empty() {
        buf.push('\n');
    }
    buf.push_str(line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::style::Property;
    use pretty_assertions::assert_eq;

    fn suffix_namer() -> RenderOptions {
        RenderOptions::new().with_class_namer(|s| format!("{s}-1"))
    }

    #[test]
    fn test_none_renders_empty() {
        let mut opts = RenderOptions::new();
        assert_eq!(to_css(None::<&mut StyleNode>, &mut opts).unwrap(), "");
    }

    #[test]
    fn test_root_declaration_is_bare() {
        let mut tree = StyleNode::root().with_decl("color: red");
        let css = to_css(&mut tree, &mut RenderOptions::new()).unwrap();
        assert_eq!(css, "color: red");
    }

    #[test]
    fn test_root_declarations_unindented() {
        let mut tree = StyleNode::root().with_decl("a: 1").with_decl("b: 2");
        let css = to_css(&mut tree, &mut RenderOptions::new()).unwrap();
        assert_eq!(css, "a: 1\nb: 2");
    }

    #[test]
    fn test_root_fallbacks_are_indented() {
        let mut tree = StyleNode::root().with_fallback("a: 1").with_decl("b: 2");
        let css = to_css(&mut tree, &mut RenderOptions::new()).unwrap();
        assert_eq!(css, "  a: 1\nb: 2");
    }

    #[test]
    fn test_nested_blocks_follow_parent() {
        let mut tree = StyleNode::new(".a").with_node(StyleNode::new(".b").with_decl("x: 1"));
        let css = to_css(&mut tree, &mut RenderOptions::new()).unwrap();
        assert_eq!(css, ".a {\n\n}\n.b {\n  x: 1\n}");
    }

    #[test]
    fn test_fallbacks_precede_rules() {
        let mut tree = StyleNode::new(".c")
            .with_decl("b: 3")
            .with_fallback("a: 1")
            .with_fallback("a: 2");
        let css = to_css(&mut tree, &mut RenderOptions::new()).unwrap();
        assert_eq!(css, ".c {\n  a: 1\n  a: 2\n  b: 3\n}");
    }

    #[test]
    fn test_declaration_order_preserved() {
        let mut tree = StyleNode::new(".s").with_decl("z: 1").with_decl("a: 2");
        let css = to_css(&mut tree, &mut RenderOptions::new()).unwrap();
        assert_eq!(css, ".s {\n  z: 1\n  a: 2\n}");
    }

    #[test]
    fn test_base_indent() {
        let mut tree = StyleNode::new(".a").with_decl("x: 1");
        let mut opts = RenderOptions::new().with_indent(1);
        let css = to_css(&mut tree, &mut opts).unwrap();
        assert_eq!(css, "  .a {\n    x: 1\n  }");
        assert_eq!(opts.indent, 1);
    }

    #[test]
    fn test_class_names_replace_root_children() {
        let mut tree = StyleNode::root().with_node(StyleNode::new(".foo").with_decl("x: 1"));
        let mut opts = suffix_namer();

        let css = to_css(&mut tree, &mut opts).unwrap();

        assert_eq!(css, "\n.foo-1 {\n  x: 1\n}");
        assert_eq!(opts.class_map().unwrap().get(".foo"), Some(".foo-1"));
        assert_eq!(tree.nodes().next().unwrap().selector, ".foo-1");
    }

    #[test]
    fn test_literal_root_names_children_but_still_wraps() {
        let mut tree = StyleNode::new("root")
            .with_decl("x: 1")
            .with_node(StyleNode::new(".a").with_decl("y: 2"));
        let mut opts = suffix_namer();

        let css = to_css(&mut tree, &mut opts).unwrap();

        assert_eq!(css, "root {\n  x: 1\n}\n.a-1 {\n  y: 2\n}");
        assert_eq!(opts.class_map().unwrap().get(".a"), Some(".a-1"));
    }

    #[test]
    fn test_grandchildren_keep_their_selectors() {
        let mut tree = StyleNode::root().with_node(
            StyleNode::new(".a").with_node(StyleNode::new(".b").with_decl("x: 1")),
        );
        let mut opts = suffix_namer();

        let css = to_css(&mut tree, &mut opts).unwrap();

        assert_eq!(css, "\n.a-1 {\n\n}\n.b {\n  x: 1\n}");
        assert_eq!(opts.class_map().unwrap().len(), 1);
    }

    #[test]
    fn test_second_pass_renames_generated_names() {
        let mut tree = StyleNode::root().with_node(StyleNode::new(".foo").with_decl("x: 1"));
        let mut opts = suffix_namer();

        to_css(&mut tree, &mut opts).unwrap();
        let css = to_css(&mut tree, &mut opts).unwrap();

        let map = opts.class_map().unwrap();
        assert_eq!(map.get(".foo"), Some(".foo-1"));
        assert_eq!(map.get(".foo-1"), Some(".foo-1-1"));
        assert_eq!(map.len(), 2);
        assert!(css.contains(".foo-1-1 {"));
    }

    #[test]
    fn test_class_map_accumulates_across_trees() {
        let mut a = StyleNode::root().with_node(StyleNode::new(".a"));
        let mut b = StyleNode::root().with_node(StyleNode::new(".b"));
        let mut opts = suffix_namer();

        to_css(&mut a, &mut opts).unwrap();
        to_css(&mut b, &mut opts).unwrap();

        assert_eq!(opts.class_map().unwrap().classes(), ".a-1 .b-1");
    }

    #[test]
    fn test_namer_without_map_fails_fast() {
        let mut tree = StyleNode::root().with_node(StyleNode::new(".foo"));
        let mut opts = RenderOptions::default().with_class_namer(|s| format!("{s}-1"));

        let err = to_css(&mut tree, &mut opts).unwrap_err();

        assert!(matches!(err, Error::MissingClassMap));
        assert_eq!(tree.nodes().next().unwrap().selector, ".foo");
    }

    #[test]
    fn test_declaration_error_propagates() {
        let mut tree = StyleNode::new(".a").with_decl(Property::new("", "red"));
        let err = to_css(&mut tree, &mut RenderOptions::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidDeclaration(_)));
    }

    #[test]
    fn test_failed_pass_keeps_tree_and_map() {
        let mut tree = StyleNode::root()
            .with_node(StyleNode::new(".ok").with_decl("x: 1"))
            .with_node(StyleNode::new(".bad").with_decl(Property::new("", "red")));
        let mut opts = suffix_namer();

        let err = to_css(&mut tree, &mut opts).unwrap_err();

        assert!(matches!(err, Error::InvalidDeclaration(_)));
        let selectors: Vec<_> = tree.nodes().map(|n| n.selector.as_str()).collect();
        assert_eq!(selectors, [".ok", ".bad"]);
        assert!(opts.class_map().unwrap().is_empty());
    }

    #[test]
    fn test_stateful_namer_called_once_per_node() {
        let mut tree = StyleNode::root()
            .with_node(StyleNode::new(".a").with_node(StyleNode::new("root").with_decl("x: 1")))
            .with_node(StyleNode::new(".b"));
        let mut opts = RenderOptions::new();
        opts.class_namer = Some(crate::naming::SequentialNamer::default().into_namer());

        let css = to_css(&mut tree, &mut opts).unwrap();

        assert_eq!(css, "\n.c0 {\n\n}\nroot {\n  x: 1\n}\n.c1 {\n\n}");
        let selectors: Vec<_> = tree.nodes().map(|n| n.selector.as_str()).collect();
        assert_eq!(selectors, [".c0", ".c1"]);
        assert_eq!(opts.class_map().unwrap().classes(), ".c0 .c1");
    }

    #[test]
    fn test_render_is_pure_and_repeatable() {
        let tree = StyleNode::root().with_node(StyleNode::new(".foo").with_decl("x: 1"));
        let opts = suffix_namer();

        let first = render(&tree, &opts).unwrap();
        let second = render(&tree, &opts).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.css, "\n.foo-1 {\n  x: 1\n}");
        assert_eq!(first.class_map.get(".foo"), Some(".foo-1"));
        assert_eq!(tree.nodes().next().unwrap().selector, ".foo");
        assert!(opts.class_map().unwrap().is_empty());
    }

    #[test]
    fn test_render_matches_to_css_on_fresh_tree() {
        let build = || {
            StyleNode::root()
                .with_decl("a: 1")
                .with_node(StyleNode::new(".x").with_fallback("b: 0").with_decl("b: 1"))
                .with_node(StyleNode::new(".y").with_node(StyleNode::new(".z").with_decl("c: 1")))
        };
        let mut mutated = build();
        let mut opts = suffix_namer();

        let legacy = to_css(&mut mutated, &mut opts).unwrap();
        let pure = render(&build(), &suffix_namer()).unwrap();

        assert_eq!(legacy, pure.css);
        assert_eq!(opts.class_map().unwrap(), &pure.class_map);
    }

    #[test]
    fn test_render_without_namer() {
        let tree = StyleNode::root().with_node(StyleNode::new(".foo").with_decl("x: 1"));
        let out = render(&tree, &RenderOptions::default()).unwrap();
        assert_eq!(out.css, "\n.foo {\n  x: 1\n}");
        assert!(out.class_map.is_empty());
    }
}
