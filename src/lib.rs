//! # goss
//!
//! Render nested style trees to CSS text, optionally swapping top-level
//! selectors for generated class names.
//!
//! ## Features
//!
//! - Build style trees from selectors, declarations, fallbacks and nested blocks
//! - Order-preserving output ([`to_css`], [`render`])
//! - Canonical, sorted output for diffing ([`format_css`] + [`DisplayTree::print`])
//! - Scoped class names with the original → generated mapping ([`ClassMap`])
//! - JSON sheet loading and a `goss` command-line tool
//!
//! ## Quick Start
//!
//! ```
//! use goss::{Property, RenderOptions, StyleNode, to_css};
//!
//! let mut sheet = StyleNode::root()
//!     .with_node(
//!         StyleNode::new(".button")
//!             .with_fallback("background: red;")
//!             .with_decl(Property::new("background", "linear-gradient(red, blue)")),
//!     );
//!
//! let mut opts = RenderOptions::new().with_class_namer(|s| format!("{s}-x1"));
//! let css = to_css(&mut sheet, &mut opts).unwrap();
//!
//! assert!(css.contains(".button-x1 {"));
//! assert_eq!(opts.class_map().unwrap().get(".button"), Some(".button-x1"));
//! ```
//!
//! ## Declarations
//!
//! Anything implementing [`ToCss`] can sit in a node's rules or fallbacks.
//! Strings render verbatim; [`Property`] renders `name: value;`.

pub mod error;
pub mod naming;
pub mod render;
pub mod style;
pub(crate) mod util;

#[cfg(feature = "json")]
pub mod sheet;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Error, Result};
pub use render::{
    ClassMap, ClassNamer, DisplayId, DisplayNode, DisplayTree, RenderOptions, Rendered,
    assign_class_names, format_css, render, to_css,
};
pub use style::{Property, Rule, StyleNode, ToCss};
pub use util::{INDENT_WIDTH, indent_str, is_root_like};
