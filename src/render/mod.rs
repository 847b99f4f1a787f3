//! Style tree → CSS text.
//!
//! Two independent strategies live here:
//!
//! - [`to_css`] / [`render`]: declaration-order output. Nested blocks follow
//!   their parent's block, fallbacks precede rules, and root-level selectors
//!   can be swapped for generated class names.
//! - [`format_css`] + [`DisplayTree::print`]: a canonical form where sibling
//!   outputs are sorted, independent of insertion order.
//!
//! They can disagree on ordering for the same input; pick the one matching
//! the guarantee you need.
//!
//! # Example
//!
//! ```
//! use goss::{RenderOptions, StyleNode, format_css, to_css};
//!
//! let mut sheet = StyleNode::new(".card").with_decl("z-index: 1;").with_decl("color: red;");
//!
//! let ordered = to_css(&mut sheet, &mut RenderOptions::new()).unwrap();
//! assert_eq!(ordered, ".card {\n  z-index: 1;\n  color: red;\n}");
//!
//! let canonical = format_css(&sheet, &RenderOptions::new()).unwrap().print(0);
//! assert_eq!(canonical, ".card{\n    z-index: 1;\n    color: red;\n}");
//! ```

mod class_map;
mod options;
mod text;
mod tree;

pub use class_map::ClassMap;
pub use options::{ClassNamer, RenderOptions};
pub use text::{Rendered, assign_class_names, render, to_css};
pub use tree::{DisplayId, DisplayNode, DisplayTree, format_css};
