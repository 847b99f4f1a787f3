//! Style tree input types.
//!
//! This module contains:
//! - The [`ToCss`] capability implemented by anything that renders to a line of CSS
//! - [`StyleNode`] and [`Rule`], the nested tree handed to the renderers
//! - [`Property`], a ready-made `name: value;` declaration

mod declaration;
mod node;

use crate::error::Result;
use crate::render::RenderOptions;

/// A value that renders itself to a single line of CSS.
///
/// The renderers never look inside a declaration; they only call this
/// trait and place the resulting line. Errors propagate to the caller of
/// the render entry point unchanged.
pub trait ToCss: std::fmt::Debug {
    /// Write this value as CSS to the buffer.
    fn to_css(&self, options: &RenderOptions, buf: &mut String) -> Result<()>;

    /// Convert to a CSS string (convenience method).
    fn to_css_string(&self, options: &RenderOptions) -> Result<String> {
        let mut buf = String::new();
        self.to_css(options, &mut buf)?;
        Ok(buf)
    }
}

pub use declaration::Property;
pub use node::{Rule, StyleNode};
