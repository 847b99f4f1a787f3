//! Rendering configuration.

use std::fmt;

use super::ClassMap;
use crate::error::{Error, Result};

/// Function turning an original selector into its generated class name.
pub type ClassNamer = Box<dyn Fn(&str) -> String>;

/// Options threaded through a render pass.
///
/// `class_map` accumulates across calls: rendering several trees with the
/// same options collects every generated name in one place.
#[derive(Default)]
pub struct RenderOptions {
    /// Base nesting depth, in units of two spaces.
    pub indent: usize,
    /// Applied to the selector of every direct child node of a root-like node.
    pub class_namer: Option<ClassNamer>,
    /// Receives `original → generated` entries when a namer is set.
    pub class_map: Option<ClassMap>,
}

impl RenderOptions {
    /// Options with an empty class map ready to receive generated names.
    pub fn new() -> Self {
        Self {
            indent: 0,
            class_namer: None,
            class_map: Some(ClassMap::new()),
        }
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_class_namer(mut self, namer: impl Fn(&str) -> String + 'static) -> Self {
        self.class_namer = Some(Box::new(namer));
        self
    }

    pub fn with_class_map(mut self, map: ClassMap) -> Self {
        self.class_map = Some(map);
        self
    }

    /// The class map, if one is configured.
    pub fn class_map(&self) -> Option<&ClassMap> {
        self.class_map.as_ref()
    }

    /// Reject a namer with nowhere to record its names.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.class_namer.is_some() && self.class_map.is_none() {
            return Err(Error::MissingClassMap);
        }
        Ok(())
    }
}

impl fmt::Debug for RenderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderOptions")
            .field("indent", &self.indent)
            .field(
                "class_namer",
                &self.class_namer.as_ref().map(|_| "Fn(&str) -> String"),
            )
            .field("class_map", &self.class_map)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_class_map() {
        let opts = RenderOptions::new();
        assert_eq!(opts.indent, 0);
        assert!(opts.class_namer.is_none());
        assert!(opts.class_map().is_some_and(ClassMap::is_empty));
    }

    #[test]
    fn test_default_has_no_class_map() {
        assert!(RenderOptions::default().class_map().is_none());
    }

    #[test]
    fn test_validate_namer_without_map() {
        let opts = RenderOptions::default().with_class_namer(|s| s.to_string());
        assert!(matches!(opts.validate(), Err(Error::MissingClassMap)));

        let opts = RenderOptions::new().with_class_namer(|s| s.to_string());
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_debug_hides_namer() {
        let opts = RenderOptions::new().with_indent(2).with_class_namer(|s| s.into());
        let dbg = format!("{opts:?}");
        assert!(dbg.contains("indent: 2"));
        assert!(dbg.contains("Fn(&str) -> String"));
    }
}
