//! Built-in declaration types.
//!
//! Plain strings render verbatim, which is what most callers hand the
//! renderer. [`Property`] covers the common `name: value;` shape.

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use super::ToCss;
use crate::error::{Error, Result};
use crate::render::RenderOptions;

impl ToCss for str {
    fn to_css(&self, _options: &RenderOptions, buf: &mut String) -> Result<()> {
        buf.push_str(self);
        Ok(())
    }
}

impl<T: ToCss + ?Sized> ToCss for &T {
    fn to_css(&self, options: &RenderOptions, buf: &mut String) -> Result<()> {
        (**self).to_css(options, buf)
    }
}

impl ToCss for String {
    fn to_css(&self, options: &RenderOptions, buf: &mut String) -> Result<()> {
        self.as_str().to_css(options, buf)
    }
}

/// A CSS property-value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "json", serde(deny_unknown_fields))]
pub struct Property {
    pub name: String,
    pub value: String,
    #[cfg_attr(feature = "json", serde(default))]
    pub important: bool,
}

impl Property {
    /// Create a property declaration.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            important: false,
        }
    }

    /// Mark the declaration `!important`.
    pub fn important(mut self) -> Self {
        self.important = true;
        self
    }
}

impl ToCss for Property {
    fn to_css(&self, _options: &RenderOptions, buf: &mut String) -> Result<()> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::InvalidDeclaration(format!(
                "property with value {:?} has no name",
                self.value
            )));
        }
        buf.push_str(name);
        buf.push_str(": ");
        buf.push_str(self.value.trim());
        if self.important {
            buf.push_str(" !important");
        }
        buf.push(';');
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_renders_verbatim() {
        let opts = RenderOptions::new();
        assert_eq!("color: red".to_css_string(&opts).unwrap(), "color: red");
        assert_eq!(String::from("a: 1").to_css_string(&opts).unwrap(), "a: 1");
    }

    #[test]
    fn test_property_to_css() {
        let opts = RenderOptions::new();
        let prop = Property::new("margin", " 0 auto ");
        assert_eq!(prop.to_css_string(&opts).unwrap(), "margin: 0 auto;");
    }

    #[test]
    fn test_property_important() {
        let opts = RenderOptions::new();
        let prop = Property::new("display", "none").important();
        assert_eq!(prop.to_css_string(&opts).unwrap(), "display: none !important;");
    }

    #[test]
    fn test_property_without_name_is_rejected() {
        let opts = RenderOptions::new();
        let err = Property::new("  ", "red").to_css_string(&opts).unwrap_err();
        assert!(matches!(err, Error::InvalidDeclaration(_)));
    }
}
