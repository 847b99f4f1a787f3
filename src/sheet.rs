//! JSON descriptions of style trees.
//!
//! A sheet is either a single node object or an array of rules, which is
//! read as the rules of an unnamed root:
//!
//! ```json
//! {
//!   "selector": "",
//!   "rules": [
//!     "color: red;",
//!     { "name": "margin", "value": "0", "important": true },
//!     { "selector": ".title", "fallbacks": ["display: block;"], "rules": ["display: flex;"] }
//!   ]
//! }
//! ```
//!
//! Rules are raw lines (strings), [`Property`] objects, or nested nodes.
//! Fallbacks are raw lines or properties.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::style::{Property, Rule, StyleNode};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SheetSpec {
    Node(NodeSpec),
    Rules(Vec<RuleSpec>),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NodeSpec {
    #[serde(default)]
    selector: String,
    #[serde(default)]
    rules: Vec<RuleSpec>,
    #[serde(default)]
    fallbacks: Vec<DeclSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DeclSpec {
    Raw(String),
    Property(Property),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RuleSpec {
    Raw(String),
    Property(Property),
    Node(NodeSpec),
}

impl From<RuleSpec> for Rule {
    fn from(spec: RuleSpec) -> Self {
        match spec {
            RuleSpec::Raw(line) => Rule::decl(line),
            RuleSpec::Property(prop) => Rule::decl(prop),
            RuleSpec::Node(node) => Rule::Node(node.into()),
        }
    }
}

impl From<NodeSpec> for StyleNode {
    fn from(spec: NodeSpec) -> Self {
        let mut node = StyleNode::new(spec.selector);
        node.rules = spec.rules.into_iter().map(Rule::from).collect();
        for fallback in spec.fallbacks {
            match fallback {
                DeclSpec::Raw(line) => node.push_fallback(line),
                DeclSpec::Property(prop) => node.push_fallback(prop),
            }
        }
        node
    }
}

impl From<SheetSpec> for StyleNode {
    fn from(spec: SheetSpec) -> Self {
        match spec {
            SheetSpec::Node(node) => node.into(),
            SheetSpec::Rules(rules) => {
                let mut root = StyleNode::root();
                root.rules = rules.into_iter().map(Rule::from).collect();
                root
            }
        }
    }
}

/// Parse a sheet from a JSON string.
pub fn parse(json: &str) -> Result<StyleNode> {
    let spec: SheetSpec = serde_json::from_str(json)?;
    Ok(spec.into())
}

/// Parse a sheet from any reader.
pub fn from_reader<R: Read>(reader: R) -> Result<StyleNode> {
    let spec: SheetSpec = serde_json::from_reader(reader)?;
    Ok(spec.into())
}

/// Load a sheet from a JSON file.
pub fn load(path: impl AsRef<Path>) -> Result<StyleNode> {
    let path = path.as_ref();
    log::debug!("loading sheet from {}", path.display());
    let file = File::open(path)?;
    from_reader(BufReader::new(file))
}
