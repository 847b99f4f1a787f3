//! Ready-made class namers.
//!
//! Any `Fn(&str) -> String` works as a namer; these cover the two common
//! schemes. Output is always a class selector (`.name`) whose identifier is
//! escaped per CSS syntax, so arbitrary input selectors stay valid CSS.

use std::cell::Cell;

use cssparser::serialize_identifier;

use crate::render::ClassNamer;

/// Content-addressed names: the same selector and salt always produce the
/// same class.
///
/// `.button` becomes `.{prefix}button-{hash}`, where `hash` is the first
/// `hash_len` hex digits of `sha1(salt + selector)`.
///
/// ```
/// use goss::naming::HashedNamer;
///
/// let namer = HashedNamer::new("app-");
/// let name = namer.name(".button");
/// assert!(name.starts_with(".app-button-"));
/// assert_eq!(name, namer.name(".button"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedNamer {
    pub prefix: String,
    pub salt: String,
    pub hash_len: usize,
}

impl Default for HashedNamer {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            salt: String::new(),
            hash_len: 8,
        }
    }
}

impl HashedNamer {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Default::default()
        }
    }

    pub fn with_salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = salt.into();
        self
    }

    pub fn with_hash_len(mut self, hash_len: usize) -> Self {
        self.hash_len = hash_len;
        self
    }

    pub fn name(&self, selector: &str) -> String {
        let mut input = String::with_capacity(self.salt.len() + selector.len());
        input.push_str(&self.salt);
        input.push_str(selector);
        let digest = sha1_smol::Sha1::from(input).hexdigest();
        let hash = &digest[..self.hash_len.min(digest.len())];

        let base = selector.trim().trim_start_matches('.');
        let ident = if base.is_empty() {
            format!("{}{}", self.prefix, hash)
        } else {
            format!("{}{}-{}", self.prefix, base, hash)
        };
        class_selector(&ident)
    }

    pub fn into_namer(self) -> ClassNamer {
        Box::new(move |selector: &str| self.name(selector))
    }
}

/// Counter-based names: `.c0`, `.c1`, … in the order selectors are seen.
///
/// Numbering is per namer, so render passes that share one namer never
/// reuse a name.
#[derive(Debug, Clone)]
pub struct SequentialNamer {
    prefix: String,
    next: Cell<usize>,
}

impl Default for SequentialNamer {
    fn default() -> Self {
        Self::new("c")
    }
}

impl SequentialNamer {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: Cell::new(0),
        }
    }

    pub fn name(&self, _selector: &str) -> String {
        let n = self.next.get();
        self.next.set(n + 1);
        class_selector(&format!("{}{}", self.prefix, n))
    }

    pub fn into_namer(self) -> ClassNamer {
        Box::new(move |selector: &str| self.name(selector))
    }
}

fn class_selector(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 1);
    out.push('.');
    // fmt::Write for String is infallible.
    let _ = serialize_identifier(ident, &mut out);
    out
}
