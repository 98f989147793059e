use std::path::Path;

use html::Id;
use serde::Deserialize;

use crate::error::TypographyError;

/// Case-insensitive set of tag names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = TagSet::default();
        for tag in tags {
            set.insert(tag.as_ref());
        }
        set
    }

    pub fn insert(&mut self, tag: &str) {
        let tag = tag.trim().to_ascii_lowercase();
        if !tag.is_empty() && !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for TagSet {
    fn from(tags: Vec<String>) -> Self {
        TagSet::new(tags)
    }
}

/// Which part of the document the text pass scans.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum RootSelector {
    /// A node already in hand.
    Node(Id),
    /// `*`, `tag`, `#id` or `.class`; the first match in document order.
    Selector(String),
}

impl From<String> for RootSelector {
    fn from(selector: String) -> Self {
        RootSelector::Selector(selector)
    }
}

impl From<&str> for RootSelector {
    fn from(selector: &str) -> Self {
        RootSelector::Selector(selector.to_string())
    }
}

impl From<Id> for RootSelector {
    fn from(id: Id) -> Self {
        RootSelector::Node(id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypographyConfig {
    /// Subtree to rewrite; the whole document when unset.
    pub root: Option<RootSelector>,
    /// Elements after which a text node gets a zero-width space so a leading
    /// apostrophe is not read as an opening quote.
    pub inline_tags: TagSet,
    /// Text nodes whose direct parent is one of these are left alone.
    pub verbatim_parents: TagSet,
    /// Everything below one of these (inside the scanned root) is left alone.
    pub preformatted_tags: TagSet,
    /// Inline style properties removed from elements under `<body>`.
    pub strip_properties: Vec<String>,
}

impl Default for TypographyConfig {
    fn default() -> Self {
        Self {
            root: None,
            inline_tags: TagSet::new(["a", "span", "em", "i", "strong", "b", "sup", "sub"]),
            verbatim_parents: TagSet::new(["code", "style", "script"]),
            preformatted_tags: TagSet::new(["pre"]),
            strip_properties: vec!["font-family".to_string(), "font-size".to_string()],
        }
    }
}

impl TypographyConfig {
    pub fn from_toml(source: &str) -> Result<Self, TypographyError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, TypographyError> {
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&source)?;
        log::debug!(target: "typography.config", "loaded config from {}", path.display());
        Ok(config)
    }

    pub fn with_root(mut self, root: impl Into<RootSelector>) -> Self {
        self.root = Some(root.into());
        self
    }
}
