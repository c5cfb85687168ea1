//! Loosely-typed definition input, as read from JSON.
//!
//! Kinds arrive as strings here, so this is the one place where the
//! unsupported-kind errors can actually occur.

use crate::define::Definition;
use crate::error::{DefineError, Result};
use crate::example::{Example, ExampleKind};
use crate::fragment::{Field, Fragment, FragmentKind};
use serde::Deserialize;
use tracing::warn;

/// A definition file: one definition or a list of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawDocument {
    One(RawDefinition),
    Many(Vec<RawDefinition>),
}

impl RawDocument {
    pub fn into_definitions(self) -> Result<Vec<Definition>> {
        match self {
            RawDocument::One(raw) => Ok(vec![raw.into_definition()?]),
            RawDocument::Many(raws) => raws.into_iter().map(RawDefinition::into_definition).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawDefinition {
    pub name: String,
    #[serde(default)]
    pub group: Option<String>,
    /// Request path; its first segment becomes the group when `group` is unset.
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub fragments: Vec<RawFragmentArg>,
    #[serde(default)]
    pub examples: Vec<RawExample>,
}

impl RawDefinition {
    pub fn into_definition(self) -> Result<Definition> {
        let mut def = match self.path {
            Some(ref path) => Definition::for_path(path, self.name),
            None => Definition::new(self.name),
        };
        if self.group.is_some() {
            def.group = self.group;
        }
        def.add_raw_fragments(self.fragments)?;
        for example in self.examples {
            def.add_raw_example(example)?;
        }
        Ok(def)
    }
}

/// A fragments entry: an object, or an array of objects.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawFragmentArg {
    One(RawFragment),
    Many(Vec<RawFragment>),
}

impl IntoIterator for RawFragmentArg {
    type Item = RawFragment;
    type IntoIter = std::vec::IntoIter<RawFragment>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            RawFragmentArg::One(f) => vec![f].into_iter(),
            RawFragmentArg::Many(fs) => fs.into_iter(),
        }
    }
}

impl From<RawFragment> for RawFragmentArg {
    fn from(f: RawFragment) -> Self {
        RawFragmentArg::One(f)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFragment {
    pub kind: String,
    pub field: String,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default, rename = "type")]
    pub type_name: Option<String>,
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub description: Option<String>,
}

impl TryFrom<RawFragment> for Fragment {
    type Error = DefineError;

    fn try_from(raw: RawFragment) -> Result<Self> {
        let kind: FragmentKind = raw.kind.parse()?;
        let field = Field {
            group: raw.group,
            type_name: raw.type_name,
            name: raw.field,
            default: raw.default,
            optional: raw.optional,
            description: raw.description,
        };
        Ok(Fragment::field(kind, field))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawExample {
    pub kind: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "type")]
    pub type_name: Option<String>,
    /// Pre-formatted body.
    #[serde(default)]
    pub content: Option<String>,
    /// Body serialized as tab-indented JSON; takes precedence over `content`.
    #[serde(default)]
    pub json: Option<serde_json::Value>,
}

impl TryFrom<RawExample> for Example {
    type Error = DefineError;

    fn try_from(raw: RawExample) -> Result<Self> {
        let kind: ExampleKind = raw.kind.parse()?;
        let mut example = match raw.json {
            Some(value) => {
                if raw.content.is_some() {
                    warn!(title = %raw.title, "example has both json and content, using json");
                }
                Example::json(kind, raw.title.clone(), &value).unwrap_or_else(|_| {
                    Example::new(kind, raw.title.clone(), value.to_string()).with_type("json")
                })
            }
            None => Example::new(kind, raw.title, raw.content.unwrap_or_default()),
        };
        if raw.type_name.is_some() {
            example.type_name = raw.type_name;
        }
        Ok(example)
    }
}

impl Definition {
    /// Append loosely-typed fragments, expanding sequences one level.
    ///
    /// Stops at the first unsupported kind: fragments before it stay
    /// appended, none after it are touched.
    pub fn add_raw_fragments<I>(&mut self, items: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<RawFragmentArg>,
    {
        for item in items {
            for raw in item.into() {
                let fragment = Fragment::try_from(raw)?;
                self.push_fragment(fragment);
            }
        }
        Ok(self)
    }

    /// Attach a loosely-typed example.
    pub fn add_raw_example(&mut self, raw: RawExample) -> Result<&mut Self> {
        let example = Example::try_from(raw)?;
        Ok(self.add_example(example))
    }
}
