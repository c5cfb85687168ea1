//! Ordered collection of definitions making up one documentation set.

use crate::define::Definition;
use std::io::{self, Write};
use tracing::warn;

#[derive(Debug, Default)]
pub struct DefinitionSet {
    definitions: Vec<Definition>,
}

impl DefinitionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a definition. Duplicate names are an authoring mistake that
    /// apidoc resolves on its own, so they are only reported.
    pub fn push(&mut self, definition: Definition) -> &mut Self {
        if self.contains(definition.name()) {
            warn!(name = definition.name(), "duplicate apiDefine name");
        }
        self.definitions.push(definition);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.definitions.iter().any(|d| d.name() == name)
    }

    /// First definition with the given name.
    pub fn get(&self, name: &str) -> Option<&Definition> {
        self.definitions.iter().find(|d| d.name() == name)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Definition> {
        self.definitions.iter()
    }

    /// Keep only definitions whose group label equals `group`.
    pub fn retain_group(&mut self, group: &str) {
        self.definitions
            .retain(|d| d.group.as_deref() == Some(group));
    }

    /// Render every definition in insertion order.
    pub fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        for definition in &self.definitions {
            definition.render(out)?;
        }
        Ok(())
    }
}

impl Extend<Definition> for DefinitionSet {
    fn extend<T: IntoIterator<Item = Definition>>(&mut self, iter: T) {
        for definition in iter {
            self.push(definition);
        }
    }
}

impl FromIterator<Definition> for DefinitionSet {
    fn from_iter<T: IntoIterator<Item = Definition>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a DefinitionSet {
    type Item = &'a Definition;
    type IntoIter = std::slice::Iter<'a, Definition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
