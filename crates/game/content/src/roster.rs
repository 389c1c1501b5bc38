//! The ordered list of fighter templates a session picks from.

use arena_core::{Archetype, Fighter, FighterSnapshot};

/// Fixed, ordered list of fighter templates.
///
/// Built once at session start. Templates are only ever read or cloned.
#[derive(Clone, Debug, PartialEq)]
pub struct Roster {
    templates: Vec<Fighter>,
}

impl Roster {
    /// One template per archetype with canonical stats, in [`Archetype::ALL`] order.
    pub fn standard() -> Self {
        Self {
            templates: Archetype::ALL.into_iter().map(Fighter::new).collect(),
        }
    }

    pub fn from_templates(templates: Vec<Fighter>) -> Self {
        Self { templates }
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Template at a zero-based index.
    pub fn get(&self, index: usize) -> Option<&Fighter> {
        self.templates.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fighter> {
        self.templates.iter()
    }

    /// Zero-based index of the first template of `archetype`.
    pub fn position_of(&self, archetype: Archetype) -> Option<usize> {
        self.templates
            .iter()
            .position(|template| template.archetype() == archetype)
    }

    /// Stats of every template, for the "show fighters" screen.
    pub fn snapshots(&self) -> Vec<FighterSnapshot> {
        self.templates.iter().map(Fighter::describe).collect()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::standard()
    }
}
