//! Alphabetical monster index.
//!
//! Builds the data behind the index page: every registered monster,
//! sorted case-insensitively and grouped under the upper-cased first
//! letter of its name. Rendering the groups into an actual page is the
//! host's job.

use serde::Serialize;

use crate::registry::{DocumentRef, MonsterRegistry};

/// One line of the index: enough to render a link and its blurb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    pub name: String,
    pub id: String,
    pub doc: DocumentRef,
    pub meta: Option<String>,
}

/// All index entries sharing a first letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexGroup {
    /// Upper-cased first letter of the group's names.
    pub letter: char,
    /// Entries sorted by case-folded name.
    pub entries: Vec<IndexEntry>,
}

/// Build the sorted, grouped index from the registry.
///
/// Entries are ordered by case-folded name (ties broken by the raw
/// name, so `goblin` and `Goblin` have a stable order), and groups by
/// letter. An empty registry yields no groups.
pub fn monster_index(registry: &MonsterRegistry) -> Vec<IndexGroup> {
    let mut entries: Vec<IndexEntry> = registry
        .iter()
        .map(|m| IndexEntry {
            name: m.name.clone(),
            id: m.id.clone(),
            doc: m.doc.clone(),
            meta: m.meta.clone(),
        })
        .collect();

    entries.sort_by(|a, b| {
        (a.name.to_lowercase(), &a.name).cmp(&(b.name.to_lowercase(), &b.name))
    });

    let mut groups: Vec<IndexGroup> = Vec::new();
    for entry in entries {
        let letter = entry
            .name
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('?');

        match groups.last_mut() {
            Some(group) if group.letter == letter => group.entries.push(entry),
            _ => groups.push(IndexGroup {
                letter,
                entries: vec![entry],
            }),
        }
    }

    groups.sort_by_key(|g| g.letter);
    groups
}
