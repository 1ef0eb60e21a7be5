//! Descriptor types for registered monsters.

use std::fmt;

use serde::Serialize;

/// An opaque reference to the document a monster was declared in.
///
/// The host decides what this means (a docname, a relative path); the
/// registry only stores and returns it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DocumentRef(String);

impl DocumentRef {
    pub fn new(doc: impl Into<String>) -> Self {
        Self(doc.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DocumentRef {
    fn from(doc: &str) -> Self {
        Self::new(doc)
    }
}

impl From<String> for DocumentRef {
    fn from(doc: String) -> Self {
        Self::new(doc)
    }
}

/// Everything the registry knows about one declared monster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonsterDescriptor {
    /// Display name; the registry's sole key.
    pub name: String,
    /// Anchor identifier derived from the name at declaration time.
    /// Stored verbatim, never recomputed.
    pub id: String,
    /// Document the declaration lives in.
    pub doc: DocumentRef,
    /// Optional one-line metadata ("Medium humanoid, chaotic evil").
    pub meta: Option<String>,
}

impl MonsterDescriptor {
    /// Create a descriptor, deriving the identifier from the name.
    pub fn new(name: impl Into<String>, doc: impl Into<DocumentRef>, meta: Option<String>) -> Self {
        let name = name.into();
        let id = monster_id(&name);
        Self {
            name,
            id,
            doc: doc.into(),
            meta,
        }
    }
}

/// Derive a cross-reference identifier from a display name.
///
/// Lowercases ASCII letters, turns spaces into hyphens, drops every
/// other character, and prefixes `monster-`:
/// `"Ancient Red Dragon"` becomes `"monster-ancient-red-dragon"`.
pub fn monster_id(name: &str) -> String {
    let slug: String = name
        .chars()
        .map(|c| match c {
            ' ' => '-',
            c if c.is_ascii_uppercase() => c.to_ascii_lowercase(),
            c => c,
        })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect();
    format!("monster-{}", slug)
}
