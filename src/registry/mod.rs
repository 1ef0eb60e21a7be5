//! Monster registry: the build-wide name to anchor mapping.
//!
//! The registry is created by the host at the start of a build pass,
//! handed into every declaration and cross-reference resolution, and
//! dropped (or cleared) when the pass ends. There is no ambient global
//! state; hosts that parallelize across documents wrap the registry in
//! their own lock.
//!
//! # Example
//!
//! ```ignore
//! use bestiary::registry::{MonsterDescriptor, MonsterRegistry};
//!
//! let mut registry = MonsterRegistry::new();
//! registry.register(MonsterDescriptor::new("Goblin", "monsters/goblinoids", None));
//!
//! let hit = registry.resolve("Goblin").expect("registered above");
//! println!("{}#{}", hit.doc, hit.id);
//! ```

pub mod types;

use std::collections::HashMap;

pub use types::{monster_id, DocumentRef, MonsterDescriptor};

/// Mapping from monster display name to its descriptor.
///
/// Append-only during a build pass: entries are added or overwritten,
/// never removed. Name is the sole key; re-registering a name replaces
/// the previous descriptor wholesale, even across documents.
#[derive(Debug, Clone, Default)]
pub struct MonsterRegistry {
    monsters: HashMap<String, MonsterDescriptor>,
}

impl MonsterRegistry {
    /// Create an empty registry for a new build pass.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry for the descriptor's name.
    ///
    /// Last write wins. The displaced descriptor, if any, is returned
    /// so the host can diagnose unintended collisions; the registry
    /// itself does not treat overwrites as errors.
    pub fn register(&mut self, descriptor: MonsterDescriptor) -> Option<MonsterDescriptor> {
        self.monsters.insert(descriptor.name.clone(), descriptor)
    }

    /// Look up a monster by its display name.
    ///
    /// `None` means the reference is broken; the host should log a
    /// diagnostic and leave the reference as plain text rather than
    /// abort the build.
    pub fn resolve(&self, name: &str) -> Option<&MonsterDescriptor> {
        self.monsters.get(name)
    }

    /// Iterate over all registered descriptors, in no particular order.
    ///
    /// Restartable: each call yields a fresh iterator over the current
    /// entries. Index construction sorts and groups on top of this.
    pub fn iter(&self) -> impl Iterator<Item = &MonsterDescriptor> {
        self.monsters.values()
    }

    /// Number of registered monsters.
    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    /// Check if no monsters have been registered.
    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }

    /// Drop all entries, readying the registry for the next build pass.
    pub fn clear(&mut self) {
        self.monsters.clear();
    }
}
