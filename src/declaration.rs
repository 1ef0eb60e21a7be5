//! Monster declaration intake.
//!
//! A declaration arrives as a display name plus raw option strings
//! (`ac`, `hp`, `speed`, the six ability scores, optional `meta`).
//! Each option runs through the parser named in a fixed field table,
//! the canonical display strings are captured into a [`StatBlock`],
//! and the monster is registered for later cross-referencing.
//!
//! Failures are per-declaration: a bad field fails that one monster
//! and the host moves on to the next block.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{BestiaryError, Result};
use crate::parser::{parse_ability, parse_dice};
use crate::registry::{DocumentRef, MonsterDescriptor, MonsterRegistry};

/// How a declaration field's raw value is turned into display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldParser {
    /// Passed through untouched (armor class, speed).
    Verbatim,
    /// Dice expression, rendered as total plus terms.
    Dice,
    /// Ability score, rendered as score plus modifier.
    Ability,
}

impl FieldParser {
    fn apply(&self, field: &str, raw: &str) -> Result<String> {
        let parsed = match self {
            FieldParser::Verbatim => Ok(raw.to_string()),
            FieldParser::Dice => parse_dice(raw).and_then(|expr| expr.canonical()),
            FieldParser::Ability => parse_ability(raw).map(|score| score.to_string()),
        };
        parsed.map_err(|e| annotate(field, e))
    }
}

/// Attach the field name to a notation error so the diagnostic points
/// at the offending option.
fn annotate(field: &str, err: BestiaryError) -> BestiaryError {
    match err {
        BestiaryError::Format { message, help } => BestiaryError::Format {
            message: format!("{}: {}", field, message),
            help,
        },
        other => other,
    }
}

/// The required declaration fields, in table order.
///
/// Built once; `declare` iterates it explicitly rather than dispatching
/// on field names dynamically.
pub const FIELDS: &[(&str, FieldParser)] = &[
    ("ac", FieldParser::Verbatim),
    ("hp", FieldParser::Dice),
    ("speed", FieldParser::Verbatim),
    ("str", FieldParser::Ability),
    ("dex", FieldParser::Ability),
    ("con", FieldParser::Ability),
    ("int", FieldParser::Ability),
    ("wis", FieldParser::Ability),
    ("cha", FieldParser::Ability),
];

/// Row labels for the attribute table, paired with their field names.
const ATTRIBUTE_LABELS: &[(&str, &str)] = &[
    ("ac", "Armor Class"),
    ("hp", "Hit Points"),
    ("speed", "Speed"),
];

/// Row labels for the ability table.
const ABILITY_LABELS: &[(&str, &str)] = &[
    ("str", "STR"),
    ("dex", "DEX"),
    ("con", "CON"),
    ("int", "INT"),
    ("wis", "WIS"),
    ("cha", "CHA"),
];

/// A raw monster declaration as handed over by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonsterDecl {
    /// Display name (also the registry key).
    pub name: String,
    /// Optional one-line metadata shown under the name.
    pub meta: Option<String>,
    /// Raw option strings keyed by field name.
    pub options: HashMap<String, String>,
    /// Free-form description following the options, passed through.
    pub body: Option<String>,
}

impl MonsterDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set an option field's raw value.
    pub fn option(mut self, field: &str, value: impl Into<String>) -> Self {
        self.options.insert(field.to_string(), value.into());
        self
    }

    pub fn meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = Some(meta.into());
        self
    }
}

/// A declared monster's tables, with display strings fixed at
/// declaration time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatBlock {
    pub name: String,
    /// Anchor identifier, identical to the registered one.
    pub id: String,
    pub meta: Option<String>,
    /// Ordered rows: Armor Class, Hit Points, Speed.
    pub attributes: Vec<(String, String)>,
    /// Ordered rows: STR through CHA.
    pub abilities: Vec<(String, String)>,
    /// Description body, untouched.
    pub body: Option<String>,
}

/// Validate a declaration, register the monster, and return its stat
/// block.
///
/// Every field in [`FIELDS`] is required; unknown option names are
/// rejected so typos surface instead of silently dropping a stat.
pub fn declare(
    decl: MonsterDecl,
    doc: impl Into<DocumentRef>,
    registry: &mut MonsterRegistry,
) -> Result<StatBlock> {
    if decl.name.trim().is_empty() {
        return Err(BestiaryError::Declaration {
            message: "Monster declaration has no name".to_string(),
            help: None,
        });
    }

    for key in decl.options.keys() {
        if !FIELDS.iter().any(|(name, _)| *name == key.as_str()) {
            return Err(BestiaryError::Declaration {
                message: format!("Unknown field '{}' on monster '{}'", key, decl.name),
                help: Some("Valid fields: ac, hp, speed, str, dex, con, int, wis, cha".to_string()),
            });
        }
    }

    let mut parsed: HashMap<&str, String> = HashMap::new();
    for (field, parser) in FIELDS {
        let raw = decl
            .options
            .get(*field)
            .ok_or_else(|| BestiaryError::Declaration {
                message: format!("Monster '{}' is missing required field '{}'", decl.name, field),
                help: None,
            })?;
        parsed.insert(*field, parser.apply(field, raw)?);
    }

    let row = |labels: &[(&str, &str)]| {
        labels
            .iter()
            .map(|(field, label)| (label.to_string(), parsed[field].clone()))
            .collect::<Vec<_>>()
    };
    let attributes = row(ATTRIBUTE_LABELS);
    let abilities = row(ABILITY_LABELS);

    let descriptor = MonsterDescriptor::new(decl.name.clone(), doc, decl.meta.clone());
    let id = descriptor.id.clone();
    registry.register(descriptor);

    Ok(StatBlock {
        name: decl.name,
        id,
        meta: decl.meta,
        attributes,
        abilities,
        body: decl.body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn goblin_decl() -> MonsterDecl {
        MonsterDecl::new("Goblin")
            .meta("Small humanoid, neutral evil")
            .option("ac", "15 (leather armor, shield)")
            .option("hp", "2d6")
            .option("speed", "30 ft.")
            .option("str", "8")
            .option("dex", "14")
            .option("con", "10")
            .option("int", "10")
            .option("wis", "8")
            .option("cha", "8")
    }

    #[test]
    fn test_declare_builds_stat_block() {
        let mut registry = MonsterRegistry::new();
        let block = declare(goblin_decl(), "monsters/goblinoids", &mut registry).unwrap();

        assert_eq!(block.id, "monster-goblin");
        assert_eq!(
            block.attributes,
            vec![
                ("Armor Class".to_string(), "15 (leather armor, shield)".to_string()),
                ("Hit Points".to_string(), "7 (2d6)".to_string()),
                ("Speed".to_string(), "30 ft.".to_string()),
            ]
        );
        assert_eq!(block.abilities[0], ("STR".to_string(), "8 (-1)".to_string()));
        assert_eq!(block.abilities[1], ("DEX".to_string(), "14 (+2)".to_string()));
        assert_eq!(block.abilities.len(), 6);
    }

    #[test]
    fn test_declare_registers_monster() {
        let mut registry = MonsterRegistry::new();
        declare(goblin_decl(), "monsters/goblinoids", &mut registry).unwrap();

        let hit = registry.resolve("Goblin").unwrap();
        assert_eq!(hit.id, "monster-goblin");
        assert_eq!(hit.doc.as_str(), "monsters/goblinoids");
        assert_eq!(hit.meta.as_deref(), Some("Small humanoid, neutral evil"));
    }

    #[test]
    fn test_declare_missing_field() {
        let mut decl = goblin_decl();
        decl.options.remove("hp");

        let mut registry = MonsterRegistry::new();
        let err = declare(decl, "monsters/goblinoids", &mut registry).unwrap_err();
        assert!(matches!(err, BestiaryError::Declaration { .. }));
        assert!(err.to_string().contains("'hp'"));
        // Nothing half-registered
        assert!(registry.is_empty());
    }

    #[test]
    fn test_declare_unknown_field() {
        let decl = goblin_decl().option("armour", "12");

        let mut registry = MonsterRegistry::new();
        let err = declare(decl, "monsters/goblinoids", &mut registry).unwrap_err();
        assert!(matches!(err, BestiaryError::Declaration { .. }));
    }

    #[test]
    fn test_declare_bad_notation_names_field() {
        let mut decl = goblin_decl();
        decl.options.insert("str".to_string(), "abc".to_string());

        let mut registry = MonsterRegistry::new();
        let err = declare(decl, "monsters/goblinoids", &mut registry).unwrap_err();
        assert!(err.to_string().contains("str"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_declare_unsupported_die() {
        let mut decl = goblin_decl();
        decl.options.insert("hp".to_string(), "2d13".to_string());

        let mut registry = MonsterRegistry::new();
        let err = declare(decl, "monsters/goblinoids", &mut registry).unwrap_err();
        assert!(matches!(err, BestiaryError::UnsupportedDie { sides: 13 }));
    }
}
