//! bestiary - Monster stat-block tooling for documentation builds
//!
//! A library for turning textual monster declarations into stat tables
//! and a cross-referenced, alphabetically indexed bestiary. The host
//! documentation tool owns file discovery and rendering; this crate
//! owns notation parsing, the monster registry, and index construction.

pub mod declaration;
pub mod error;
pub mod index;
pub mod parser;
pub mod registry;

pub use declaration::{declare, FieldParser, MonsterDecl, StatBlock, FIELDS};
pub use error::{BestiaryError, Result};
pub use index::{monster_index, IndexEntry, IndexGroup};
pub use parser::{parse_ability, parse_dice, parse_die, parse_monster_blocks, AbilityScore, DiceExpr, DiceTerm, Die};
pub use registry::{monster_id, DocumentRef, MonsterDescriptor, MonsterRegistry};
