//! Parsers for monster stat notation and declaration blocks.
//!
//! The notation parsers are pure text transforms: they validate a
//! field's raw string and produce its canonical display form at
//! declaration time, with no access to document state. The block
//! parser handles the surrounding frontmatter structure and leaves
//! field values raw.

pub mod ability;
pub mod block;
pub mod dice;

pub use ability::{parse_ability, AbilityScore};
pub use block::parse_monster_blocks;
pub use dice::{die_average, parse_dice, parse_die, DiceExpr, DiceTerm, Die};
