//! Dice notation parsing.
//!
//! Hit-point specs are written as a sum of dice and flat bonuses
//! (`2d6 + 3`). Parsing fixes the canonical display string and the
//! expected total at declaration time; nothing is ever re-rolled or
//! re-evaluated later.

use std::fmt;

use crate::error::{BestiaryError, Result};

/// Average roll for each supported die type.
///
/// Returns `None` for side counts with no published average, which
/// callers surface as an unsupported-die error.
pub fn die_average(sides: u32) -> Option<f64> {
    match sides {
        4 => Some(2.5),
        6 => Some(3.5),
        8 => Some(4.5),
        10 => Some(5.5),
        12 => Some(6.5),
        20 => Some(10.5),
        100 => Some(50.5),
        _ => None,
    }
}

/// A number of identical dice, e.g. `2d6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Die {
    pub count: u32,
    pub sides: u32,
}

impl Die {
    pub fn new(count: u32, sides: u32) -> Self {
        Self { count, sides }
    }

    /// Average value of rolling all dice in this group.
    ///
    /// Fails when the side count is outside the supported set.
    pub fn average(&self) -> Result<f64> {
        die_average(self.sides)
            .map(|avg| avg * f64::from(self.count))
            .ok_or(BestiaryError::UnsupportedDie { sides: self.sides })
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

/// One term of a dice expression: a die group or a flat bonus/penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiceTerm {
    Die(Die),
    Flat(i64),
}

impl DiceTerm {
    /// The term's contribution to the expression total.
    pub fn value(&self) -> Result<f64> {
        match self {
            DiceTerm::Die(die) => die.average(),
            DiceTerm::Flat(n) => Ok(*n as f64),
        }
    }
}

impl fmt::Display for DiceTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiceTerm::Die(die) => die.fmt(f),
            DiceTerm::Flat(n) => n.fmt(f),
        }
    }
}

/// A parsed dice expression: one or more terms joined by `+`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceExpr {
    terms: Vec<DiceTerm>,
}

impl DiceExpr {
    /// The terms in source order.
    pub fn terms(&self) -> &[DiceTerm] {
        &self.terms
    }

    /// Expected total: die averages plus flat bonuses, truncated
    /// toward zero after summing.
    pub fn total(&self) -> Result<i64> {
        let mut total = 0.0;
        for term in &self.terms {
            total += term.value()?;
        }
        Ok(total as i64)
    }

    /// Canonical display string, e.g. `10 (2d6 + 3)`.
    pub fn canonical(&self) -> Result<String> {
        let total = self.total()?;
        let terms = self
            .terms
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" + ");
        Ok(format!("{} ({})", total, terms))
    }
}

/// Parse a single term: `NdM` (count optional, `d` or `D`) or a bare
/// integer. The token must match exactly; anything else is a format
/// error.
pub fn parse_die(token: &str) -> Result<DiceTerm> {
    if let Some((count, sides)) = split_die(token) {
        let count = if count.is_empty() {
            1
        } else {
            parse_number(count, token)?
        };
        let sides = parse_number(sides, token)?;
        return Ok(DiceTerm::Die(Die::new(count, sides)));
    }

    let flat = token.parse::<i64>().map_err(|_| BestiaryError::Format {
        message: format!("Invalid die token: '{}'", token),
        help: Some("Write dice as NdM (e.g. 2d6) or a flat integer".to_string()),
    })?;
    Ok(DiceTerm::Flat(flat))
}

/// Split a token at its `d`/`D` separator if both halves look like a
/// die spec (optional digits, then required digits).
fn split_die(token: &str) -> Option<(&str, &str)> {
    let d_pos = token.find(['d', 'D'])?;
    let (count, rest) = token.split_at(d_pos);
    let sides = &rest[1..];

    let count_ok = count.chars().all(|c| c.is_ascii_digit());
    let sides_ok = !sides.is_empty() && sides.chars().all(|c| c.is_ascii_digit());
    (count_ok && sides_ok).then_some((count, sides))
}

fn parse_number(digits: &str, token: &str) -> Result<u32> {
    digits.parse().map_err(|_| BestiaryError::Format {
        message: format!("Invalid die token: '{}'", token),
        help: Some("Counts and side numbers must fit in 32 bits".to_string()),
    })
}

/// Parse a full dice expression such as `2d6 + 3`.
///
/// Terms are split on `+` and whitespace-trimmed. An empty input or an
/// empty term (`2d6 + `) is a format error.
pub fn parse_dice(value: &str) -> Result<DiceExpr> {
    let terms = value
        .trim()
        .split('+')
        .map(|term| parse_die(term.trim()))
        .collect::<Result<Vec<_>>>()?;

    let expr = DiceExpr { terms };

    // Validate die types eagerly so declaration-time parsing reports
    // unsupported dice instead of deferring to the first total() call.
    expr.total()?;

    Ok(expr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_die_with_count() {
        assert_eq!(parse_die("2d6").unwrap(), DiceTerm::Die(Die::new(2, 6)));
        assert_eq!(parse_die("10d8").unwrap(), DiceTerm::Die(Die::new(10, 8)));
    }

    #[test]
    fn test_parse_die_default_count() {
        assert_eq!(parse_die("d20").unwrap(), DiceTerm::Die(Die::new(1, 20)));
        // The count is always rendered, even when the source omitted it
        assert_eq!(parse_die("d20").unwrap().to_string(), "1d20");
    }

    #[test]
    fn test_parse_die_uppercase() {
        assert_eq!(parse_die("3D10").unwrap(), DiceTerm::Die(Die::new(3, 10)));
    }

    #[test]
    fn test_parse_die_flat() {
        assert_eq!(parse_die("3").unwrap(), DiceTerm::Flat(3));
        assert_eq!(parse_die("-2").unwrap(), DiceTerm::Flat(-2));
    }

    #[test]
    fn test_parse_die_garbage() {
        assert!(matches!(
            parse_die("2x6"),
            Err(BestiaryError::Format { .. })
        ));
        assert!(matches!(parse_die(""), Err(BestiaryError::Format { .. })));
        assert!(matches!(
            parse_die("2d6 "),
            Err(BestiaryError::Format { .. })
        ));
    }

    #[test]
    fn test_parse_die_no_bound_on_sides() {
        // parse_die accepts any side count; only averaging rejects it
        let term = parse_die("1d13").unwrap();
        assert_eq!(term, DiceTerm::Die(Die::new(1, 13)));
        assert!(matches!(
            term.value(),
            Err(BestiaryError::UnsupportedDie { sides: 13 })
        ));
    }

    #[test]
    fn test_die_averages() {
        for (sides, avg) in [(4, 2.5), (6, 3.5), (8, 4.5), (10, 5.5), (12, 6.5), (20, 10.5), (100, 50.5)] {
            let die = Die::new(2, sides);
            assert_eq!(die.average().unwrap(), 2.0 * avg);
        }
    }

    #[test]
    fn test_parse_dice_with_bonus() {
        let expr = parse_dice("2d6 + 3").unwrap();
        assert_eq!(expr.total().unwrap(), 10); // 2 * 3.5 + 3
        assert_eq!(expr.canonical().unwrap(), "10 (2d6 + 3)");
    }

    #[test]
    fn test_parse_dice_truncates_total() {
        let expr = parse_dice("1d20").unwrap();
        assert_eq!(expr.canonical().unwrap(), "10 (1d20)"); // 10.5 -> 10
    }

    #[test]
    fn test_parse_dice_multiple_dice() {
        let expr = parse_dice("2d8 + 1d6 + 4").unwrap();
        assert_eq!(expr.total().unwrap(), 16); // 9 + 3.5 + 4 = 16.5 -> 16
        assert_eq!(expr.canonical().unwrap(), "16 (2d8 + 1d6 + 4)");
    }

    #[test]
    fn test_parse_dice_unsupported_sides() {
        assert!(matches!(
            parse_dice("1d13"),
            Err(BestiaryError::UnsupportedDie { sides: 13 })
        ));
    }

    #[test]
    fn test_parse_dice_empty() {
        assert!(parse_dice("").is_err());
        assert!(parse_dice("   ").is_err());
        assert!(parse_dice("2d6 + ").is_err());
    }
}
