//! Monster declaration block parser.
//!
//! Declarations are written in the same shape as the rest of the
//! documentation tooling's definition files: YAML frontmatter between
//! `---` markers naming the monster and its stat fields, followed by
//! free-form description text.
//!
//! ```text
//! ---
//! name: Goblin
//! meta: Small humanoid, neutral evil
//! ac: 15 (leather armor, shield)
//! hp: 2d6
//! speed: 30 ft.
//! str: 8
//! dex: 14
//! con: 10
//! int: 10
//! wis: 8
//! cha: 8
//! ---
//!
//! Goblins are small, black-hearted humanoids...
//! ```
//!
//! One source string may hold several declarations back to back.

use crate::declaration::MonsterDecl;
use crate::error::{BestiaryError, Result};

/// Parse a source string into one or more raw monster declarations.
///
/// Values are kept as raw strings for the declaration field table to
/// validate; this parser only handles the block structure.
pub fn parse_monster_blocks(source: &str) -> Result<Vec<MonsterDecl>> {
    let mut decls = Vec::new();
    let mut rest = source.trim_start();

    while !rest.is_empty() {
        let (decl, remaining) = parse_block(rest)?;
        decls.push(decl);
        rest = remaining.trim_start();
    }

    if decls.is_empty() {
        return Err(BestiaryError::Format {
            message: "No monster declarations found".to_string(),
            help: Some("Each declaration starts with --- frontmatter".to_string()),
        });
    }

    Ok(decls)
}

/// Parse a single block, returning the declaration and the unconsumed
/// remainder of the source.
fn parse_block(source: &str) -> Result<(MonsterDecl, &str)> {
    if !source.starts_with("---") {
        return Err(BestiaryError::Format {
            message: "Monster declaration must start with ---".to_string(),
            help: Some("Add frontmatter: ---\\nname: Goblin\\n---".to_string()),
        });
    }

    let after_open = skip_line(&source[3..]);
    let close = find_delimiter(after_open).ok_or_else(|| BestiaryError::Format {
        message: "Unclosed frontmatter: missing closing ---".to_string(),
        help: Some("Add --- after the field list".to_string()),
    })?;

    let yaml = &after_open[..close];
    let after_close = skip_line(&after_open[close + 3..]);

    // Body runs until the next block's opening --- or end of input
    let (body, rest) = match find_delimiter(after_close) {
        Some(next) => (&after_close[..next], &after_close[next..]),
        None => (after_close, ""),
    };

    let decl = decl_from_yaml(yaml)?;
    let body = body.trim();
    let decl = MonsterDecl {
        body: (!body.is_empty()).then(|| body.to_string()),
        ..decl
    };

    Ok((decl, rest))
}

/// Build a declaration from the frontmatter mapping.
fn decl_from_yaml(yaml: &str) -> Result<MonsterDecl> {
    let parsed: serde_yaml::Value =
        serde_yaml::from_str(yaml).map_err(|e| BestiaryError::Format {
            message: format!("Invalid YAML in declaration: {}", e),
            help: None,
        })?;

    let mapping = match parsed {
        serde_yaml::Value::Mapping(map) => map,
        _ => {
            return Err(BestiaryError::Format {
                message: "Declaration frontmatter must be a mapping".to_string(),
                help: Some("Use key: value format".to_string()),
            })
        }
    };

    let mut decl = MonsterDecl::default();
    for (key, value) in mapping {
        let key = key.as_str().ok_or_else(|| BestiaryError::Format {
            message: "Declaration field names must be strings".to_string(),
            help: None,
        })?;
        let value = scalar_to_string(&value).ok_or_else(|| BestiaryError::Format {
            message: format!("Field '{}' must be a scalar value", key),
            help: None,
        })?;

        match key {
            "name" => decl.name = value,
            "meta" => decl.meta = Some(value),
            _ => {
                decl.options.insert(key.to_string(), value);
            }
        }
    }

    if decl.name.is_empty() {
        return Err(BestiaryError::Format {
            message: "Monster declaration is missing 'name'".to_string(),
            help: Some("Add name: <display name> to the frontmatter".to_string()),
        });
    }

    Ok(decl)
}

/// Render a YAML scalar back to the raw string the field parsers see.
///
/// YAML will happily type `hp: 7` as a number and `dex: 14` likewise;
/// the field table wants text either way.
fn scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Skip past the current line, returning the text after its newline.
fn skip_line(s: &str) -> &str {
    match s.find('\n') {
        Some(i) => &s[i + 1..],
        None => "",
    }
}

/// Find the offset of the next `---` delimiter at the start of a line.
///
/// Offsets are tracked from the newline positions themselves rather
/// than accumulated line lengths, so CRLF terminators don't skew them.
fn find_delimiter(s: &str) -> Option<usize> {
    let mut offset = 0;
    loop {
        let line_end = s[offset..].find('\n').map(|i| offset + i);
        let line = match line_end {
            Some(end) => &s[offset..end],
            None => &s[offset..],
        };
        if line.trim_end() == "---" {
            return Some(offset);
        }
        offset = line_end? + 1;
    }
}
