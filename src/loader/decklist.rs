//! Decklist loader (Arena export format)
//!
//! ```text
//! Deck
//! 4 Shock (M20) 160
//! 20 Mountain
//!
//! Sideboard
//! 2 Negate (M20) 69
//! ```

use crate::loader::snapshot::ArchetypeRecord;
use crate::{AdvisorError, Result};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Zone {
    Main,
    Sideboard,
}

/// Parse a decklist from its text content
///
/// Section headers (`Deck`, `Sideboard`, `Companion`) switch zones, and so
/// does the first blank line after main deck entries, which is how the client
/// separates the sideboard when it omits headers. Duplicate names are kept;
/// rejecting them is up to archetype validation.
pub fn parse(name: &str, content: &str) -> Result<ArchetypeRecord> {
    let mut main_deck = Vec::new();
    let mut sideboard = Vec::new();
    let mut zone = Zone::Main;
    let mut skipping_about = false;

    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();

        if line.is_empty() {
            skipping_about = false;
            if zone == Zone::Main && !main_deck.is_empty() {
                zone = Zone::Sideboard;
            }
            continue;
        }
        if line.starts_with('#') || line.starts_with("//") {
            continue;
        }

        match line.to_lowercase().as_str() {
            "deck" | "main" | "maindeck" => {
                zone = Zone::Main;
                continue;
            }
            "sideboard" | "companion" => {
                zone = Zone::Sideboard;
                continue;
            }
            "about" => {
                skipping_about = true;
                continue;
            }
            _ => {}
        }
        if skipping_about {
            continue;
        }

        let (count, card_name) = parse_entry(line).ok_or_else(|| {
            AdvisorError::InvalidRecord(format!(
                "{name}: line {}: expected '<count> <card name>', got '{line}'",
                line_no + 1
            ))
        })?;

        match zone {
            Zone::Main => main_deck.push((card_name, count)),
            Zone::Sideboard => sideboard.push((card_name, count)),
        }
    }

    if main_deck.is_empty() {
        return Err(AdvisorError::InvalidRecord(format!("{name}: empty deck")));
    }

    Ok(ArchetypeRecord {
        name: name.to_string(),
        main_deck,
        sideboard,
    })
}

/// "4 Shock (M20) 160" -> (4, "Shock")
fn parse_entry(line: &str) -> Option<(u32, String)> {
    let (count_str, rest) = line.split_once(' ')?;
    let count = count_str.trim_end_matches('x').parse::<u32>().ok()?;
    let card_name = match rest.find(" (") {
        Some(idx) if rest[idx..].contains(')') => &rest[..idx],
        _ => rest,
    };
    let card_name = card_name.trim();
    if card_name.is_empty() {
        return None;
    }
    Some((count, card_name.to_string()))
}

/// Load a decklist file, naming the archetype after the file stem
pub fn load_from_file(path: &Path) -> Result<ArchetypeRecord> {
    let content = fs::read_to_string(path).map_err(AdvisorError::IoError)?;
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Unnamed");
    parse(name, &content)
}

/// Load every `*.txt` decklist under a format directory, sorted by name
pub fn load_directory(dir: &Path) -> Result<Vec<ArchetypeRecord>> {
    if !dir.is_dir() {
        return Err(AdvisorError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Decklist directory not found: {dir:?}"),
        )));
    }

    let mut paths = Vec::new();
    for entry in jwalk::WalkDir::new(dir).sort(true) {
        let entry = entry.map_err(|e| AdvisorError::IoError(std::io::Error::other(e)))?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().and_then(|s| s.to_str()) == Some("txt")
        {
            paths.push(path);
        }
    }

    let mut records = paths
        .iter()
        .map(|path| load_from_file(path))
        .collect::<Result<Vec<_>>>()?;
    records.sort_by(|a, b| a.name.cmp(&b.name));
    log::info!("Loaded {} decklists from {}", records.len(), dir.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_headers() {
        let content = r#"
Deck
4 Shock (M20) 160
20 Mountain
4 Lightning Strike

Sideboard
2 Negate (M20) 69
"#;
        let deck = parse("Mono Red", content).unwrap();
        assert_eq!(deck.name, "Mono Red");
        assert_eq!(
            deck.main_deck,
            vec![
                ("Shock".to_string(), 4),
                ("Mountain".to_string(), 20),
                ("Lightning Strike".to_string(), 4),
            ]
        );
        assert_eq!(deck.sideboard, vec![("Negate".to_string(), 2)]);
    }

    #[test]
    fn test_blank_line_starts_sideboard() {
        let content = "4 Opt\n16 Island\n\n3 Negate\n";
        let deck = parse("Blue", content).unwrap();
        assert_eq!(deck.main_deck.len(), 2);
        assert_eq!(deck.sideboard, vec![("Negate".to_string(), 3)]);
    }

    #[test]
    fn test_about_section_skipped() {
        let content = "About\nName Mono Blue\n\nDeck\n4 Opt\n";
        let deck = parse("Blue", content).unwrap();
        assert_eq!(deck.main_deck, vec![("Opt".to_string(), 4)]);
    }

    #[test]
    fn test_duplicates_survive_parsing() {
        let deck = parse("Dup", "4 Shock\n2 Shock\n").unwrap();
        assert_eq!(deck.main_deck.len(), 2);
    }

    #[test]
    fn test_bad_line() {
        assert!(matches!(
            parse("Bad", "Deck\nfour Shock\n"),
            Err(AdvisorError::InvalidRecord(_))
        ));
        assert!(parse("Empty", "Sideboard\n2 Negate\n").is_err());
    }
}
