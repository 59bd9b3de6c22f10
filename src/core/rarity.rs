//! Card rarity

use crate::{AdvisorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rarity of a printing, ordered from least to most scarce
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Rarity {
    Token,
    BasicLand,
    Common,
    Uncommon,
    Rare,
    MythicRare,
}

impl Rarity {
    /// Rarities that have a wildcard of their own
    pub const COLLECTIBLE: [Rarity; 4] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::MythicRare,
    ];

    pub fn is_collectible(&self) -> bool {
        *self >= Rarity::Common
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Token => "token",
            Rarity::BasicLand => "basic",
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::MythicRare => "mythic",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Rarity {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace([' ', '_'], "").as_str() {
            "token" => Ok(Rarity::Token),
            "basic" | "basicland" | "land" => Ok(Rarity::BasicLand),
            "common" => Ok(Rarity::Common),
            "uncommon" => Ok(Rarity::Uncommon),
            "rare" => Ok(Rarity::Rare),
            "mythic" | "mythicrare" => Ok(Rarity::MythicRare),
            other => Err(AdvisorError::InvalidRecord(format!(
                "unknown rarity '{other}'"
            ))),
        }
    }
}

impl TryFrom<String> for Rarity {
    type Error = AdvisorError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Rarity> for String {
    fn from(rarity: Rarity) -> Self {
        rarity.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_order() {
        assert!(Rarity::Token < Rarity::BasicLand);
        assert!(Rarity::BasicLand < Rarity::Common);
        assert!(Rarity::Common < Rarity::Uncommon);
        assert!(Rarity::Rare < Rarity::MythicRare);
        assert!(!Rarity::BasicLand.is_collectible());
        assert!(Rarity::Common.is_collectible());
    }

    #[test]
    fn test_rarity_parse() {
        assert_eq!("Mythic Rare".parse::<Rarity>().unwrap(), Rarity::MythicRare);
        assert_eq!("basic_land".parse::<Rarity>().unwrap(), Rarity::BasicLand);
        assert_eq!("UNCOMMON".parse::<Rarity>().unwrap(), Rarity::Uncommon);
        assert!("special".parse::<Rarity>().is_err());
    }

    #[test]
    fn test_rarity_serde() {
        let rarity: Rarity = serde_json::from_str("\"rare\"").unwrap();
        assert_eq!(rarity, Rarity::Rare);
        assert_eq!(serde_json::to_string(&Rarity::BasicLand).unwrap(), "\"basic\"");
        assert!(serde_json::from_str::<Rarity>("\"shiny\"").is_err());
    }
}
