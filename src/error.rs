//! Error types for the deck advisor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    /// The database snapshot contradicts itself (an id or set name maps to
    /// two different identities).
    #[error("Data conflict: {0}")]
    DataConflict(String),

    #[error("Malformed archetype '{archetype}': '{card}' is listed twice in the same zone")]
    MalformedArchetype { archetype: String, card: String },

    #[error("Card id not in catalog: {0}")]
    CardNotFound(u32),

    #[error("Card name not in catalog: {0}")]
    NameNotFound(String),

    #[error("Set not in catalog: {0}")]
    UnknownSet(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Task join error: {0}")]
    JoinError(#[from] tokio::task::JoinError),
}

impl AdvisorError {
    /// Whether this error aborts the whole reload pass.
    ///
    /// Only a malformed archetype is isolated to that archetype; everything
    /// else means the inputs can't be trusted.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, AdvisorError::MalformedArchetype { .. })
    }
}

pub type Result<T> = std::result::Result<T, AdvisorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_malformed_archetype_is_recoverable() {
        let malformed = AdvisorError::MalformedArchetype {
            archetype: "Mono Red".to_string(),
            card: "Shock".to_string(),
        };
        assert!(!malformed.is_fatal());
        assert!(AdvisorError::CardNotFound(7).is_fatal());
        assert!(AdvisorError::DataConflict("x".to_string()).is_fatal());
    }

    #[test]
    fn test_messages() {
        let err = AdvisorError::MalformedArchetype {
            archetype: "Mono Red".to_string(),
            card: "Shock".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed archetype 'Mono Red': 'Shock' is listed twice in the same zone"
        );
        assert_eq!(
            AdvisorError::NameNotFound("Opt".to_string()).to_string(),
            "Card name not in catalog: Opt"
        );
    }
}
