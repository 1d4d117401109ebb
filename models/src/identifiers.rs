use core::ops::Deref;
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ValidationError, ValidationResult};

/// Display identifier of a record, e.g. `P001` or `D004`.
///
/// Identifiers must be non-empty, at most 255 bytes, and free of whitespace.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    /// Constructs a new identifier.
    ///
    /// # Errors
    /// Returns a `ValidationError` if the identifier is empty, longer than
    /// 255 bytes, or contains whitespace.
    pub fn new(s: String) -> ValidationResult<Self> {
        if s.is_empty() || s.len() > 255 {
            return Err(ValidationError::InvalidIdentifierLength);
        }
        if s.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidIdentifier(s));
        }
        Ok(Self(s))
    }

    /// Identifier for a compiled-in seed record. Seed ids are literals like `P001`
    /// and always satisfy the rules checked by [`Identifier::new`].
    pub fn seed(s: &'static str) -> Self {
        debug_assert!(Identifier::new(s.to_string()).is_ok(), "invalid seed id {s}");
        Self(s.to_string())
    }

    /// Fresh identifier for a record created during the session.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for Identifier {
    type Target = String;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Identifier {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        Self::new(s.to_string())
    }
}

impl TryFrom<String> for Identifier {
    type Error = ValidationError;

    fn try_from(s: String) -> ValidationResult<Self> {
        Self::new(s)
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.0
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::{Identifier, ValidationError};
    use core::str::FromStr;

    #[test]
    fn should_not_create_empty_identifier() {
        let identifier = Identifier::new("".to_string());
        assert_eq!(identifier.unwrap_err(), ValidationError::InvalidIdentifierLength);
    }

    #[test]
    fn should_not_create_too_long_identifier() {
        let identifier = Identifier::new("a".repeat(256));
        assert_eq!(identifier.unwrap_err(), ValidationError::InvalidIdentifierLength);
    }

    #[test]
    fn should_reject_whitespace() {
        let identifier = Identifier::new("P 001".to_string());
        assert_eq!(identifier.unwrap_err(), ValidationError::InvalidIdentifier("P 001".to_string()));
    }

    #[test]
    fn should_convert_identifier_from_str() {
        let identifier = Identifier::from_str("P001").unwrap();
        assert_eq!(identifier, "P001");
        assert_eq!(identifier.as_ref(), "P001");
    }

    #[test]
    fn generated_identifiers_are_distinct() {
        assert_ne!(Identifier::generate(), Identifier::generate());
    }

    #[test]
    fn deserializing_rejects_invalid_ids() {
        let ok: Identifier = serde_json::from_str("\"R004\"").unwrap();
        assert_eq!(ok, "R004");
        assert!(serde_json::from_str::<Identifier>("\"\"").is_err());
    }
}
