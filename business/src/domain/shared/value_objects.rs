use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static PRODUCT_ID_FORMAT: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]{0,63}$").ok());

/// Represents a catalog product identifier.
/// Opaque to this crate: only its format is checked, never its meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a ProductId without checking the format.
    /// Used for identifiers coming from the catalog, which are trusted.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parses an untrusted identifier, returning `None` when it does not
    /// match the catalog identifier format.
    pub fn parse(raw: &str) -> Option<Self> {
        if Self::is_well_formed(raw) {
            Some(Self(raw.to_string()))
        } else {
            None
        }
    }

    /// ASCII alphanumerics, `-` and `_`, 1 to 64 chars, not starting with a separator.
    pub fn is_well_formed(raw: &str) -> bool {
        PRODUCT_ID_FORMAT
            .as_ref()
            .is_some_and(|re| re.is_match(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_uuid_and_object_id_formats() {
        assert!(ProductId::is_well_formed(
            "0b6c1f2e-8a4d-4c37-9d0e-2f1b3a4c5d6e"
        ));
        assert!(ProductId::is_well_formed("65f1a2b3c4d5e6f708192a3b"));
        assert!(ProductId::is_well_formed("A"));
    }

    #[test]
    fn should_reject_markup_and_whitespace() {
        assert!(!ProductId::is_well_formed("<script>"));
        assert!(!ProductId::is_well_formed("abc def"));
        assert!(!ProductId::is_well_formed(""));
        assert!(!ProductId::is_well_formed("-leading-dash"));
    }

    #[test]
    fn should_reject_identifiers_longer_than_64_chars() {
        let long = "a".repeat(65);
        assert!(!ProductId::is_well_formed(&long));
        assert!(ProductId::is_well_formed(&long[..64]));
    }

    #[test]
    fn should_return_none_when_parsing_malformed_id() {
        assert_eq!(ProductId::parse("not a real id"), None);
        assert_eq!(
            ProductId::parse("sku_42").map(|id| id.to_string()),
            Some("sku_42".to_string())
        );
    }

    #[test]
    fn should_serialize_as_plain_string() {
        let json = serde_json::to_string(&ProductId::new("p-1")).unwrap();
        assert_eq!(json, "\"p-1\"");
    }
}
