use derive_more::{Display, From};
use uuid::Uuid;

pub const SESSION_STORAGE_KEY: &str = "ai_detector_session_id";

const SUFFIX_LEN: usize = 9;

/// Opaque per-browser identifier. Never validated or renewed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From)]
pub struct SessionId(String);

impl SessionId {
    pub fn generate(timestamp_millis: i64) -> Self {
        let random = Uuid::new_v4().to_simple().to_string();
        Self(format!("session_{}_{}", timestamp_millis, &random[..SUFFIX_LEN]))
    }

    /// Takes a stored value as-is. Only a missing or empty value yields `None`.
    pub fn restore(stored: Option<String>) -> Option<Self> {
        stored.filter(|value| !value.is_empty()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_shape() {
        let id = SessionId::generate(1_700_000_000_123);
        let parts: Vec<&str> = id.as_str().split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "session");
        assert_eq!(parts[1], "1700000000123");
        assert_eq!(parts[2].len(), SUFFIX_LEN);
        assert!(parts[2].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_suffix_is_random() {
        assert_ne!(SessionId::generate(1), SessionId::generate(1));
    }

    #[test]
    fn test_stored_value_is_kept_verbatim() {
        let stored = "session_1700000000000_abc123xyz".to_string();
        let id = SessionId::restore(Some(stored.clone())).unwrap();
        assert_eq!(id.as_str(), stored);
        assert_eq!(id.to_string(), stored);

        let odd = SessionId::restore(Some("\"quoted\"".to_string())).unwrap();
        assert_eq!(odd.as_str(), "\"quoted\"");
    }

    #[test]
    fn test_missing_or_empty_value_needs_new_id() {
        assert_eq!(SessionId::restore(None), None);
        assert_eq!(SessionId::restore(Some(String::new())), None);
    }
}
