use serde::{Deserialize, Serialize};

/// Lifetime of a token stored without an explicit expiry, in seconds
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 86_400;

/// Bearer token together with its absolute expiry (Unix epoch, ms)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub token: String,
    pub expires_at_ms: f64,
}

impl TokenRecord {
    pub fn issue(token: impl Into<String>, expires_in_secs: u64, now_ms: f64) -> Self {
        Self {
            token: token.into(),
            expires_at_ms: now_ms + expires_in_secs as f64 * 1000.0,
        }
    }

    pub fn is_expired(&self, now_ms: f64) -> bool {
        now_ms > self.expires_at_ms
    }

    /// The token if it is still valid at `now_ms`
    pub fn valid_token(&self, now_ms: f64) -> Option<&str> {
        if self.is_expired(now_ms) || self.token.is_empty() {
            None
        } else {
            Some(&self.token)
        }
    }

    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_expires_after_lifetime() {
        let record = TokenRecord::issue("abc", DEFAULT_TOKEN_TTL_SECS, 1_000.0);
        assert_eq!(record.expires_at_ms, 86_401_000.0);
        assert_eq!(record.valid_token(86_401_000.0), Some("abc"));
        assert!(record.is_expired(86_401_001.0));
        assert_eq!(record.valid_token(86_401_001.0), None);
        assert_eq!(record.bearer_header(), "Bearer abc");
    }

    #[test]
    fn test_empty_token_is_never_valid() {
        let record = TokenRecord::issue("", 60, 0.0);
        assert_eq!(record.valid_token(1.0), None);
    }
}
