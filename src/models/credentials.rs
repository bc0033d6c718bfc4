//! Stored credentials model

use crate::models::TokenResponse;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Stored credentials for API access
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// JWT access token
    pub access_token: String,

    /// OAuth refresh token
    pub refresh_token: String,

    /// Access token expiration time
    pub expires_at: DateTime<Utc>,

    /// Token type (always "Bearer")
    pub token_type: String,
}

impl Credentials {
    /// Create credentials from a token response
    pub fn from_token_response(response: TokenResponse) -> Self {
        let expires_at = Utc::now() + Duration::seconds(response.expires_in as i64);

        Self {
            access_token: response.access_token,
            refresh_token: response.refresh_token.unwrap_or_default(),
            expires_at,
            token_type: response.token_type,
        }
    }

    /// Check if the access token is expired
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_from_token_response() {
        let response = TokenResponse {
            access_token: "access_token_here".to_string(),
            token_type: "Bearer".to_string(),
            expires_in: 3600,
            refresh_token: Some("refresh_token_here".to_string()),
        };

        let credentials = Credentials::from_token_response(response);
        assert_eq!(credentials.access_token, "access_token_here");
        assert_eq!(credentials.refresh_token, "refresh_token_here");
        assert!(!credentials.is_expired());
    }

    #[test]
    fn test_expired_credentials() {
        let credentials = Credentials {
            access_token: "token".to_string(),
            refresh_token: String::new(),
            expires_at: Utc::now() - Duration::minutes(1),
            token_type: "Bearer".to_string(),
        };
        assert!(credentials.is_expired());
    }
}
