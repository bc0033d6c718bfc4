//! OAuth wire models: device code, token and error responses

use serde::{Deserialize, Serialize};

/// Response from the device code request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceCodeResponse {
    /// Device code for polling
    pub device_code: String,

    /// User code to display
    pub user_code: String,

    /// URL for user to visit
    pub verification_uri: String,

    /// URL with user code pre-filled (optional)
    pub verification_uri_complete: Option<String>,

    /// Seconds until device code expires
    pub expires_in: u64,

    /// Minimum seconds between polling attempts
    pub interval: u64,
}

impl DeviceCodeResponse {
    /// Get the URL to display to the user
    ///
    /// Prefers verification_uri_complete if available
    pub fn display_url(&self) -> &str {
        self.verification_uri_complete
            .as_deref()
            .unwrap_or(&self.verification_uri)
    }
}

/// Response from token endpoint (device token or refresh)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// JWT access token
    pub access_token: String,

    /// Token type (always "Bearer")
    pub token_type: String,

    /// Seconds until access token expires
    pub expires_in: u64,

    /// Refresh token for obtaining new access tokens
    pub refresh_token: Option<String>,
}

/// OAuth error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthError {
    /// Error code
    pub error: String,

    /// Human-readable error description
    pub error_description: Option<String>,
}

impl OAuthError {
    /// Check if this is an `authorization_pending` error
    pub fn is_authorization_pending(&self) -> bool {
        self.error == "authorization_pending"
    }

    /// Check if this is a `slow_down` error
    pub fn is_slow_down(&self) -> bool {
        self.error == "slow_down"
    }

    /// Check if this is an `access_denied` error
    pub fn is_access_denied(&self) -> bool {
        self.error == "access_denied"
    }

    /// Check if this is an `expired_token` error
    pub fn is_expired_token(&self) -> bool {
        self.error == "expired_token"
    }
}

/// Response from the userinfo endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    pub email: String,
}
