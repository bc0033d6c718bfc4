//! Authorized account model

use serde::{Deserialize, Serialize};

/// An authenticated identity known to the local credential store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Email address of the account
    pub email: String,
}

impl Account {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// Options for a login attempt
#[derive(Debug, Clone, Default)]
pub struct LoginOptions {
    /// Don't automatically open the browser
    pub no_browser: bool,
}
