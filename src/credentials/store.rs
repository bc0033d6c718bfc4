//! Account storage abstraction

use crate::config::ConfigPaths;
use crate::credentials::FileAccountStore;
use crate::error::CliResult;
use crate::models::{Account, Credentials};
use serde::{Deserialize, Serialize};

/// One authorized account with its token material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountEntry {
    pub account: Account,
    pub credentials: Credentials,
}

/// Trait for account storage backends
pub trait AccountStore: Send + Sync {
    /// All authorized accounts, in the order they were added
    fn list(&self) -> CliResult<Vec<AccountEntry>>;

    /// The entry marked as the default account, if any
    fn default_entry(&self) -> CliResult<Option<AccountEntry>>;

    /// Add an account, or replace its token material if already present
    fn upsert(&self, entry: AccountEntry, make_default: bool) -> CliResult<()>;

    /// Replace the stored credentials for an account after a token refresh
    fn update_credentials(&self, email: &str, credentials: &Credentials) -> CliResult<()>;

    /// Mark an existing account as the default
    fn set_default(&self, email: &str) -> CliResult<()>;

    /// Remove all stored accounts
    fn clear(&self) -> CliResult<()>;

    /// Check if any account is stored
    fn exists(&self) -> bool;
}

/// Get the account store for the current platform
pub fn get_account_store(paths: &ConfigPaths) -> Box<dyn AccountStore> {
    Box::new(FileAccountStore::new(paths.accounts_file.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_account_store() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ConfigPaths::in_dir(temp_dir.path().to_path_buf());

        let store = get_account_store(&paths);
        assert!(!store.exists());
    }
}
