//! Encrypted file account storage backend

use crate::credentials::store::{AccountEntry, AccountStore};
use crate::error::{CliError, CliResult};
use crate::models::Credentials;
use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// On-disk shape of accounts.json
#[derive(Debug, Default, Serialize, Deserialize)]
struct AccountsFile {
    /// Email of the account used when no explicit account is given
    default_email: Option<String>,
    accounts: Vec<AccountEntry>,
}

/// Account store using encrypted file storage
///
/// Uses AES-256-GCM for encryption with a key derived from machine-specific data.
pub struct FileAccountStore {
    path: PathBuf,
}

impl FileAccountStore {
    /// Create a new file account store
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Get an encryption key derived from machine-specific data
    fn get_encryption_key() -> [u8; 32] {
        // This is not perfect security but provides reasonable protection
        // for tokens at rest

        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        use std::hash::{Hash, Hasher};

        if let Ok(hostname) = std::env::var("HOSTNAME").or_else(|_| std::env::var("COMPUTERNAME")) {
            hostname.hash(&mut hasher);
        }

        if let Ok(user) = std::env::var("USER").or_else(|_| std::env::var("USERNAME")) {
            user.hash(&mut hasher);
        }

        if let Some(home) = dirs::home_dir() {
            home.to_string_lossy().hash(&mut hasher);
        }

        // Static salt
        "nimbus-cli-account-encryption-v1".hash(&mut hasher);

        let hash = hasher.finish();

        // Expand to 32 bytes
        let mut key = [0u8; 32];
        let hash_bytes = hash.to_le_bytes();
        for i in 0..4 {
            key[i * 8..(i + 1) * 8].copy_from_slice(&hash_bytes);
            for j in 0..8 {
                key[i * 8 + j] = key[i * 8 + j].wrapping_add((i * 8 + j) as u8);
            }
        }

        key
    }

    fn encrypt(&self, data: &[u8]) -> CliResult<Vec<u8>> {
        let key = Self::get_encryption_key();
        let cipher = Aes256Gcm::new_from_slice(&key)
            .map_err(|e| CliError::CredentialStorage(format!("Encryption init failed: {e}")))?;

        let mut nonce_bytes = [0u8; 12];
        rand::thread_rng().fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = cipher
            .encrypt(nonce, data)
            .map_err(|e| CliError::CredentialStorage(format!("Encryption failed: {e}")))?;

        // Nonce is prepended to the ciphertext
        let mut result = nonce_bytes.to_vec();
        result.extend(ciphertext);

        Ok(result)
    }

    fn decrypt(&self, data: &[u8]) -> CliResult<Vec<u8>> {
        if data.len() < 12 {
            return Err(CliError::CredentialStorage(
                "Invalid encrypted data".to_string(),
            ));
        }

        let key = Self::get_encryption_key();
        let cipher = Aes256Gcm::new_from_slice(&key)
            .map_err(|e| CliError::CredentialStorage(format!("Decryption init failed: {e}")))?;

        let nonce = Nonce::from_slice(&data[..12]);
        let ciphertext = &data[12..];

        cipher
            .decrypt(nonce, ciphertext)
            .map_err(|e| CliError::CredentialStorage(format!("Decryption failed: {e}")))
    }

    fn read_file(&self) -> CliResult<AccountsFile> {
        if !self.path.exists() {
            return Ok(AccountsFile::default());
        }

        let encoded = std::fs::read_to_string(&self.path)?;
        let encrypted = BASE64
            .decode(encoded.trim())
            .map_err(|e| CliError::CredentialStorage(format!("Invalid account file: {e}")))?;
        let decrypted = self.decrypt(&encrypted)?;
        let json = String::from_utf8(decrypted)
            .map_err(|e| CliError::CredentialStorage(format!("Invalid account data: {e}")))?;
        let file: AccountsFile = serde_json::from_str(&json)?;

        Ok(file)
    }

    fn write_file(&self, file: &AccountsFile) -> CliResult<()> {
        let json = serde_json::to_string(file)?;
        let encrypted = self.encrypt(json.as_bytes())?;
        let encoded = BASE64.encode(&encrypted);

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&self.path, encoded)?;

        // Owner-only permissions (Unix)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&self.path, perms)?;
        }

        Ok(())
    }
}

impl AccountStore for FileAccountStore {
    fn list(&self) -> CliResult<Vec<AccountEntry>> {
        Ok(self.read_file()?.accounts)
    }

    fn default_entry(&self) -> CliResult<Option<AccountEntry>> {
        let file = self.read_file()?;
        let Some(email) = file.default_email else {
            return Ok(None);
        };
        Ok(file
            .accounts
            .into_iter()
            .find(|e| e.account.email == email))
    }

    fn upsert(&self, entry: AccountEntry, make_default: bool) -> CliResult<()> {
        let mut file = self.read_file()?;

        match file
            .accounts
            .iter_mut()
            .find(|e| e.account.email == entry.account.email)
        {
            Some(existing) => *existing = entry.clone(),
            None => file.accounts.push(entry.clone()),
        }

        if make_default || file.default_email.is_none() {
            file.default_email = Some(entry.account.email);
        }

        self.write_file(&file)
    }

    fn update_credentials(&self, email: &str, credentials: &Credentials) -> CliResult<()> {
        let mut file = self.read_file()?;

        let entry = file
            .accounts
            .iter_mut()
            .find(|e| e.account.email == email)
            .ok_or_else(|| {
                CliError::CredentialStorage(format!("No stored account for {email}"))
            })?;
        entry.credentials = credentials.clone();

        self.write_file(&file)
    }

    fn set_default(&self, email: &str) -> CliResult<()> {
        let mut file = self.read_file()?;

        if !file.accounts.iter().any(|e| e.account.email == email) {
            return Err(CliError::CredentialStorage(format!(
                "No stored account for {email}"
            )));
        }
        file.default_email = Some(email.to_string());

        self.write_file(&file)
    }

    fn clear(&self) -> CliResult<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}
