//! Secure account storage for the nimbus CLI

mod file;
mod store;

pub use file::FileAccountStore;
pub use store::{get_account_store, AccountEntry, AccountStore};
