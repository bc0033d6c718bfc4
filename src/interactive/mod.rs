//! Interactive selection prompts for accounts, projects, apps and sites
//!
//! Each flow fetches its candidate list once, offers a fuzzy-searchable
//! selection with a create-new escape hatch, and returns the chosen or
//! freshly created record.

pub mod account;
pub mod app;
pub mod backend;
pub mod fuzzy;
pub mod project;
pub mod prompts;
pub mod select;
pub mod site;
pub mod source;

pub use account::pick_account;
pub use app::pick_web_app;
pub use project::pick_project;
pub use prompts::{
    is_interactive_terminal, require_interactive, DialoguerPrompter, PromptRenderer,
};
pub use select::Selection;
pub use site::pick_site;
