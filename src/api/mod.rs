//! API client modules for the Nimbus platform

mod apps;
mod auth;
mod client;
mod projects;
mod sites;

pub use apps::{create_app, list_apps};
pub use auth::{get_user_info, poll_device_token, request_device_code, AccountService};
pub use client::ApiClient;
pub use projects::{create_project, list_projects};
pub use sites::{create_site, list_sites};
