//! Backend seams consumed by the interactive flows
//!
//! The flows never talk to the management API directly; they go through
//! these traits so tests can substitute recording fakes. The real
//! implementations live next to the HTTP code in `crate::api`.

use crate::error::CliResult;
use crate::models::{Account, LoginOptions, Project, Site, WebApp};

/// Account enumeration and login side effects
#[allow(async_fn_in_trait)]
pub trait AccountsBackend {
    /// All locally authorized accounts
    fn list_accounts(&self) -> CliResult<Vec<Account>>;

    /// The account used when none is picked explicitly
    fn default_account(&self) -> CliResult<Option<Account>>;

    /// Run the interactive login flow
    async fn login(&self) -> CliResult<Account>;

    /// Run the login flow with explicit options
    async fn login_with_options(&self, options: &LoginOptions) -> CliResult<Account>;

    /// Authorize an additional account without replacing the default
    async fn login_add(&self) -> CliResult<Account>;
}

/// Project listing and creation
#[allow(async_fn_in_trait)]
pub trait ProjectsBackend {
    async fn list_projects(&self) -> CliResult<Vec<Project>>;

    async fn create_project(&self, project_id: &str, display_name: &str) -> CliResult<Project>;
}

/// Web app listing and creation, scoped to a project
#[allow(async_fn_in_trait)]
pub trait AppsBackend {
    async fn list_web_apps(&self, project_id: &str) -> CliResult<Vec<WebApp>>;

    async fn create_web_app(&self, project_id: &str, display_name: &str) -> CliResult<WebApp>;
}

/// Hosting site listing and creation, scoped to a project
#[allow(async_fn_in_trait)]
pub trait SitesBackend {
    async fn list_sites(&self, project_id: &str) -> CliResult<Vec<Site>>;

    async fn create_site(&self, project_id: &str, subdomain: &str) -> CliResult<Site>;
}
