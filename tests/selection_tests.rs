//! Integration tests for the fuzzy selection pipeline
//!
//! Tests cover:
//! - Choice sets produced by the per-kind search adapters
//! - Create-new candidate visibility under filtering
//! - Memoization of the shared candidate fetch
//! - The zero-sites default fallback

use std::sync::atomic::{AtomicUsize, Ordering};

use nimbus_cli::error::CliResult;
use nimbus_cli::interactive::app::app_choices;
use nimbus_cli::interactive::backend::SitesBackend;
use nimbus_cli::interactive::fuzzy::CREATE_NEW_SENTINEL;
use nimbus_cli::interactive::project::project_choices;
use nimbus_cli::interactive::site::{site_choices, site_pool};
use nimbus_cli::interactive::source::SharedFetch;
use nimbus_cli::models::{AppPlatform, Project, Site, SiteType, WebApp};

fn project(id: &str, name: &str) -> Project {
    Project {
        project_id: id.to_string(),
        display_name: name.to_string(),
    }
}

fn web_app(id: &str, name: &str) -> WebApp {
    WebApp {
        app_id: format!("projects/p1/webApps/{id}"),
        display_name: name.to_string(),
        platform: AppPlatform::Web,
    }
}

// =========================================================================
// Project adapter
// =========================================================================

#[tokio::test]
async fn test_empty_query_lists_all_projects_with_create_new_first() {
    let fetch = SharedFetch::new(|| async {
        Ok(vec![project("p1", "P One"), project("p2", "P Two")])
    });

    let choices = project_choices(&fetch, "").await.unwrap();

    assert_eq!(choices.len(), 3);
    assert_eq!(choices[0].value, CREATE_NEW_SENTINEL);
    assert_eq!(choices[1].value, "p1");
    assert_eq!(choices[2].value, "p2");
}

#[tokio::test]
async fn test_query_returns_matching_project_and_drops_create_new() {
    let fetch = SharedFetch::new(|| async { Ok(vec![project("p1", "P One")]) });

    let choices = project_choices(&fetch, "p1").await.unwrap();

    // The create-new label does not fuzzy-match "p1", so only the real
    // project survives
    assert_eq!(choices.len(), 1);
    assert_eq!(choices[0].name, "P One");
    assert_eq!(choices[0].title, "P One");
    assert_eq!(choices[0].value, "p1");
}

#[tokio::test]
async fn test_query_matching_label_keeps_create_new() {
    let fetch = SharedFetch::new(|| async { Ok(vec![project("p1", "P One")]) });

    let choices = project_choices(&fetch, "create").await.unwrap();

    assert!(choices.iter().any(|c| c.value == CREATE_NEW_SENTINEL));
}

#[tokio::test]
async fn test_project_id_is_searchable() {
    let fetch = SharedFetch::new(|| async {
        Ok(vec![project("shop-prod-1234", "Shop"), project("blog-5678", "Blog")])
    });

    let choices = project_choices(&fetch, "shopprod").await.unwrap();

    assert_eq!(choices.len(), 1);
    assert_eq!(choices[0].value, "shop-prod-1234");
}

#[tokio::test]
async fn test_adapter_queries_share_one_fetch() {
    let calls = AtomicUsize::new(0);
    let fetch = SharedFetch::new(|| async {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![project("p1", "P One")])
    });

    project_choices(&fetch, "").await.unwrap();
    project_choices(&fetch, "p").await.unwrap();
    project_choices(&fetch, "p1").await.unwrap();
    fetch.get().await.unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

// =========================================================================
// App adapter
// =========================================================================

#[tokio::test]
async fn test_app_choices_search_display_name() {
    let fetch = SharedFetch::new(|| async {
        Ok(vec![web_app("app-1", "Storefront"), web_app("app-2", "Admin")])
    });

    let choices = app_choices(&fetch, "store").await.unwrap();

    assert_eq!(choices.len(), 1);
    assert_eq!(choices[0].name, "Storefront");
    assert_eq!(choices[0].value, "app-1");
}

#[tokio::test]
async fn test_app_choices_use_short_ids() {
    let fetch = SharedFetch::new(|| async { Ok(vec![web_app("app-1", "Storefront")]) });

    let choices = app_choices(&fetch, "").await.unwrap();

    assert_eq!(choices.len(), 2);
    assert_eq!(choices[0].value, CREATE_NEW_SENTINEL);
    assert_eq!(choices[1].value, "app-1");
}

// =========================================================================
// Site adapter and zero-sites fallback
// =========================================================================

struct FakeSites {
    sites: Vec<Site>,
}

impl SitesBackend for FakeSites {
    async fn list_sites(&self, _project_id: &str) -> CliResult<Vec<Site>> {
        Ok(self.sites.clone())
    }

    async fn create_site(&self, _project_id: &str, _subdomain: &str) -> CliResult<Site> {
        unimplemented!("not exercised by adapter tests")
    }
}

#[tokio::test]
async fn test_empty_site_list_falls_back_to_default_site() {
    let backend = FakeSites { sites: vec![] };

    let pool = site_pool(&backend, "p1").await.unwrap();

    assert_eq!(pool.len(), 1);
    assert_eq!(pool[0].site_type, SiteType::Default);
    assert_eq!(pool[0].default_url, "https://p1.web.app");
}

#[tokio::test]
async fn test_site_choices_over_fallback_pool() {
    let backend = FakeSites { sites: vec![] };
    let fetch = SharedFetch::new(|| site_pool(&backend, "p1"));

    let choices = site_choices(&fetch, "").await.unwrap();

    assert_eq!(choices.len(), 2);
    assert_eq!(choices[0].value, CREATE_NEW_SENTINEL);
    assert_eq!(choices[1].title, "https://p1.web.app");
    assert_eq!(choices[1].value, "p1");
}

#[tokio::test]
async fn test_site_choices_search_default_url() {
    let backend = FakeSites {
        sites: vec![
            Site {
                name: "projects/p1/sites/p1".to_string(),
                default_url: "https://p1.web.app".to_string(),
                site_type: SiteType::Default,
            },
            Site {
                name: "projects/p1/sites/blog".to_string(),
                default_url: "https://blog.web.app".to_string(),
                site_type: SiteType::UserCreated,
            },
        ],
    };
    let fetch = SharedFetch::new(|| site_pool(&backend, "p1"));

    let choices = site_choices(&fetch, "blog").await.unwrap();

    assert_eq!(choices.len(), 1);
    assert_eq!(choices[0].value, "blog");
}
