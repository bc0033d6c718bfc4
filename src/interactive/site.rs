//! Hosting site selection flow

use crate::error::{CliError, CliResult};
use crate::interactive::backend::SitesBackend;
use crate::interactive::fuzzy::{fuzzy_filter, normalize, Choice, CREATE_NEW_SENTINEL};
use crate::interactive::prompts::PromptRenderer;
use crate::interactive::select::{select_with_search, Selection};
use crate::interactive::source::SharedFetch;
use crate::models::{Site, SiteType};
use std::future::Future;

/// Searchable label of the synthetic create-new candidate
const CREATE_NEW_LABEL: &str = "[Create a new site]";

/// List a project's sites, substituting the implicit default site when the
/// backend reports none yet
pub async fn site_pool<B>(backend: &B, project_id: &str) -> CliResult<Vec<Site>>
where
    B: SitesBackend,
{
    let sites = backend.list_sites(project_id).await?;
    if sites.is_empty() {
        return Ok(vec![Site::default_for_project(project_id)]);
    }
    Ok(sites)
}

/// Build the choice list for one query against the shared site fetch
///
/// Sites are searched by their default URL.
pub async fn site_choices<F, Fut>(
    fetch: &SharedFetch<Site, F, Fut>,
    query: &str,
) -> CliResult<Vec<Choice>>
where
    F: Fn() -> Fut,
    Fut: Future<Output = CliResult<Vec<Site>>>,
{
    let sites = fetch.get().await?;

    let mut candidates = Vec::with_capacity(sites.len() + 1);
    candidates.push(Site {
        name: CREATE_NEW_SENTINEL.to_string(),
        default_url: CREATE_NEW_LABEL.to_string(),
        site_type: SiteType::UserCreated,
    });
    candidates.extend(sites.iter().cloned());

    let matches = fuzzy_filter(candidates, query, |site| site.default_url.clone());
    Ok(matches
        .into_iter()
        .map(normalize)
        .map(|site| {
            let label = site.default_url.clone();
            Choice::new(label, site.short_name().to_string())
        })
        .collect())
}

/// Let the user pick one of a project's hosting sites or create a new one
///
/// The project's default site is preselected when present.
pub async fn pick_site<B, P>(backend: &B, prompt: &P, project_id: &str) -> CliResult<Site>
where
    B: SitesBackend,
    P: PromptRenderer + ?Sized,
{
    let fetch = SharedFetch::new(|| site_pool(backend, project_id));
    let fetch_ref = &fetch;

    // Resolving the pool here also computes the preselection; the fetch is
    // memoized, so the prompt source does not hit the backend again.
    let default_short_name = fetch
        .get()
        .await?
        .iter()
        .find(|s| s.site_type == SiteType::Default)
        .map(|s| s.short_name().to_string());

    let selection = select_with_search(
        prompt,
        "Which site would you like to use?",
        |query| async move { site_choices(fetch_ref, &query).await },
        default_short_name.as_deref(),
    )
    .await?;

    match selection {
        Selection::CreateNew => {
            let subdomain =
                prompt.input("Please provide an unused, URL-friendly id for the site:", None)?;
            backend.create_site(project_id, &subdomain).await
        }
        Selection::Existing(short_name) => {
            let sites = fetch.get().await?;
            sites
                .iter()
                .find(|s| s.short_name() == short_name)
                .cloned()
                .ok_or_else(|| {
                    CliError::Internal(format!(
                        "Selected site {short_name} is missing from the fetched list"
                    ))
                })
        }
    }
}
