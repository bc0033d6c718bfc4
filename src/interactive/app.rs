//! Web app selection flow

use crate::error::{CliError, CliResult};
use crate::interactive::backend::AppsBackend;
use crate::interactive::fuzzy::{fuzzy_filter, normalize, Choice, CREATE_NEW_SENTINEL};
use crate::interactive::prompts::PromptRenderer;
use crate::interactive::select::{select_with_search, Selection};
use crate::interactive::source::SharedFetch;
use crate::models::{AppPlatform, WebApp};
use std::future::Future;

/// Searchable label of the synthetic create-new candidate
const CREATE_NEW_LABEL: &str = "[Create a new app]";

/// Build the choice list for one query against the shared app fetch
pub async fn app_choices<F, Fut>(
    fetch: &SharedFetch<WebApp, F, Fut>,
    query: &str,
) -> CliResult<Vec<Choice>>
where
    F: Fn() -> Fut,
    Fut: Future<Output = CliResult<Vec<WebApp>>>,
{
    let apps = fetch.get().await?;

    let mut candidates = Vec::with_capacity(apps.len() + 1);
    candidates.push(WebApp {
        app_id: CREATE_NEW_SENTINEL.to_string(),
        display_name: CREATE_NEW_LABEL.to_string(),
        platform: AppPlatform::Web,
    });
    candidates.extend(apps.iter().cloned());

    let matches = fuzzy_filter(candidates, query, |app| app.display_name.clone());
    Ok(matches
        .into_iter()
        .map(normalize)
        .map(|app| {
            let label = if app.display_name.is_empty() {
                app.short_id().to_string()
            } else {
                app.display_name.clone()
            };
            Choice::new(label, app.short_id().to_string())
        })
        .collect())
}

/// Let the user pick an existing web app of a project or register a new one
pub async fn pick_web_app<B, P>(backend: &B, prompt: &P, project_id: &str) -> CliResult<WebApp>
where
    B: AppsBackend,
    P: PromptRenderer + ?Sized,
{
    let fetch = SharedFetch::new(|| backend.list_web_apps(project_id));
    let fetch_ref = &fetch;

    let selection = select_with_search(
        prompt,
        "Select an app to connect:",
        |query| async move { app_choices(fetch_ref, &query).await },
        None,
    )
    .await?;

    match selection {
        Selection::CreateNew => {
            let display_name = prompt.input("What would you like to call your app?", None)?;
            backend.create_web_app(project_id, &display_name).await
        }
        Selection::Existing(short_id) => {
            let apps = fetch.get().await?;
            apps.iter()
                .find(|a| a.short_id() == short_id)
                .cloned()
                .ok_or_else(|| {
                    CliError::Internal(format!(
                        "Selected app {short_id} is missing from the fetched list"
                    ))
                })
        }
    }
}
