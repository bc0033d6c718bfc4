//! Project selection flow

use crate::error::{CliError, CliResult};
use crate::interactive::backend::ProjectsBackend;
use crate::interactive::fuzzy::{fuzzy_filter, normalize, Choice, CREATE_NEW_SENTINEL};
use crate::interactive::prompts::PromptRenderer;
use crate::interactive::select::{select_with_search, Selection};
use crate::interactive::source::SharedFetch;
use crate::models::Project;
use std::future::Future;

/// Searchable label of the synthetic create-new candidate
const CREATE_NEW_LABEL: &str = "[Create a new project]";

/// Build the choice list for one query against the shared project fetch
///
/// The fetched list is treated as read-only; the synthetic candidate is
/// prepended onto a copy.
pub async fn project_choices<F, Fut>(
    fetch: &SharedFetch<Project, F, Fut>,
    query: &str,
) -> CliResult<Vec<Choice>>
where
    F: Fn() -> Fut,
    Fut: Future<Output = CliResult<Vec<Project>>>,
{
    let projects = fetch.get().await?;

    let mut candidates = Vec::with_capacity(projects.len() + 1);
    candidates.push(Project {
        project_id: CREATE_NEW_SENTINEL.to_string(),
        display_name: CREATE_NEW_LABEL.to_string(),
    });
    candidates.extend(projects.iter().cloned());

    let matches = fuzzy_filter(candidates, query, Project::search_key);
    Ok(matches
        .into_iter()
        .map(normalize)
        .map(|project| {
            let label = project.display_label().to_string();
            Choice::new(label, project.project_id)
        })
        .collect())
}

/// Let the user pick an existing project or create a new one
///
/// `default_id` preselects a project, typically the one recorded in the
/// local manifest.
pub async fn pick_project<B, P>(
    backend: &B,
    prompt: &P,
    default_id: Option<&str>,
) -> CliResult<Project>
where
    B: ProjectsBackend,
    P: PromptRenderer + ?Sized,
{
    let fetch = SharedFetch::new(|| backend.list_projects());
    let fetch_ref = &fetch;

    let selection = select_with_search(
        prompt,
        "Please select a project:",
        |query| async move { project_choices(fetch_ref, &query).await },
        default_id,
    )
    .await?;

    match selection {
        Selection::CreateNew => {
            let project_id =
                prompt.input("Please specify a unique project id (6-30 characters):", None)?;
            let display_name =
                prompt.input("What would you like to call your project?", Some(&project_id))?;

            backend.create_project(&project_id, &display_name).await
        }
        Selection::Existing(project_id) => {
            let projects = fetch.get().await?;
            projects
                .iter()
                .find(|p| p.project_id == project_id)
                .cloned()
                .ok_or_else(|| {
                    CliError::Internal(format!(
                        "Selected project {project_id} is missing from the fetched list"
                    ))
                })
        }
    }
}
