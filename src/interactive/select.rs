//! Generic selection prompt driver
//!
//! Binds a fuzzy-search choice source to the renderer and translates the
//! sentinel back into a proper variant, so callers never compare strings.

use crate::error::{CliError, CliResult};
use crate::interactive::fuzzy::{Choice, CREATE_NEW_SENTINEL};
use crate::interactive::prompts::PromptRenderer;
use std::future::Future;

/// Outcome of a selection prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The short identifier of an existing resource
    Existing(String),
    /// The user asked to create a new resource
    CreateNew,
}

/// Run an autocomplete-style selection over a choice source
///
/// The source is invoked with the empty query to materialize the full
/// choice set; the renderer performs its own incremental filtering on top.
/// `default_value` selects the choice whose value matches, when present.
pub async fn select_with_search<P, S, Fut>(
    prompt: &P,
    message: &str,
    source: S,
    default_value: Option<&str>,
) -> CliResult<Selection>
where
    P: PromptRenderer + ?Sized,
    S: FnOnce(String) -> Fut,
    Fut: Future<Output = CliResult<Vec<Choice>>>,
{
    let choices = source(String::new()).await?;

    let default = default_value.and_then(|value| choices.iter().position(|c| c.value == value));
    let index = prompt.fuzzy_select(message, &choices, default)?;

    let choice = choices.get(index).ok_or_else(|| {
        CliError::Internal(format!("Selection index {index} out of range"))
    })?;

    if choice.value == CREATE_NEW_SENTINEL {
        Ok(Selection::CreateNew)
    } else {
        Ok(Selection::Existing(choice.value.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Renderer that answers with a fixed index and records the default
    /// it was offered
    struct FixedPrompter {
        answer: usize,
        seen_default: Cell<Option<Option<usize>>>,
    }

    impl FixedPrompter {
        fn new(answer: usize) -> Self {
            Self {
                answer,
                seen_default: Cell::new(None),
            }
        }
    }

    impl PromptRenderer for FixedPrompter {
        fn select(
            &self,
            _message: &str,
            _items: &[String],
            _default: Option<usize>,
        ) -> CliResult<usize> {
            unimplemented!("not used by the driver")
        }

        fn fuzzy_select(
            &self,
            _message: &str,
            _choices: &[Choice],
            default: Option<usize>,
        ) -> CliResult<usize> {
            self.seen_default.set(Some(default));
            Ok(self.answer)
        }

        fn input(&self, _message: &str, _default: Option<&str>) -> CliResult<String> {
            unimplemented!("not used by the driver")
        }
    }

    fn sample_choices() -> Vec<Choice> {
        vec![
            Choice::new("[Create a new project]".to_string(), CREATE_NEW_SENTINEL.to_string()),
            Choice::new("P One".to_string(), "p1".to_string()),
            Choice::new("P Two".to_string(), "p2".to_string()),
        ]
    }

    #[tokio::test]
    async fn test_existing_value_selected() {
        let prompt = FixedPrompter::new(1);
        let selection = select_with_search(&prompt, "Pick:", |_q| async { Ok(sample_choices()) }, None)
            .await
            .unwrap();

        assert_eq!(selection, Selection::Existing("p1".to_string()));
    }

    #[tokio::test]
    async fn test_sentinel_maps_to_create_new() {
        let prompt = FixedPrompter::new(0);
        let selection = select_with_search(&prompt, "Pick:", |_q| async { Ok(sample_choices()) }, None)
            .await
            .unwrap();

        assert_eq!(selection, Selection::CreateNew);
    }

    #[tokio::test]
    async fn test_default_value_resolved_to_index() {
        let prompt = FixedPrompter::new(2);
        select_with_search(&prompt, "Pick:", |_q| async { Ok(sample_choices()) }, Some("p2"))
            .await
            .unwrap();

        assert_eq!(prompt.seen_default.get(), Some(Some(2)));
    }

    #[tokio::test]
    async fn test_unknown_default_offers_none() {
        let prompt = FixedPrompter::new(0);
        select_with_search(&prompt, "Pick:", |_q| async { Ok(sample_choices()) }, Some("p9"))
            .await
            .unwrap();

        assert_eq!(prompt.seen_default.get(), Some(None));
    }

    #[tokio::test]
    async fn test_out_of_range_index_is_internal_error() {
        let prompt = FixedPrompter::new(9);
        let result =
            select_with_search(&prompt, "Pick:", |_q| async { Ok(sample_choices()) }, None).await;

        assert!(matches!(result, Err(CliError::Internal(_))));
    }
}
