use super::HandlerContext;
use crate::args::SuggestTarget;
use crate::presentation::CommandResultViewModel;
use crate::presentation::view_models::{Suggestion, SuggestViewModel};
use anyhow::Result;
use pubassist_runtime::Typeahead;
use std::future::Future;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// Feed each stdin line to a debounced lookup and print the answer for
/// the last one.
pub async fn handle(ctx: &HandlerContext, target: SuggestTarget) -> Result<()> {
    let client = ctx.client()?;
    let delay = Duration::from_millis(ctx.config.browse.debounce_ms);
    let input = BufReader::new(tokio::io::stdin());

    let (query, suggestions) = match target {
        SuggestTarget::Keywords => {
            let fetch = move |text: String| {
                let client = client.clone();
                async move { client.search_keywords(&text).await }
            };
            let (query, keywords) = latest(input, delay, fetch).await?;
            let suggestions = keywords
                .into_iter()
                .map(|k| Suggestion {
                    id: k.id,
                    label: k.keyword,
                })
                .collect();
            (query, suggestions)
        }
        SuggestTarget::Publications => {
            let fetch = move |text: String| {
                let client = client.clone();
                async move { client.search_publications(&text).await }
            };
            let (query, publications) = latest(input, delay, fetch).await?;
            let suggestions = publications
                .into_iter()
                .map(|p| Suggestion {
                    id: p.id,
                    label: p.name,
                })
                .collect();
            (query, suggestions)
        }
    };

    ctx.render(CommandResultViewModel::new(SuggestViewModel {
        target: target.to_string(),
        query,
        suggestions,
    }))
}

async fn latest<R, T, F, Fut>(input: R, delay: Duration, fetch: F) -> Result<(String, Vec<T>)>
where
    R: AsyncBufRead + Unpin,
    T: Clone + Send + 'static,
    F: Fn(String) -> Fut + Clone + Send + 'static,
    Fut: Future<Output = pubassist_runtime::Result<Vec<T>>> + Send + 'static,
{
    let mut typeahead = Typeahead::new(delay);
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        typeahead.on_input(line.trim(), fetch.clone());
    }

    let query = typeahead.query().to_string();
    let results = match typeahead.next_update().await {
        Some(result) => result?.to_vec(),
        None => Vec::new(),
    };
    Ok((query, results))
}
