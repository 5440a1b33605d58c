use super::HandlerContext;
use crate::presentation::CommandResultViewModel;
use crate::presentation::view_models::HypeViewModel;
use anyhow::{Result, bail};
use pubassist_runtime::HypeGraph;

/// Pick the candidate whose label equals `wanted` (ignoring case), else the first one.
fn resolve<T>(candidates: Vec<T>, wanted: &str, label: impl Fn(&T) -> &str) -> Option<T> {
    let exact = candidates
        .iter()
        .position(|c| label(c).eq_ignore_ascii_case(wanted.trim()));
    let index = exact.unwrap_or(0);
    candidates.into_iter().nth(index)
}

pub async fn handle(
    ctx: &HandlerContext,
    keywords: &[String],
    publications: &[String],
) -> Result<()> {
    let client = ctx.client()?;
    let mut graph = HypeGraph::new(client.clone());

    // publications first, while no keyword is selected a refill fetches nothing
    for name in publications {
        let candidates = client.search_publications(name).await?;
        let Some(publication) = resolve(candidates, name, |p| p.name.as_str()) else {
            bail!("no publication matching '{}'", name);
        };
        tracing::debug!(id = publication.id, name = %publication.name, "publication selected");
        graph.add_publication(publication).await?;
    }

    for text in keywords {
        let candidates = client.search_keywords(text).await?;
        let Some(keyword) = resolve(candidates, text, |k| k.keyword.as_str()) else {
            bail!("no keyword matching '{}'", text);
        };
        tracing::debug!(id = keyword.id, keyword = %keyword.keyword, "keyword selected");
        graph.add_keyword(keyword).await?;
    }

    ctx.render(CommandResultViewModel::new(HypeViewModel {
        keywords: graph.keywords().to_vec(),
        publications: graph.publications().cloned().collect(),
        matrix: graph.matrix().clone(),
    }))
}
