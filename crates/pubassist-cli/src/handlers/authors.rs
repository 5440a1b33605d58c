use super::HandlerContext;
use crate::presentation::CommandResultViewModel;
use anyhow::Result;
use pubassist_runtime::AuthorBrowser;

pub async fn handle(ctx: &HandlerContext, query: &str, page: usize) -> Result<()> {
    let mut browser = AuthorBrowser::new(ctx.client()?, ctx.settings());
    let view = browser.search(query, page).await?;
    ctx.render(CommandResultViewModel::new(view))
}
