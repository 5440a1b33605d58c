use super::HandlerContext;
use crate::presentation::CommandResultViewModel;
use crate::presentation::view_models::ArticlePageViewModel;
use anyhow::Result;
use pubassist_runtime::ArticleBrowser;

pub async fn handle(ctx: &HandlerContext, text: &str, page: usize) -> Result<()> {
    let mut browser = ArticleBrowser::new(ctx.client()?, ctx.settings(), text)?;
    let results = browser.article_page(page).await?;

    ctx.render(CommandResultViewModel::new(ArticlePageViewModel {
        text: text.to_string(),
        first_rank: ctx.first_rank(results.page),
        results,
    }))
}
