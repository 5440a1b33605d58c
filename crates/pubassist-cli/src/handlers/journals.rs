use super::HandlerContext;
use crate::presentation::CommandResultViewModel;
use crate::presentation::view_models::{JournalPageViewModel, JournalRow};
use anyhow::Result;
use pubassist_runtime::ArticleBrowser;

pub async fn handle(ctx: &HandlerContext, text: &str, page: usize) -> Result<()> {
    let mut browser = ArticleBrowser::new(ctx.client()?, ctx.settings(), text)?;
    let journals = browser.journal_page(page).await?;

    let mut missing = 0;
    let results = journals.map(|journal| {
        let rankings = match browser.rankings(journal.id) {
            Some(index) => index.values().cloned().collect(),
            None => {
                missing += 1;
                Vec::new()
            }
        };
        JournalRow { journal, rankings }
    });

    let mut view_model = CommandResultViewModel::new(JournalPageViewModel {
        text: text.to_string(),
        first_rank: ctx.first_rank(results.page),
        results,
    });
    if missing > 0 {
        view_model = view_model.with_note(format!("rankings unavailable for {} journal(s)", missing));
    }
    ctx.render(view_model)
}
