use super::HandlerContext;
use crate::presentation::CommandResultViewModel;
use anyhow::{Result, bail};
use pubassist_runtime::AuthorBrowser;
use pubassist_types::RecordId;

pub async fn handle(ctx: &HandlerContext, author_id: RecordId) -> Result<()> {
    let browser = AuthorBrowser::new(ctx.client()?, ctx.settings());
    let details = browser.details(author_id).await;

    // without the author record there is nothing to show
    if details.author.data.is_none() {
        bail!(
            "could not load author {}: {}",
            author_id,
            details.author.error.as_deref().unwrap_or("unknown error")
        );
    }

    let mut view_model = CommandResultViewModel::new(details);
    for (name, failed) in [
        ("articles", view_model.content.articles.status.error),
        ("co-referrers", view_model.content.coreferrers.status.error),
    ] {
        if failed {
            view_model = view_model.with_note(format!("{} could not be loaded", name));
        }
    }
    ctx.render(view_model)
}
