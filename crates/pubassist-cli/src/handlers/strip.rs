use super::HandlerContext;
use crate::presentation::CommandResultViewModel;
use crate::presentation::view_models::StripViewModel;
use anyhow::Result;
use pubassist_engine::{compute_page_strip, last_page};

pub fn handle(
    ctx: &HandlerContext,
    page: usize,
    item_count: usize,
    page_size: Option<usize>,
) -> Result<()> {
    let page_size = page_size.unwrap_or(ctx.config.browse.page_size);

    ctx.render(CommandResultViewModel::new(StripViewModel {
        page,
        item_count,
        page_size,
        last_page: last_page(item_count, page_size),
        strip: compute_page_strip(page, item_count, page_size),
    }))
}
