mod articles;
mod authors;
mod config;
mod hype;
mod pagination;
mod suggest;

pub use articles::{ArticlePageView, JournalPageView};
pub use authors::{AuthorDetailsView, AuthorSearchResultView};
pub use config::{ConfigInitView, ConfigView};
pub use hype::HypeView;
pub use pagination::StripView;
pub use suggest::SuggestView;
