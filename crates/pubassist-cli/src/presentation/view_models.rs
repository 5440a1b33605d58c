use pubassist_engine::{PageStrip, SeriesMatrix};
use pubassist_runtime::{AuthorDetails, AuthorSearchView, Config, PageView};
use pubassist_types::{ArticleResult, JournalResult, Keyword, Publication, Ranking, RecordId};
use serde::Serialize;
use std::fmt;

/// Text rendering options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub color: bool,
}

/// Bridge from a view model to its text view.
pub trait CreateView {
    fn create_view<'a>(&'a self, style: Style) -> Box<dyn fmt::Display + 'a>;
}

#[derive(Debug, Serialize)]
pub struct CommandResultViewModel<T>
where
    T: Serialize,
{
    pub content: T,

    /// Non-fatal problems worth telling the user about
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl<T> CommandResultViewModel<T>
where
    T: Serialize,
{
    pub fn new(content: T) -> Self {
        Self {
            content,
            notes: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ArticlePageViewModel {
    pub text: String,
    /// Rank of the first item on the page, 1-based
    pub first_rank: usize,
    pub results: PageView<ArticleResult>,
}

#[derive(Debug, Serialize)]
pub struct JournalRow {
    #[serde(flatten)]
    pub journal: JournalResult,
    pub rankings: Vec<Ranking>,
}

#[derive(Debug, Serialize)]
pub struct JournalPageViewModel {
    pub text: String,
    pub first_rank: usize,
    pub results: PageView<JournalRow>,
}

#[derive(Debug, Serialize)]
pub struct HypeViewModel {
    pub keywords: Vec<Keyword>,
    pub publications: Vec<Publication>,
    pub matrix: SeriesMatrix,
}

#[derive(Debug, Serialize)]
pub struct Suggestion {
    pub id: RecordId,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestViewModel {
    pub target: String,
    pub query: String,
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Serialize)]
pub struct StripViewModel {
    pub page: usize,
    pub item_count: usize,
    pub page_size: usize,
    pub last_page: usize,
    pub strip: PageStrip,
}

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub path: String,
    pub exists: bool,
    pub config: Config,
    #[serde(skip)]
    pub toml: String,
}

#[derive(Debug, Serialize)]
pub struct ConfigInitViewModel {
    pub path: String,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

macro_rules! create_view {
    ($model:ty => $view:ident) => {
        impl CreateView for $model {
            fn create_view<'a>(&'a self, style: Style) -> Box<dyn fmt::Display + 'a> {
                use super::views::$view;
                Box::new($view::new(self, style))
            }
        }
    };
}

create_view!(ArticlePageViewModel => ArticlePageView);
create_view!(JournalPageViewModel => JournalPageView);
create_view!(AuthorSearchView => AuthorSearchResultView);
create_view!(AuthorDetails => AuthorDetailsView);
create_view!(HypeViewModel => HypeView);
create_view!(SuggestViewModel => SuggestView);
create_view!(StripViewModel => StripView);
create_view!(ConfigViewModel => ConfigView);
create_view!(ConfigInitViewModel => ConfigInitView);
