mod article;
mod author;
mod keyword;
mod publication;
mod ranking;

pub use article::{Article, ArticleResult};
pub use author::{Author, Coreferrer, ReferencePair};
pub use keyword::Keyword;
pub use publication::{JournalResult, Publication};
pub use ranking::{Ranking, RankingType};

use std::collections::BTreeMap;

/// Database identifier shared by every record type.
pub type RecordId = i64;

/// Sparse time series as served by the graph-data endpoint.
///
/// Keys are period labels (years); a `None` value means the backend
/// could not attribute the count to a period.
pub type SparseSeries = BTreeMap<String, Option<f64>>;
