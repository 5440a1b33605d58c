use super::RecordId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: RecordId,
    pub identifier: String,
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
    #[serde(default)]
    pub issue_date: Option<NaiveDate>,
    /// Id of the publication the article appeared in
    #[serde(default)]
    pub publication: Option<RecordId>,
}

/// Article suggested for a submitted text, with its relevance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleResult {
    #[serde(flatten)]
    pub article: Article,
    pub score: f64,
}
