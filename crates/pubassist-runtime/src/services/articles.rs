use super::{BrowseSettings, PageView, ResultSet};
use crate::client::{ApiClient, Transport};
use crate::{Error, Result};
use futures::future::join_all;
use pubassist_types::{ArticleResult, JournalResult, Ranking, RankingType, RecordId};
use std::collections::{BTreeMap, HashMap};

/// Rankings of one journal, latest entry per ranking scheme.
pub type RankingIndex = BTreeMap<RankingType, Ranking>;

/// Everything cached for one submitted text.
#[derive(Debug, Clone)]
pub struct ArticleSession {
    text: String,
    articles: ResultSet<ArticleResult>,
    journals: ResultSet<JournalResult>,
    rankings: HashMap<RecordId, RankingIndex>,
}

impl ArticleSession {
    fn new(text: String, page_size: usize) -> Self {
        Self {
            text,
            articles: ResultSet::new(page_size),
            journals: ResultSet::new(page_size),
            rankings: HashMap::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn articles(&self) -> &ResultSet<ArticleResult> {
        &self.articles
    }

    pub fn journals(&self) -> &ResultSet<JournalResult> {
        &self.journals
    }
}

/// Article and journal suggestions for a submitted text.
///
/// Submitting a new text discards the whole session, so cached pages of
/// one text can never leak into the results of another.
pub struct ArticleBrowser<T> {
    client: ApiClient<T>,
    settings: BrowseSettings,
    session: ArticleSession,
}

impl<T: Transport> ArticleBrowser<T> {
    pub fn new(client: ApiClient<T>, settings: BrowseSettings, text: &str) -> Result<Self> {
        let text = validate_text(text)?;
        Ok(Self {
            client,
            settings,
            session: ArticleSession::new(text, settings.page_size),
        })
    }

    /// Start over with a new text.
    pub fn submit(&mut self, text: &str) -> Result<()> {
        let text = validate_text(text)?;
        self.session = ArticleSession::new(text, self.settings.page_size);
        Ok(())
    }

    pub fn session(&self) -> &ArticleSession {
        &self.session
    }

    pub async fn article_page(&mut self, page: usize) -> Result<PageView<ArticleResult>> {
        let client = &self.client;
        let text = self.session.text.as_str();
        self.session
            .articles
            .load(page, self.settings.fetch_radius, move |range| {
                client.search_articles(text, range)
            })
            .await
    }

    /// Journals for `page`, with rankings fetched for every journal on it.
    pub async fn journal_page(&mut self, page: usize) -> Result<PageView<JournalResult>> {
        let client = &self.client;
        let text = self.session.text.as_str();
        let view = self
            .session
            .journals
            .load(page, self.settings.fetch_radius, move |range| {
                client.search_journals(text, range)
            })
            .await?;

        let missing: Vec<RecordId> = view
            .items
            .iter()
            .map(|journal| journal.id)
            .filter(|id| !self.session.rankings.contains_key(id))
            .collect();
        self.load_rankings(&missing).await;

        Ok(view)
    }

    pub fn rankings(&self, journal_id: RecordId) -> Option<&RankingIndex> {
        self.session.rankings.get(&journal_id)
    }

    async fn load_rankings(&mut self, journal_ids: &[RecordId]) {
        let client = &self.client;
        let fetched = join_all(journal_ids.iter().map(|&id| async move {
            (id, client.journal_rankings(id).await)
        }))
        .await;

        for (id, result) in fetched {
            match result {
                Ok(rankings) => {
                    self.session.rankings.insert(id, index_rankings(rankings));
                }
                Err(err) => {
                    tracing::debug!(journal_id = id, error = %err, "rankings unavailable");
                }
            }
        }
    }
}

fn validate_text(text: &str) -> Result<String> {
    if text.trim().is_empty() {
        return Err(Error::InvalidInput("text must not be empty".to_string()));
    }
    Ok(text.to_string())
}

/// Keep the most recent ranking of each type.
pub(crate) fn index_rankings(rankings: Vec<Ranking>) -> RankingIndex {
    let mut index = RankingIndex::new();
    for ranking in rankings {
        match index.get(&ranking.kind) {
            Some(existing) if existing.date >= ranking.date => {}
            _ => {
                index.insert(ranking.kind, ranking);
            }
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ranking(kind: RankingType, value: f64, date: &str) -> Ranking {
        Ranking {
            kind,
            value: Some(value),
            date: date.parse::<NaiveDate>().unwrap(),
        }
    }

    #[test]
    fn test_index_keeps_latest_per_type() {
        let index = index_rankings(vec![
            ranking(RankingType::ImpactFactor, 1.5, "2015-01-01"),
            ranking(RankingType::ImpactFactor, 2.5, "2017-01-01"),
            ranking(RankingType::ImpactFactor, 2.0, "2016-01-01"),
            ranking(RankingType::MniswPoints, 20.0, "2016-01-01"),
        ]);

        assert_eq!(index.len(), 2);
        assert_eq!(index[&RankingType::ImpactFactor].value, Some(2.5));
        assert_eq!(index[&RankingType::MniswPoints].value, Some(20.0));
        assert!(!index.contains_key(&RankingType::Eigenfactor));
    }

    #[test]
    fn test_blank_text_rejected() {
        assert!(matches!(validate_text("  \n"), Err(Error::InvalidInput(_))));
        assert_eq!(validate_text("deep learning").unwrap(), "deep learning");
    }
}
