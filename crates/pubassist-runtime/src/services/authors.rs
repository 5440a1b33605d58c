use super::{BrowseSettings, PageView, ResultSet};
use crate::client::{ApiClient, ArticleSort, Transport};
use crate::status::RequestStatus;
use crate::Result;
use futures::future::join_all;
use pubassist_types::{Article, Author, Coreferrer, ItemRange, RecordId};
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::HashMap;

/// One author search result with their most-cited articles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorHit {
    pub author: Author,
    pub most_cited: Vec<Article>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthorSearchView {
    pub query: String,
    /// `None` when the query was empty and nothing was requested
    pub results: Option<PageView<AuthorHit>>,
}

/// Independently loaded part of a detail page.
#[derive(Debug, Clone, Serialize)]
pub struct Section<T> {
    pub data: Option<T>,
    pub status: RequestStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Section<T> {
    fn from_result(result: Result<T>) -> Self {
        let mut status = RequestStatus::default();
        status.begin();
        match result {
            Ok(data) => {
                status.succeed();
                Self {
                    data: Some(data),
                    status,
                    error: None,
                }
            }
            Err(err) => {
                status.fail();
                Self {
                    data: None,
                    status,
                    error: Some(err.to_string()),
                }
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthorDetails {
    pub id: RecordId,
    pub author: Section<Author>,
    pub articles: Section<Vec<Article>>,
    /// Strongest mutual citation first
    pub coreferrers: Section<Vec<Coreferrer>>,
}

/// Author search with per-hit most-cited articles, plus detail pages.
pub struct AuthorBrowser<T> {
    client: ApiClient<T>,
    settings: BrowseSettings,
    query: String,
    results: ResultSet<Author>,
    most_cited: HashMap<RecordId, Vec<Article>>,
}

impl<T: Transport> AuthorBrowser<T> {
    pub fn new(client: ApiClient<T>, settings: BrowseSettings) -> Self {
        Self {
            client,
            settings,
            query: String::new(),
            results: ResultSet::new(settings.page_size),
            most_cited: HashMap::new(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn status(&self) -> RequestStatus {
        self.results.status()
    }

    /// Show `page` of the hits for `query`, one page per request.
    pub async fn search(&mut self, query: &str, page: usize) -> Result<AuthorSearchView> {
        let query = query.trim();
        if query != self.query {
            self.query = query.to_string();
            self.results = ResultSet::new(self.settings.page_size);
            self.most_cited.clear();
        }

        if self.query.is_empty() {
            return Ok(AuthorSearchView {
                query: String::new(),
                results: None,
            });
        }

        let client = &self.client;
        let text = self.query.as_str();
        let view = self
            .results
            .load(page, 0, move |range| client.search_authors(text, range))
            .await?;

        let missing: Vec<RecordId> = view
            .items
            .iter()
            .map(|author| author.id)
            .filter(|id| !self.most_cited.contains_key(id))
            .collect();
        self.load_most_cited(&missing).await;

        let most_cited = &self.most_cited;
        let results = view.map(|author| AuthorHit {
            most_cited: most_cited.get(&author.id).cloned().unwrap_or_default(),
            author,
        });

        Ok(AuthorSearchView {
            query: self.query.clone(),
            results: Some(results),
        })
    }

    async fn load_most_cited(&mut self, author_ids: &[RecordId]) {
        let Some(end) = self.settings.most_cited.checked_sub(1) else {
            return;
        };
        let range = ItemRange::new(0, end).ok();

        let client = &self.client;
        let fetched = join_all(author_ids.iter().map(|&id| async move {
            let result = client.author_articles(id, range, ArticleSort::Citations).await;
            (id, result)
        }))
        .await;

        for (id, result) in fetched {
            match result {
                Ok(page) => {
                    self.most_cited.insert(id, page.items);
                }
                Err(err) => {
                    tracing::debug!(author_id = id, error = %err, "most cited articles unavailable");
                }
            }
        }
    }

    /// Author record, full article list and co-referrers, loaded concurrently.
    pub async fn details(&self, author_id: RecordId) -> AuthorDetails {
        let (author, articles, coreferrers) = futures::join!(
            self.client.author(author_id),
            self.client.author_articles(author_id, None, ArticleSort::Title),
            self.client.author_coreferrers(author_id),
        );

        let coreferrers = coreferrers.map(|mut list| {
            list.sort_by_key(|coreferrer| Reverse(coreferrer.weight()));
            list
        });

        AuthorDetails {
            id: author_id,
            author: Section::from_result(author),
            articles: Section::from_result(articles.map(|page| page.items)),
            coreferrers: Section::from_result(coreferrers),
        }
    }
}
