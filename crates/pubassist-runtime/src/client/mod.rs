mod http;
mod transport;

pub use http::HttpTransport;
pub use transport::{ApiRequest, ApiResponse, Method, Transport};

use crate::config::{Config, Endpoints};
use crate::{Error, Result};
use pubassist_types::{
    Article, ArticleResult, Author, ContentRange, Coreferrer, ItemRange, JournalResult, Keyword,
    Publication, Ranking, RecordId, SparseSeries,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// One slice of a ranged result list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub content_range: Option<ContentRange>,
}

impl<T> Page<T> {
    /// Total item count reported by the server, if any.
    pub fn total(&self) -> Option<usize> {
        self.content_range.as_ref().and_then(|range| range.total)
    }
}

/// Ordering of an author's article list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArticleSort {
    #[default]
    Title,
    Citations,
}

/// Typed client for the publication metadata API.
pub struct ApiClient<T> {
    transport: Arc<T>,
    endpoints: Arc<Endpoints>,
}

impl<T> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            endpoints: self.endpoints.clone(),
        }
    }
}

impl ApiClient<HttpTransport> {
    pub fn from_config(config: &Config) -> Result<Self> {
        let transport = HttpTransport::new(&config.api)?;
        Ok(Self::new(transport, config.endpoints.clone()))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, endpoints: Endpoints) -> Self {
        Self {
            transport: Arc::new(transport),
            endpoints: Arc::new(endpoints),
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub async fn search_articles(
        &self,
        text: &str,
        range: ItemRange,
    ) -> Result<Page<ArticleResult>> {
        let request = ApiRequest::post(
            &self.endpoints.search_articles,
            serde_json::json!({ "text": text }),
        )
        .range(Some(range));
        self.fetch_page(request).await
    }

    pub async fn search_journals(
        &self,
        text: &str,
        range: ItemRange,
    ) -> Result<Page<JournalResult>> {
        let request = ApiRequest::post(
            &self.endpoints.search_journals,
            serde_json::json!({ "text": text }),
        )
        .range(Some(range));
        self.fetch_page(request).await
    }

    pub async fn journal_rankings(&self, journal_id: RecordId) -> Result<Vec<Ranking>> {
        let request = ApiRequest::get(&self.endpoints.journal_rankings).query("id", journal_id);
        self.fetch_json(request).await
    }

    pub async fn search_authors(&self, query: &str, range: ItemRange) -> Result<Page<Author>> {
        let request = ApiRequest::get(&self.endpoints.author_search)
            .query("query", query)
            .range(Some(range));
        self.fetch_page(request).await
    }

    pub async fn author(&self, author_id: RecordId) -> Result<Author> {
        let request = ApiRequest::get(&self.endpoints.author_search).query("id", author_id);
        self.fetch_json(request).await
    }

    pub async fn author_articles(
        &self,
        author_id: RecordId,
        range: Option<ItemRange>,
        sort: ArticleSort,
    ) -> Result<Page<Article>> {
        let mut request = ApiRequest::get(&self.endpoints.author_articles).query("id", author_id);
        if sort == ArticleSort::Citations {
            request = request.query("sort", "citations");
        }
        self.fetch_page(request.range(range)).await
    }

    pub async fn author_coreferrers(&self, author_id: RecordId) -> Result<Vec<Coreferrer>> {
        let request =
            ApiRequest::get(&self.endpoints.author_coreferrers).query("id", author_id);
        self.fetch_json(request).await
    }

    pub async fn search_keywords(&self, query: &str) -> Result<Vec<Keyword>> {
        let request = ApiRequest::get(&self.endpoints.keyword_search).query("query", query);
        self.fetch_json(request).await
    }

    pub async fn search_publications(&self, query: &str) -> Result<Vec<Publication>> {
        let request = ApiRequest::get(&self.endpoints.publication_search).query("query", query);
        self.fetch_json(request).await
    }

    /// Sparse per-period counts for one keyword, optionally restricted
    /// to a set of publications.
    pub async fn graph_data(
        &self,
        keyword_id: RecordId,
        publication_ids: &[RecordId],
    ) -> Result<SparseSeries> {
        let mut request = ApiRequest::get(&self.endpoints.graph_data).query("keyword", keyword_id);
        if !publication_ids.is_empty() {
            let joined = publication_ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(",");
            request = request.query("publications", joined);
        }
        self.fetch_json(request).await
    }

    async fn dispatch(&self, request: ApiRequest) -> Result<ApiResponse> {
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(Error::Status {
                status: response.status,
                body: response.body,
            });
        }
        Ok(response)
    }

    async fn fetch_json<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R> {
        let response = self.dispatch(request).await?;
        Ok(serde_json::from_str(&response.body)?)
    }

    async fn fetch_page<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<Page<R>> {
        let response = self.dispatch(request).await?;
        let content_range = response
            .content_range
            .as_deref()
            .map(str::parse::<ContentRange>)
            .transpose()?;
        let items = serde_json::from_str(&response.body)?;
        Ok(Page {
            items,
            content_range,
        })
    }
}
