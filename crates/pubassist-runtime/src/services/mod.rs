//! Session-scoped view controllers over the API.
//!
//! Each browser owns the state of one navigation flow (page caches,
//! request flags, selections) and is dropped when the flow ends.

mod articles;
mod authors;
mod hype;

pub use articles::{ArticleBrowser, ArticleSession};
pub use authors::{AuthorBrowser, AuthorDetails, AuthorHit, AuthorSearchView, Section};
pub use hype::HypeGraph;

use crate::client::Page;
use crate::config::BrowseConfig;
use crate::status::RequestStatus;
use crate::Result;
use pubassist_engine::{PageCache, PageStrip, PaginationState};
use pubassist_types::ItemRange;
use serde::Serialize;
use std::future::Future;

/// Paging knobs shared by the browsers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowseSettings {
    pub page_size: usize,
    pub fetch_radius: usize,
    pub most_cited: usize,
}

impl Default for BrowseSettings {
    fn default() -> Self {
        Self::from(&BrowseConfig::default())
    }
}

impl From<&BrowseConfig> for BrowseSettings {
    fn from(config: &BrowseConfig) -> Self {
        Self {
            page_size: config.page_size.max(1),
            fetch_radius: config.fetch_radius,
            most_cited: config.most_cited,
        }
    }
}

/// One page of results with its navigation strip.
#[derive(Debug, Clone, Serialize)]
pub struct PageView<T> {
    pub page: usize,
    pub item_count: usize,
    pub last_page: usize,
    pub items: Vec<T>,
    pub strip: PageStrip,
}

impl<T> PageView<T> {
    /// Same page with every item transformed.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageView<U> {
        PageView {
            page: self.page,
            item_count: self.item_count,
            last_page: self.last_page,
            items: self.items.into_iter().map(f).collect(),
            strip: self.strip,
        }
    }
}

/// Paginated result list backed by a page cache.
#[derive(Debug, Clone)]
pub struct ResultSet<T> {
    pagination: PaginationState,
    cache: PageCache<T>,
    status: RequestStatus,
}

impl<T: Clone> ResultSet<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            pagination: PaginationState::new(page_size),
            cache: PageCache::new(page_size),
            status: RequestStatus::default(),
        }
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn item_count(&self) -> usize {
        self.pagination.item_count
    }

    pub fn is_cached(&self, page: usize) -> bool {
        self.cache.contains(page)
    }

    pub fn cached_pages(&self) -> Vec<usize> {
        self.cache.pages().collect()
    }

    pub fn view(&self) -> PageView<T> {
        let page = self.pagination.current_page;
        PageView {
            page,
            item_count: self.pagination.item_count,
            last_page: self.pagination.last_page(),
            items: self.cache.get(page).map(<[T]>::to_vec).unwrap_or_default(),
            strip: self.pagination.page_strip(),
        }
    }

    /// Show `page`, fetching it (plus `fetch_radius` neighbours) when it is
    /// not cached yet. A failed fetch keeps already cached pages.
    pub(crate) async fn load<F, Fut>(
        &mut self,
        page: usize,
        fetch_radius: usize,
        fetch: F,
    ) -> Result<PageView<T>>
    where
        F: FnOnce(ItemRange) -> Fut,
        Fut: Future<Output = Result<Page<T>>>,
    {
        self.pagination.go_to(page);
        let page = self.pagination.current_page;

        if !self.cache.contains(page)
            && let Some(range) = self.pagination.fetch_range(fetch_radius).item_range()
        {
            self.status.begin();
            match fetch(range).await {
                Ok(result) => {
                    self.status.succeed();
                    self.absorb(range, result);
                }
                Err(err) => {
                    self.status.fail();
                    return Err(err);
                }
            }
        }

        Ok(self.view())
    }

    fn absorb(&mut self, requested: ItemRange, result: Page<T>) {
        let first = result
            .content_range
            .as_ref()
            .map_or(requested.start, |range| range.start);
        // without a Content-Range a short answer marks the end of the list
        let total = result.total().or_else(|| {
            (result.items.len() < requested.count()).then(|| first + result.items.len())
        });

        if let Some(total) = total {
            self.pagination.item_count = total;
        }
        let stored = self.cache.store(first, result.items, total);
        tracing::debug!(?stored, total, "cached result pages");
    }
}
