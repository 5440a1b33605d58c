use crate::client::{ApiClient, Transport};
use crate::status::RequestStatus;
use crate::Result;
use futures::future::join_all;
use pubassist_engine::SeriesMatrix;
use pubassist_types::{Keyword, Publication, RecordId, SparseSeries};
use std::collections::BTreeMap;

/// Keyword popularity over time, optionally restricted to a set of
/// publications. Each selected keyword is one series of the matrix.
///
/// A series is named after its keyword. When another selected keyword
/// already shows the same text, the id is appended (`"rust (#7)"`).
pub struct HypeGraph<T> {
    client: ApiClient<T>,
    keywords: Vec<Keyword>,
    /// Series name of each entry in `keywords`
    series: Vec<String>,
    publications: BTreeMap<RecordId, Publication>,
    matrix: SeriesMatrix,
    status: RequestStatus,
}

impl<T: Transport> HypeGraph<T> {
    pub fn new(client: ApiClient<T>) -> Self {
        Self {
            client,
            keywords: Vec::new(),
            series: Vec::new(),
            publications: BTreeMap::new(),
            matrix: SeriesMatrix::new(),
            status: RequestStatus::default(),
        }
    }

    pub fn matrix(&self) -> &SeriesMatrix {
        &self.matrix
    }

    /// Selected keywords in selection order.
    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }

    /// Name of the matrix series showing `keyword_id`.
    pub fn series_name(&self, keyword_id: RecordId) -> Option<&str> {
        self.keywords
            .iter()
            .position(|k| k.id == keyword_id)
            .map(|index| self.series[index].as_str())
    }

    pub fn publications(&self) -> impl Iterator<Item = &Publication> {
        self.publications.values()
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    /// Select `keyword` and merge its series. Returns `false` when it was
    /// already selected.
    ///
    /// The keyword stays selected when the fetch fails, so the next
    /// refill retries it.
    pub async fn add_keyword(&mut self, keyword: Keyword) -> Result<bool> {
        if self.keywords.iter().any(|selected| selected.id == keyword.id) {
            return Ok(false);
        }

        let filter = self.publication_ids();
        self.status.begin();
        let result = self.client.graph_data(keyword.id, &filter).await;
        let name = self.unique_series_name(&keyword);
        self.keywords.push(keyword);

        match result {
            Ok(series) => {
                self.status.succeed();
                merge(&mut self.matrix, &name, &series);
                self.series.push(name);
                Ok(true)
            }
            Err(err) => {
                self.series.push(name);
                self.status.fail();
                Err(err)
            }
        }
    }

    pub fn remove_keyword(&mut self, keyword_id: RecordId) -> bool {
        let Some(index) = self.keywords.iter().position(|k| k.id == keyword_id) else {
            return false;
        };
        self.keywords.remove(index);
        let name = self.series.remove(index);
        self.matrix.remove_series(&name);
        true
    }

    pub fn clear_keywords(&mut self) {
        self.keywords.clear();
        self.series.clear();
        self.matrix.clear();
    }

    /// Restrict every series to `publication` as well and refill.
    pub async fn add_publication(&mut self, publication: Publication) -> Result<bool> {
        if self.publications.contains_key(&publication.id) {
            return Ok(false);
        }
        self.publications.insert(publication.id, publication);
        self.refill().await?;
        Ok(true)
    }

    pub async fn remove_publication(&mut self, publication_id: RecordId) -> Result<bool> {
        if self.publications.remove(&publication_id).is_none() {
            return Ok(false);
        }
        self.refill().await?;
        Ok(true)
    }

    pub async fn clear_publications(&mut self) -> Result<()> {
        self.publications.clear();
        self.refill().await
    }

    /// Rebuild the matrix from scratch for the current selection.
    ///
    /// All keywords are fetched concurrently and merged in selection
    /// order. Keywords whose fetch fails are left out; the first error is
    /// returned after the others have been merged.
    pub async fn refill(&mut self) -> Result<()> {
        self.matrix.clear();
        if self.keywords.is_empty() {
            return Ok(());
        }

        let filter = self.publication_ids();
        let client = &self.client;
        self.status.begin();
        let fetched = join_all(
            self.keywords
                .iter()
                .map(|keyword| client.graph_data(keyword.id, &filter)),
        )
        .await;

        let mut first_error = None;
        for ((keyword, name), result) in self.keywords.iter().zip(&self.series).zip(fetched) {
            match result {
                Ok(series) => merge(&mut self.matrix, name, &series),
                Err(err) => {
                    tracing::debug!(keyword = %keyword.keyword, error = %err, "graph data unavailable");
                    first_error.get_or_insert(err);
                }
            }
        }

        match first_error {
            Some(err) => {
                self.status.fail();
                Err(err)
            }
            None => {
                self.status.succeed();
                Ok(())
            }
        }
    }

    fn unique_series_name(&self, keyword: &Keyword) -> String {
        if self.series.iter().any(|name| *name == keyword.keyword) {
            format!("{} (#{})", keyword.keyword, keyword.id)
        } else {
            keyword.keyword.clone()
        }
    }

    fn publication_ids(&self) -> Vec<RecordId> {
        self.publications.keys().copied().collect()
    }
}

fn merge(matrix: &mut SeriesMatrix, name: &str, series: &SparseSeries) {
    matrix.merge_series(name, series.iter().map(|(label, value)| (label.as_str(), *value)));
}
