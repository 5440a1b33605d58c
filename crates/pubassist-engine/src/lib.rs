// Engine module - Pure view-model logic (pagination, page caching, series merging)
// This layer sits between wire types and the runtime browsers; it performs no I/O

pub mod page_cache;
pub mod pagination;
pub mod series;

pub use page_cache::PageCache;
pub use pagination::{
    compute_fetch_range, compute_page_strip, last_page, Ellipsis, FetchRange, PageEntry,
    PageLink, PageStrip, PaginationState, WINDOW_SIZE,
};
pub use series::{SeriesMatrix, NULL_LABEL};

use pubassist_types::SparseSeries;

// Façade API - Stable public interface for the runtime layer

/// Build a dense matrix from a list of named sparse series, merged in order
pub fn build_matrix<'a, I>(series: I) -> SeriesMatrix
where
    I: IntoIterator<Item = (&'a str, &'a SparseSeries)>,
{
    let mut matrix = SeriesMatrix::new();
    for (name, points) in series {
        matrix.merge_series(name, points.iter().map(|(k, v)| (k.as_str(), *v)));
    }
    matrix
}
