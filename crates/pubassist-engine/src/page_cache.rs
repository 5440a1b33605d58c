use std::collections::BTreeMap;

/// Per-page cache of a ranged result list.
///
/// A single ranged response may span several pages (prefetch); `store`
/// slices it by page size so later page changes can be served locally.
#[derive(Debug, Clone)]
pub struct PageCache<T> {
    page_size: usize,
    pages: BTreeMap<usize, Vec<T>>,
}

impl<T> PageCache<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            pages: BTreeMap::new(),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Slice `items`, which start at item index `first_index`, into pages.
    ///
    /// Items before the first page boundary are dropped. A trailing short
    /// chunk is kept only when it reaches `total`, i.e. it really is the
    /// last page. Returns the page numbers that were stored.
    pub fn store(&mut self, first_index: usize, items: Vec<T>, total: Option<usize>) -> Vec<usize> {
        let page_size = self.page_size;
        let skip = (page_size - first_index % page_size) % page_size;
        let mut next_index = first_index + skip;
        let mut page = next_index / page_size + 1;

        let mut items = items.into_iter().skip(skip);
        let mut stored = Vec::new();

        loop {
            let chunk: Vec<T> = items.by_ref().take(page_size).collect();
            if chunk.is_empty() {
                break;
            }

            let reaches_end = total.is_some_and(|total| next_index + chunk.len() >= total);
            if chunk.len() < page_size && !reaches_end {
                break;
            }

            next_index += chunk.len();
            self.pages.insert(page, chunk);
            stored.push(page);
            page += 1;
        }

        stored
    }

    pub fn get(&self, page: usize) -> Option<&[T]> {
        self.pages.get(&page).map(Vec::as_slice)
    }

    pub fn contains(&self, page: usize) -> bool {
        self.pages.contains_key(&page)
    }

    /// Cached page numbers in ascending order.
    pub fn pages(&self) -> impl Iterator<Item = usize> + '_ {
        self.pages.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn clear(&mut self) {
        self.pages.clear();
    }
}
