//! List Controller
//!
//! Derives the visible food-item sequence from the dataset and the current
//! filter state. Exactly one view mode is active at a time: the plain
//! paginated feed, a restaurant-name search, or a category filter. The
//! presentation layer owns a `FilterState` value, calls the mutators in
//! response to input events, and re-derives the visible list after each one.

use crate::models::FoodItem;

/// Items revealed per "Show More" click.
pub const PAGE_SIZE: usize = 9;

/// Which filter is currently applied.
///
/// Search and category filtering are mutually exclusive: entering a search
/// term replaces any category selection, and picking a category replaces any
/// search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Plain feed, sliced into pages of [`PAGE_SIZE`].
    #[default]
    Paginated,
    /// Case-sensitive substring match on restaurant name; pagination off.
    Search(String),
    /// All items of one category at once; pagination off.
    Category(u32),
}

/// Filter state owned by the UI layer.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub mode: ViewMode,
    /// Pages loaded so far. Monotonic; never resets within a session, so
    /// switching a category filter off resumes at the accumulated page.
    page_count: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            mode: ViewMode::Paginated,
            page_count: 1,
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Apply a (already debounced) search term. An empty term leaves search
    /// mode and falls back to the paginated feed at the current page count.
    pub fn set_search_term(&mut self, term: &str) {
        if term.is_empty() {
            self.mode = ViewMode::Paginated;
        } else {
            self.mode = ViewMode::Search(term.to_string());
        }
    }

    /// Select a category, or `None` for "All". Returning to "All" resumes
    /// the paginated feed at the stored page count, not at page 1.
    pub fn set_category(&mut self, category_id: Option<u32>) {
        self.mode = match category_id {
            Some(id) => ViewMode::Category(id),
            None => ViewMode::Paginated,
        };
    }

    /// Reveal the next page. Only meaningful in the paginated feed; a no-op
    /// while a search or category filter is active and once every page is
    /// already loaded.
    pub fn load_more(&mut self, dataset_len: usize) {
        if self.mode == ViewMode::Paginated && self.can_load_more(dataset_len) {
            self.page_count += 1;
        }
    }

    /// Whether further pages remain beyond the ones loaded so far.
    pub fn can_load_more(&self, dataset_len: usize) -> bool {
        self.page_count < num_pages(dataset_len)
    }

    /// The "Show More" control is hidden entirely while a search is active.
    pub fn show_more_visible(&self) -> bool {
        !matches!(self.mode, ViewMode::Search(_))
    }

    /// Derive the visible sequence. Always an order-preserving subsequence
    /// of `dataset` with no duplicates; zero matches is a valid empty list.
    pub fn visible(&self, dataset: &[FoodItem]) -> Vec<FoodItem> {
        match &self.mode {
            ViewMode::Paginated => {
                let end = (self.page_count * PAGE_SIZE).min(dataset.len());
                dataset[..end].to_vec()
            }
            ViewMode::Search(term) => dataset
                .iter()
                .filter(|item| item.restaurant_name.contains(term.as_str()))
                .cloned()
                .collect(),
            ViewMode::Category(id) => dataset
                .iter()
                .filter(|item| item.category_id == *id)
                .cloned()
                .collect(),
        }
    }
}

/// Total number of pages for a dataset, rounding the last partial page up.
pub fn num_pages(dataset_len: usize) -> usize {
    dataset_len.div_ceil(PAGE_SIZE)
}
