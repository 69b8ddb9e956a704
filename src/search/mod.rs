//! State machine behind the property search page.
//!
//! Editing filters only touches the draft; the API is contacted on explicit
//! mount, search and clear actions. The server is asked for one large batch
//! and the page buttons slice that batch locally.

pub mod pagination;
pub mod price;

use crate::application::PropertyApplication;
use crate::errors::ApplicationError;
use crate::models::filters::MAX_PAGE_SIZE;
use crate::models::{FilterCriteria, Property};
use crate::repository::PropertyReader;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub use pagination::Paginated;
pub use price::{PriceSuggestion, PRICE_SUGGESTIONS};

/// Properties per visible page
pub const ITEMS_PER_PAGE: usize = 10;
/// Batch size requested from the server on every fetch
pub const FETCH_PAGE_SIZE: u32 = MAX_PAGE_SIZE;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load properties";
pub const SEARCH_FAILED_MESSAGE: &str = "Failed to search properties";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStatus {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    Mount,
    Search,
    Clear,
}

/// An issued fetch. Only the most recently issued ticket may apply its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub id: u64,
    pub kind: FetchKind,
    pub filters: FilterCriteria,
}

pub struct SearchView<R> {
    app: Arc<PropertyApplication<R>>,
    filters: FilterCriteria,
    applied_filters: FilterCriteria,
    results: Vec<Property>,
    baseline: Vec<Property>,
    baseline_filters: FilterCriteria,
    current_page: usize,
    total_results: usize,
    status: SearchStatus,
    latest_request: u64,
    loaded_at: Option<DateTime<Utc>>,
}

impl<R: PropertyReader> SearchView<R> {
    pub fn new(app: Arc<PropertyApplication<R>>) -> Self {
        Self {
            app,
            filters: FilterCriteria::default(),
            applied_filters: FilterCriteria::default(),
            results: Vec::new(),
            baseline: Vec::new(),
            baseline_filters: FilterCriteria::default(),
            current_page: 1,
            total_results: 0,
            status: SearchStatus::Idle,
            latest_request: 0,
            loaded_at: None,
        }
    }

    /// Create the view and run the initial unfiltered fetch
    pub async fn mount(app: Arc<PropertyApplication<R>>) -> Self {
        let mut view = Self::new(app);
        view.reload().await;
        view
    }

    /// Fetch the unfiltered batch without touching the draft
    pub async fn reload(&mut self) {
        let ticket = self.begin(FetchKind::Mount);
        self.run(ticket).await;
    }

    pub async fn search(&mut self) {
        let ticket = self.begin(FetchKind::Search);
        self.run(ticket).await;
    }

    pub async fn clear(&mut self) {
        let ticket = self.begin(FetchKind::Clear);
        self.run(ticket).await;
    }

    async fn run(&mut self, ticket: FetchTicket) {
        let result = self.app.load_properties(&ticket.filters).await;
        self.complete(ticket, result);
    }

    /// Move to `Loading` and issue a ticket for `kind`.
    ///
    /// Search and clear drop the displayed results right away so stale
    /// cards never show under the spinner.
    pub fn begin(&mut self, kind: FetchKind) -> FetchTicket {
        self.latest_request += 1;

        let filters = match kind {
            FetchKind::Mount => FilterCriteria::default().with_page_size(FETCH_PAGE_SIZE),
            FetchKind::Search => FilterCriteria {
                name: self.filters.name.clone(),
                address: self.filters.address.clone(),
                min_price: self.filters.min_price.clone(),
                max_price: self.filters.max_price.clone(),
                ..FilterCriteria::default()
            }
            .with_page(1)
            .with_page_size(FETCH_PAGE_SIZE),
            FetchKind::Clear => {
                self.filters = FilterCriteria::default();
                FilterCriteria::default().with_page_size(FETCH_PAGE_SIZE)
            }
        };

        if kind != FetchKind::Mount {
            self.clear_results();
        }
        self.status = SearchStatus::Loading;

        debug!("Issuing {:?} fetch #{} with {:?}", kind, self.latest_request, filters);

        FetchTicket {
            id: self.latest_request,
            kind,
            filters,
        }
    }

    /// Apply the outcome of `ticket`. Returns false when a newer fetch has
    /// been issued since, in which case nothing changes.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Property>, ApplicationError>,
    ) -> bool {
        if ticket.id != self.latest_request {
            warn!(
                "Discarding stale {:?} fetch #{} (latest is #{})",
                ticket.kind, ticket.id, self.latest_request
            );
            return false;
        }

        match result {
            Ok(properties) => {
                info!("{:?} completed with {} properties", ticket.kind, properties.len());
                if properties.is_empty() {
                    debug!("No properties returned, filters may be too restrictive");
                }
                if ticket.kind != FetchKind::Search {
                    self.baseline = properties.clone();
                    self.baseline_filters = ticket.filters.clone();
                }
                self.total_results = properties.len();
                self.results = properties;
                self.current_page = 1;
                self.applied_filters = ticket.filters;
                self.loaded_at = Some(Utc::now());
                self.status = SearchStatus::Loaded;
            }
            Err(e) => {
                warn!("{:?} failed: {}", ticket.kind, e);
                self.clear_results();
                let message = match ticket.kind {
                    FetchKind::Search => SEARCH_FAILED_MESSAGE,
                    FetchKind::Mount | FetchKind::Clear => LOAD_FAILED_MESSAGE,
                };
                self.status = SearchStatus::Failed(message.to_string());
            }
        }

        true
    }

    fn clear_results(&mut self) {
        self.results.clear();
        self.total_results = 0;
        self.current_page = 1;
    }

    pub fn set_filters(&mut self, filters: FilterCriteria) {
        self.filters = filters;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.filters.name = name.into();
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.filters.address = address.into();
    }

    pub fn set_min_price(&mut self, min_price: impl Into<String>) {
        self.filters.min_price = min_price.into();
    }

    pub fn set_max_price(&mut self, max_price: impl Into<String>) {
        self.filters.max_price = max_price.into();
    }

    pub fn apply_price_suggestion(&mut self, suggestion: &PriceSuggestion) {
        debug!("Applying price suggestion {}", suggestion.label);
        self.filters.min_price = suggestion.min.to_string();
        self.filters.max_price = suggestion.max.to_string();
    }

    /// Jump to `page`, clamped to the pages that exist. Local only.
    pub fn set_page(&mut self, page: usize) {
        let last = self.total_pages().max(1);
        self.current_page = page.clamp(1, last);
    }

    pub fn next_page(&mut self) {
        if self.page().has_next() {
            self.current_page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.page().has_previous() {
            self.current_page -= 1;
        }
    }

    /// Offered when a load came back empty
    pub fn can_reset(&self) -> bool {
        self.status == SearchStatus::Loaded && self.results.is_empty()
    }

    /// Bring back the last unfiltered batch without contacting the server
    pub fn reset_search(&mut self) -> bool {
        if !self.can_reset() {
            return false;
        }
        self.filters = FilterCriteria::default();
        self.results = self.baseline.clone();
        self.applied_filters = self.baseline_filters.clone();
        self.total_results = self.results.len();
        self.current_page = 1;
        true
    }

    pub fn status(&self) -> &SearchStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == SearchStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            SearchStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// The draft shown in the filter form
    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    /// Filters behind the currently loaded results
    pub fn applied_filters(&self) -> &FilterCriteria {
        &self.applied_filters
    }

    /// Every property of the last fetch
    pub fn results(&self) -> &[Property] {
        &self.results
    }

    pub fn total_results(&self) -> usize {
        self.total_results
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.total_results, ITEMS_PER_PAGE)
    }

    pub fn page(&self) -> Paginated<'_, Property> {
        Paginated::new(&self.results, self.current_page, ITEMS_PER_PAGE)
    }

    pub fn visible_properties(&self) -> &[Property] {
        self.page().items
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }
}
