//! UI-related application state

use egui_commonmark::CommonMarkCache;
use std::time::{Duration, Instant};

use crate::api::Launch;
use crate::debounce::Debouncer;
use crate::filter::FilterState;
use crate::ui::theme::Theme;

/// UI-related state
pub struct UiState {
    /// Cache for markdown rendering of launch details
    pub markdown_cache: CommonMarkCache,
    /// Current theme palette
    pub current_theme: Theme,
    /// Whether theme needs to be applied
    pub theme_dirty: bool,
    /// Whether to show the About dialog
    pub show_about_dialog: bool,

    /// Raw text in the search box
    pub search_input: String,
    /// Search text as used for filtering
    pub search: Debouncer<String>,
    /// Selected year filter
    pub year: Option<i32>,
    pub only_successful: bool,
    pub only_favorites: bool,
    /// Current 1-based page
    pub page: usize,

    /// Launch shown in the details modal
    pub selected: Option<Launch>,
}

impl UiState {
    /// Create a new UiState with the given theme and search debounce delay
    pub fn new(theme: Theme, debounce: Duration) -> Self {
        Self {
            markdown_cache: CommonMarkCache::default(),
            current_theme: theme,
            theme_dirty: true, // Apply theme on first frame
            show_about_dialog: false,
            search_input: String::new(),
            search: Debouncer::new(String::new(), debounce),
            year: None,
            only_successful: false,
            only_favorites: false,
            page: 1,
            selected: None,
        }
    }

    /// Feed the search box into the debouncer.
    ///
    /// Returns the time until the pending search settles so the caller can
    /// schedule a repaint.
    pub fn tick_search(&mut self, now: Instant) -> Option<Duration> {
        self.search.push(self.search_input.clone(), now);
        self.search.poll(now);
        self.search.time_remaining(now)
    }

    /// Empty the search box and apply the empty search without waiting
    pub fn clear_search(&mut self) {
        self.search_input.clear();
        self.search.settle_now(String::new());
    }

    /// Filters currently in effect
    pub fn filter_state(&self) -> FilterState {
        FilterState {
            search: self.search.value().clone(),
            year: self.year,
            only_successful: self.only_successful,
            only_favorites: self.only_favorites,
        }
    }
}
