//! Inventory table view state

use serde::{Deserialize, Serialize};

use super::StatusFilter;
use crate::types::{PageRequest, PageSize};

/// Sortable inventory columns
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Name,
    ExpiryDate,
    Price,
    Quantity,
}

impl std::str::FromStr for SortKey {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "expiryDate" => Ok(SortKey::ExpiryDate),
            "price" => Ok(SortKey::Price),
            "quantity" => Ok(SortKey::Quantity),
            _ => Err("Unknown sort column"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// User-controlled parameters of the inventory table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewState {
    pub search_term: String,
    pub status_filter: StatusFilter,
    pub sort: SortConfig,
    /// 0-based
    pub page_index: u32,
    pub page_size: PageSize,
}

impl ViewState {
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.page_index = 0;
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
        self.page_index = 0;
    }

    pub fn set_page_size(&mut self, size: PageSize) {
        self.page_size = size;
        self.page_index = 0;
    }

    /// Column header click: a second click on an ascending column flips it to
    /// descending, anything else sorts ascending by `key`.
    pub fn sort_by(&mut self, key: SortKey) {
        let direction = if self.sort.key == key && self.sort.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        self.sort = SortConfig { key, direction };
    }

    /// Jump to `index`, clamped to the pages the server reported
    pub fn go_to_page(&mut self, index: u32, total_pages: u32) {
        self.page_index = index.min(total_pages.saturating_sub(1));
    }

    pub fn next_page(&mut self, total_pages: u32) {
        self.go_to_page(self.page_index.saturating_add(1), total_pages);
    }

    pub fn previous_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest {
            page: self.page_index,
            size: self.page_size.get(),
        }
    }
}

/// Pagination controls under the inventory table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageControls {
    pub current: u32,
    pub total_pages: u32,
    pub has_previous: bool,
    pub has_next: bool,
    /// Controls are hidden when everything fits on one page
    pub visible: bool,
}

impl PageControls {
    /// `total_pages` comes from the server and is taken as-is
    pub fn new(state: &ViewState, total_pages: u32) -> Self {
        let current = state.page_index;
        Self {
            current,
            total_pages,
            has_previous: current > 0,
            has_next: current.saturating_add(1) < total_pages,
            visible: total_pages > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = ViewState::default();
        assert_eq!(state.sort.key, SortKey::Name);
        assert_eq!(state.sort.direction, SortDirection::Ascending);
        assert_eq!(state.page_size.get(), 8);
        assert_eq!(state.status_filter, StatusFilter::All);
        assert_eq!(state.page_request(), PageRequest { page: 0, size: 8 });
    }

    #[test]
    fn test_sort_toggle() {
        let mut state = ViewState::default();
        state.sort_by(SortKey::Name);
        assert_eq!(state.sort.direction, SortDirection::Descending);
        state.sort_by(SortKey::Name);
        assert_eq!(state.sort.direction, SortDirection::Ascending);

        state.sort_by(SortKey::Name);
        state.sort_by(SortKey::Price);
        assert_eq!(state.sort.key, SortKey::Price);
        assert_eq!(state.sort.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_changes_reset_page_index() {
        let mut state = ViewState::default();

        state.go_to_page(3, 5);
        state.set_search_term("para");
        assert_eq!(state.page_index, 0);

        state.go_to_page(3, 5);
        state.set_status_filter(StatusFilter::Expired);
        assert_eq!(state.page_index, 0);

        state.go_to_page(3, 5);
        state.set_page_size(PageSize::Fifty);
        assert_eq!(state.page_index, 0);
    }

    #[test]
    fn test_sorting_keeps_page_index() {
        let mut state = ViewState::default();
        state.go_to_page(2, 5);
        state.sort_by(SortKey::Quantity);
        assert_eq!(state.page_index, 2);
    }

    #[test]
    fn test_page_navigation_is_clamped() {
        let mut state = ViewState::default();
        state.previous_page();
        assert_eq!(state.page_index, 0);

        state.go_to_page(10, 3);
        assert_eq!(state.page_index, 2);
        state.next_page(3);
        assert_eq!(state.page_index, 2);
        state.previous_page();
        assert_eq!(state.page_index, 1);

        state.go_to_page(4, 0);
        assert_eq!(state.page_index, 0);
    }

    #[test]
    fn test_page_controls() {
        let mut state = ViewState::default();
        let single = PageControls::new(&state, 1);
        assert!(!single.visible);
        assert!(!single.has_next);

        let none = PageControls::new(&state, 0);
        assert!(!none.visible);

        state.go_to_page(1, 3);
        let middle = PageControls::new(&state, 3);
        assert!(middle.visible);
        assert!(middle.has_previous);
        assert!(middle.has_next);

        state.next_page(3);
        let last = PageControls::new(&state, 3);
        assert!(!last.has_next);
    }

    #[test]
    fn test_state_from_partial_json() {
        let state: ViewState = serde_json::from_str(
            r#"{"searchTerm":"asp","statusFilter":"Low Stock","sort":{"key":"expiryDate","direction":"desc"},"pageSize":30}"#,
        )
        .unwrap();
        assert_eq!(state.search_term, "asp");
        assert_eq!(state.status_filter, StatusFilter::LowStock);
        assert_eq!(state.sort.key, SortKey::ExpiryDate);
        assert_eq!(state.sort.direction, SortDirection::Descending);
        assert_eq!(state.page_size, PageSize::Thirty);
        assert_eq!(state.page_index, 0);
    }
}
