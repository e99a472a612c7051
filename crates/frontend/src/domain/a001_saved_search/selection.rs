//! Binding between the saved search dropdown and the filter store.
//!
//! Both transitions write the filters synchronously before returning the new
//! selection, so the four bound filter fields always reflect the selection
//! that was last returned.

use contracts::domain::a001_saved_search::aggregate::{SavedSearch, SavedSearchId};
use contracts::shared::filter::SearchSnapshot;

use super::directory::DirectoryState;
use crate::layout::notification_service::Notifier;
use crate::shared::filters::FilterSink;

pub const PLACEHOLDER: &str = "Select a saved search";

/// Which saved search, if any, is applied to the filters
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchSelection {
    #[default]
    NoSelection,
    Selected(SavedSearch),
}

impl SearchSelection {
    /// Text for the dropdown trigger
    pub fn label(&self) -> &str {
        match self {
            SearchSelection::NoSelection => PLACEHOLDER,
            SearchSelection::Selected(search) => &search.name,
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, SearchSelection::Selected(_))
    }

    pub fn selected_id(&self) -> Option<SavedSearchId> {
        match self {
            SearchSelection::Selected(search) => Some(search.id),
            SearchSelection::NoSelection => None,
        }
    }
}

/// Applies `entry` to the filters and returns the resulting selection
pub fn select(entry: SavedSearch, filters: &impl FilterSink) -> SearchSelection {
    filters.apply_snapshot(&entry.snapshot());
    SearchSelection::Selected(entry)
}

/// Clears the four bound filters, whatever was selected before
pub fn reset(filters: &impl FilterSink) -> SearchSelection {
    filters.apply_snapshot(&SearchSnapshot::default());
    SearchSelection::NoSelection
}

/// Why the dropdown refused to open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenDenied {
    NotSignedIn,
    NoSavedSearches,
    DirectoryUnavailable,
}

impl OpenDenied {
    pub fn message(&self) -> &'static str {
        match self {
            OpenDenied::NotSignedIn | OpenDenied::NoSavedSearches => {
                "Login & save a search to use this feature"
            }
            OpenDenied::DirectoryUnavailable => "Saved searches are unavailable right now",
        }
    }
}

/// Whether the dropdown may open for `user_id` given the directory state.
/// A failed or still pending fetch counts as "nothing to pick".
pub fn check_open(user_id: Option<&str>, directory: &DirectoryState) -> Result<(), OpenDenied> {
    if user_id.map_or(true, str::is_empty) {
        return Err(OpenDenied::NotSignedIn);
    }
    if directory.error().is_some() {
        return Err(OpenDenied::DirectoryUnavailable);
    }
    if directory.items().is_empty() {
        return Err(OpenDenied::NoSavedSearches);
    }
    Ok(())
}

/// Trigger click guard: `true` when the dropdown may open, otherwise a
/// warning toast is shown and nothing else changes.
pub fn guard_open(
    user_id: Option<&str>,
    directory: &DirectoryState,
    notifier: &impl Notifier,
) -> bool {
    match check_open(user_id, directory) {
        Ok(()) => true,
        Err(denied) => {
            notifier.warning(denied.message());
            false
        }
    }
}
