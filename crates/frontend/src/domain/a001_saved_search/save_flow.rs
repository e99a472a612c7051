//! "Save search" page flow, split into the synchronous checks before the
//! mutation and the reaction to its outcome.

use contracts::domain::a001_saved_search::aggregate::{SaveSearchRequest, SavedSearch};
use contracts::shared::filter::FilterSet;

use crate::layout::notification_service::Notifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveRejected {
    NameRequired,
    NotSignedIn,
}

impl SaveRejected {
    pub fn message(&self) -> &'static str {
        match self {
            SaveRejected::NameRequired => "Name required",
            SaveRejected::NotSignedIn => "Sign in to save searches",
        }
    }

    /// Whether the name modal should close despite the rejection
    pub fn closes_modal(&self) -> bool {
        matches!(self, SaveRejected::NotSignedIn)
    }
}

/// Builds the mutation payload, or warns and returns why nothing is sent
pub fn begin_save(
    name: &str,
    user_id: Option<&str>,
    filters: &FilterSet,
    notifier: &impl Notifier,
) -> Result<SaveSearchRequest, SaveRejected> {
    let rejected = if name.trim().is_empty() {
        Some(SaveRejected::NameRequired)
    } else if user_id.map_or(true, str::is_empty) {
        Some(SaveRejected::NotSignedIn)
    } else {
        None
    };
    if let Some(reason) = rejected {
        notifier.warning(reason.message());
        return Err(reason);
    }

    let user_id = user_id.unwrap_or_default().to_string();
    Ok(SaveSearchRequest::from_filters(
        name.trim().to_string(),
        user_id,
        filters,
    ))
}

/// Reports the mutation outcome; `true` means the directory should refresh
pub fn finish_save(result: Result<SavedSearch, String>, notifier: &impl Notifier) -> bool {
    match result {
        Ok(saved) => {
            log::info!("Saved search {} ({})", saved.name, saved.id.value());
            notifier.success("Search saved");
            true
        }
        Err(e) => {
            log::error!("Failed to save search: {}", e);
            notifier.error(&format!("Could not save search: {}", e));
            false
        }
    }
}
