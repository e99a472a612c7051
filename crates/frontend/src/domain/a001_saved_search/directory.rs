use contracts::domain::a001_saved_search::aggregate::SavedSearch;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::load_state::LoadState;

pub type DirectoryState = LoadState<Vec<SavedSearch>>;

/// Session copy of the user's saved searches.
///
/// Shared by the selector (reads) and the save flow (refreshes after a save).
#[derive(Clone, Copy)]
pub struct SavedSearchDirectory {
    state: RwSignal<DirectoryState>,
    generation: RwSignal<u64>,
}

impl SavedSearchDirectory {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(LoadState::Loading),
            generation: RwSignal::new(0),
        }
    }

    pub fn state(&self) -> DirectoryState {
        self.state.get()
    }

    pub fn state_untracked(&self) -> DirectoryState {
        self.state.get_untracked()
    }

    /// Reloads the list for `access_token`.
    ///
    /// Without a token the list is empty. Only the latest request may
    /// publish its result.
    pub fn refresh(&self, access_token: Option<String>) {
        let generation = self.next_generation();

        let Some(token) = access_token else {
            self.state.set(LoadState::Loaded(Vec::new()));
            return;
        };

        let svc = *self;
        spawn_local(async move {
            let result = api::fetch_searches(&token).await;
            svc.publish(generation, result);
        });
    }

    /// Starts a new request; earlier ones become stale
    fn next_generation(&self) -> u64 {
        let generation = self.generation.get_untracked() + 1;
        self.generation.set(generation);
        generation
    }

    /// Stores the result of request `generation` unless a newer one started.
    /// Returns whether the result was kept.
    fn publish(&self, generation: u64, result: Result<Vec<SavedSearch>, String>) -> bool {
        if !is_latest(self.generation.get_untracked(), generation) {
            log::debug!("Dropping stale saved search response #{}", generation);
            return false;
        }
        if let Err(e) = &result {
            log::error!("Failed to load saved searches: {}", e);
        }
        self.state.set(result.into());
        true
    }
}

fn is_latest(current: u64, generation: u64) -> bool {
    current == generation
}

impl Default for SavedSearchDirectory {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_directory() -> SavedSearchDirectory {
    use_context::<SavedSearchDirectory>().expect("SavedSearchDirectory not provided in context")
}
