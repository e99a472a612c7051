use contracts::shared::filter::{FilterSet, SearchSnapshot};
use leptos::prelude::*;

/// Write access to the four filter fields a saved search binds to.
///
/// Implemented by [`FilterStore`]; the saved search logic only depends on
/// this trait.
pub trait FilterSink {
    fn set_role(&self, value: String);
    fn set_location(&self, value: String);
    fn set_company(&self, value: String);
    fn set_description(&self, value: String);

    fn apply_snapshot(&self, snapshot: &SearchSnapshot) {
        self.set_location(snapshot.location.clone());
        self.set_role(snapshot.role.clone());
        self.set_company(snapshot.company.clone());
        self.set_description(snapshot.description.clone());
    }
}

/// Process-wide filter state, provided via context by `App`.
///
/// Values live only for the page session.
#[derive(Clone, Copy)]
pub struct FilterStore {
    role: RwSignal<String>,
    location: RwSignal<String>,
    company: RwSignal<String>,
    description: RwSignal<String>,
    date: RwSignal<String>,
    salary: RwSignal<String>,
}

impl FilterStore {
    pub fn new() -> Self {
        Self {
            role: RwSignal::new(String::new()),
            location: RwSignal::new(String::new()),
            company: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            date: RwSignal::new(String::new()),
            salary: RwSignal::new(String::new()),
        }
    }

    pub fn role(&self) -> String {
        self.role.get()
    }

    pub fn location(&self) -> String {
        self.location.get()
    }

    pub fn company(&self) -> String {
        self.company.get()
    }

    pub fn description(&self) -> String {
        self.description.get()
    }

    pub fn date(&self) -> String {
        self.date.get()
    }

    pub fn salary(&self) -> String {
        self.salary.get()
    }

    pub fn set_role(&self, value: String) {
        self.role.set(value);
    }

    pub fn set_location(&self, value: String) {
        self.location.set(value);
    }

    pub fn set_company(&self, value: String) {
        self.company.set(value);
    }

    pub fn set_description(&self, value: String) {
        self.description.set(value);
    }

    pub fn set_date(&self, value: String) {
        self.date.set(value);
    }

    pub fn set_salary(&self, value: String) {
        self.salary.set(value);
    }

    /// All fields; tracked, so effects calling this re-run on any change
    pub fn snapshot(&self) -> FilterSet {
        FilterSet {
            role: self.role.get(),
            location: self.location.get(),
            company: self.company.get(),
            description: self.description.get(),
            date: self.date.get(),
            salary: self.salary.get(),
        }
    }

    pub fn snapshot_untracked(&self) -> FilterSet {
        FilterSet {
            role: self.role.get_untracked(),
            location: self.location.get_untracked(),
            company: self.company.get_untracked(),
            description: self.description.get_untracked(),
            date: self.date.get_untracked(),
            salary: self.salary.get_untracked(),
        }
    }
}

impl Default for FilterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterSink for FilterStore {
    fn set_role(&self, value: String) {
        FilterStore::set_role(self, value);
    }

    fn set_location(&self, value: String) {
        FilterStore::set_location(self, value);
    }

    fn set_company(&self, value: String) {
        FilterStore::set_company(self, value);
    }

    fn set_description(&self, value: String) {
        FilterStore::set_description(self, value);
    }
}

pub fn use_filters() -> FilterStore {
    use_context::<FilterStore>().expect("FilterStore not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_saved_search::selection::{reset, select};
    use crate::domain::a001_saved_search::test_support::search;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_saved_search_writes_bound_signals_only() {
        let owner = Owner::new();
        owner.with(|| {
            let store = FilterStore::new();
            store.set_role("Old role".into());
            store.set_date("7d".into());
            store.set_salary("120000".into());

            let mut entry = search(1, "Berlin Acme");
            entry.title = None;
            entry.location = Some("Berlin".into());
            entry.company = Some("Acme".into());
            entry.job_description = Some("rust".into());
            select(entry, &store);

            assert_eq!(
                store.snapshot_untracked(),
                FilterSet {
                    role: "".into(),
                    location: "Berlin".into(),
                    company: "Acme".into(),
                    description: "rust".into(),
                    date: "7d".into(),
                    salary: "120000".into(),
                }
            );

            reset(&store);
            let cleared = store.snapshot_untracked();
            assert!(cleared.role.is_empty() && cleared.location.is_empty());
            assert!(cleared.company.is_empty() && cleared.description.is_empty());
            assert_eq!(cleared.date, "7d");
            assert_eq!(cleared.salary, "120000");
        });
    }
}
