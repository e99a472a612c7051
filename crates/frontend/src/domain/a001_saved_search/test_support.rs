//! In-memory stand-ins for the filter store and the toast service.

use std::cell::RefCell;

use contracts::domain::a001_saved_search::aggregate::{SavedSearch, SavedSearchId};
use contracts::domain::common::EntityMetadata;
use contracts::shared::filter::FilterSet;

use crate::layout::notification_service::{Notifier, Severity};
use crate::shared::filters::FilterSink;

pub fn search(id: i64, name: &str) -> SavedSearch {
    SavedSearch {
        id: SavedSearchId(id),
        user_id: "u1".into(),
        name: name.into(),
        title: Some("Engineer".into()),
        location: Some("Remote".into()),
        company: None,
        job_description: None,
        salary: None,
        metadata: EntityMetadata::new(),
    }
}

#[derive(Default)]
pub struct RecordingFilters {
    values: RefCell<FilterSet>,
}

impl RecordingFilters {
    pub fn with_values(role: &str, location: &str, company: &str, description: &str) -> Self {
        Self {
            values: RefCell::new(FilterSet {
                role: role.into(),
                location: location.into(),
                company: company.into(),
                description: description.into(),
                ..Default::default()
            }),
        }
    }

    pub fn current(&self) -> FilterSet {
        self.values.borrow().clone()
    }

    /// Date and salary are never touched by a saved search
    pub fn set_unbound(&self, date: &str, salary: &str) {
        let mut values = self.values.borrow_mut();
        values.date = date.into();
        values.salary = salary.into();
    }
}

impl FilterSink for RecordingFilters {
    fn set_role(&self, value: String) {
        self.values.borrow_mut().role = value;
    }

    fn set_location(&self, value: String) {
        self.values.borrow_mut().location = value;
    }

    fn set_company(&self, value: String) {
        self.values.borrow_mut().company = value;
    }

    fn set_description(&self, value: String) {
        self.values.borrow_mut().description = value;
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<(Severity, String)>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<(Severity, String)> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        self.messages.borrow_mut().push((severity, message.to_string()));
    }
}
