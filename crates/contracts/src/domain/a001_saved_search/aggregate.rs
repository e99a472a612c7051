use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateId, EntityMetadata};
use crate::shared::filter::{FilterSet, SearchSnapshot};

pub const MAX_SEARCH_NAME_LEN: usize = 100;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedSearchId(pub i64);

impl SavedSearchId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for SavedSearchId {
    fn as_string(&self) -> String {
        self.0.as_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(SavedSearchId)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A named snapshot of filter criteria owned by one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSearch {
    pub id: SavedSearchId,
    pub user_id: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl SavedSearch {
    pub fn created_at(&self) -> DateTime<Utc> {
        self.metadata.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.metadata.updated_at
    }

    /// Filter values this search applies; absent fields become empty strings.
    pub fn snapshot(&self) -> SearchSnapshot {
        SearchSnapshot {
            role: self.title.clone().unwrap_or_default(),
            location: self.location.clone().unwrap_or_default(),
            company: self.company.clone().unwrap_or_default(),
            description: self.job_description.clone().unwrap_or_default(),
        }
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Payload of the "save search" mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSearchRequest {
    pub search_name: String,
    pub user_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub company: String,
}

impl SaveSearchRequest {
    /// Builds the request from the current filters. Only role, location and
    /// company are captured.
    pub fn from_filters(search_name: String, user_id: String, filters: &FilterSet) -> Self {
        Self {
            search_name,
            user_id,
            title: filters.role.clone(),
            location: filters.location.clone(),
            company: filters.company.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        let name = self.search_name.trim();
        if name.is_empty() {
            return Err("Search name is required".into());
        }
        if name.chars().count() > MAX_SEARCH_NAME_LEN {
            return Err(format!(
                "Search name must be at most {} characters",
                MAX_SEARCH_NAME_LEN
            ));
        }
        if self.user_id.trim().is_empty() {
            return Err("User id is required".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SavedSearch {
        SavedSearch {
            id: SavedSearchId(1),
            user_id: "u1".into(),
            name: "Remote Rust".into(),
            title: Some("Backend Engineer".into()),
            location: Some("Remote".into()),
            company: None,
            job_description: None,
            salary: None,
            metadata: EntityMetadata::new(),
        }
    }

    #[test]
    fn test_snapshot_defaults_missing_fields() {
        let snapshot = sample().snapshot();
        assert_eq!(snapshot.role, "Backend Engineer");
        assert_eq!(snapshot.location, "Remote");
        assert_eq!(snapshot.company, "");
        assert_eq!(snapshot.description, "");
    }

    #[test]
    fn test_saved_search_wire_format() {
        let json = r#"{
            "id": 7,
            "userId": "u1",
            "name": "Nights",
            "jobDescription": "rust",
            "createdAt": "2024-03-15T14:02:26Z",
            "updatedAt": "2024-03-15T14:02:26Z"
        }"#;
        let search: SavedSearch = serde_json::from_str(json).unwrap();
        assert_eq!(search.id, SavedSearchId(7));
        assert_eq!(search.job_description.as_deref(), Some("rust"));
        assert!(search.title.is_none());

        let value = serde_json::to_value(&search).unwrap();
        assert_eq!(value["userId"], "u1");
        assert!(value.get("title").is_none());
    }

    #[test]
    fn test_save_request_payload_is_exact() {
        let filters = FilterSet {
            role: "Engineer".into(),
            location: "NYC".into(),
            company: "Acme".into(),
            description: "ignored".into(),
            ..Default::default()
        };
        let request = SaveSearchRequest::from_filters("My Search".into(), "u1".into(), &filters);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "searchName": "My Search",
                "userId": "u1",
                "title": "Engineer",
                "location": "NYC",
                "company": "Acme"
            })
        );
    }

    #[test]
    fn test_save_request_validation() {
        let mut request =
            SaveSearchRequest::from_filters("   ".into(), "u1".into(), &FilterSet::default());
        assert!(request.validate().is_err());

        request.search_name = "x".repeat(MAX_SEARCH_NAME_LEN + 1);
        assert!(request.validate().is_err());

        request.search_name = "Fine".into();
        assert!(request.validate().is_ok());

        request.user_id = String::new();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_id_round_trips_through_string() {
        let id = SavedSearchId(42);
        assert_eq!(SavedSearchId::from_string(&id.as_string()), Ok(id));
        assert!(SavedSearchId::from_string("forty-two").is_err());
    }
}
