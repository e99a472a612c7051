use contracts::domain::a002_job_posting::aggregate::JobPosting;
use contracts::shared::filter::FilterSet;

use crate::shared::api_utils::get_json;

/// Query path for `filters`, every field included even when empty
pub fn jobs_path(filters: &FilterSet) -> Result<String, String> {
    let query =
        serde_qs::to_string(filters).map_err(|e| format!("Failed to encode filters: {}", e))?;
    Ok(format!("/api/jobs?{}", query))
}

/// GET /api/jobs
pub async fn fetch_jobs(filters: &FilterSet) -> Result<Vec<JobPosting>, String> {
    get_json(&jobs_path(filters)?, None).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jobs_path_encodes_filters() {
        let filters = FilterSet {
            role: "Backend Engineer".into(),
            location: "Remote".into(),
            date: "7d".into(),
            ..Default::default()
        };
        let path = jobs_path(&filters).unwrap();
        assert!(path.starts_with("/api/jobs?"));
        assert!(path.contains("role=Backend+Engineer") || path.contains("role=Backend%20Engineer"));
        assert!(path.contains("location=Remote"));
        assert!(path.contains("date=7d"));
        assert!(path.contains("salary="));
    }
}
