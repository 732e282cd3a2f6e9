//! Job posting records as delivered by the job listing feed.

use serde::{Deserialize, Serialize};


/// A single job posting. Fields the feed omits are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JobRecord {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub company_name: Option<String>,
    pub url: Option<String>,
    pub job_type: Option<String>,
    pub candidate_required_location: Option<String>,
    pub salary: Option<String>,
    pub publication_date: Option<String>,
}

impl JobRecord {
    pub fn new(job_type: &str, candidate_required_location: &str) -> Self {
        Self {
            job_type: Some(job_type.to_string()),
            candidate_required_location: Some(candidate_required_location.to_string()),
            ..Default::default()
        }
    }

    /// Job type usable as a filter option; blank values count as missing.
    pub fn job_type_value(&self) -> Option<&str> {
        non_blank(self.job_type.as_deref())
    }

    /// Required candidate location usable as a filter option.
    pub fn location_value(&self) -> Option<&str> {
        non_blank(self.candidate_required_location.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
