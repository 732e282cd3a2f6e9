//! Filter panel logic: option derivation and per-category selection.

use std::collections::HashSet;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::job_record::JobRecord;


/// Location checkboxes shown by the panel. Derived locations are reported
/// to the parent but never rendered.
pub const LOCATION_OPTIONS: [&str; 3] = ["Remote", "On-site", "Hybrid"];

/// Salary bucket labels. Labels only, job salaries are never bucketed.
pub const SALARY_RANGES: [&str; 6] = [
    "0k-50k",
    "50k-100k",
    "100k-150k",
    "150k-200k",
    "200k-250k",
    "250k+",
];


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterCategory {
    JobType,
    Location,
    Salary,
}

impl FilterCategory {
    /// Render order of the panel sections.
    pub const ALL: [FilterCategory; 3] = [Self::JobType, Self::Location, Self::Salary];

    pub fn key(&self) -> &'static str {
        match self {
            Self::JobType => "jobType",
            Self::Location => "location",
            Self::Salary => "salary",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::JobType => "Job Type",
            Self::Location => "Location",
            Self::Salary => "Salary",
        }
    }
}

impl Display for FilterCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseFilterCategoryError {
    Unknown(String),
}

impl Display for ParseFilterCategoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(s) => write!(f, "Unknown filter category: {:?}", s),
        }
    }
}

impl std::error::Error for ParseFilterCategoryError {}

impl FromStr for FilterCategory {
    type Err = ParseFilterCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterCategory::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| ParseFilterCategoryError::Unknown(s.to_string()))
    }
}


/// Keeps the first occurrence of every value, in input order.
pub fn dedup_first_seen<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}


/// Values offered per category, as reported to the parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct OptionSet {
    pub job_type: Vec<String>,
    pub location: Vec<String>,
    pub salary: Vec<String>,
}

impl OptionSet {
    /// Derives the option set from a job listing. Returns `None` for an
    /// empty listing: there is nothing to report yet.
    ///
    /// Records without a usable `job_type` or `candidate_required_location`
    /// are skipped for that category.
    pub fn derive(jobs: &[JobRecord]) -> Option<Self> {
        if jobs.is_empty() {
            return None;
        }
        Some(Self {
            job_type: dedup_first_seen(jobs.iter().filter_map(JobRecord::job_type_value)),
            location: dedup_first_seen(jobs.iter().filter_map(JobRecord::location_value)),
            salary: SALARY_RANGES.iter().map(|s| s.to_string()).collect(),
        })
    }

    pub fn values(&self, category: FilterCategory) -> &[String] {
        match category {
            FilterCategory::JobType => &self.job_type,
            FilterCategory::Location => &self.location,
            FilterCategory::Salary => &self.salary,
        }
    }

    /// Checkbox labels for one panel section.
    pub fn rendered(&self, category: FilterCategory) -> Vec<String> {
        match category {
            FilterCategory::JobType => self.job_type.clone(),
            FilterCategory::Location => LOCATION_OPTIONS.iter().map(|s| s.to_string()).collect(),
            FilterCategory::Salary => SALARY_RANGES.iter().map(|s| s.to_string()).collect(),
        }
    }
}


/// Values the user has checked, per category. A value appears at most once
/// in each category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectionState {
    job_type: Vec<String>,
    location: Vec<String>,
    salary: Vec<String>,
}

impl SelectionState {
    pub fn values(&self, category: FilterCategory) -> &[String] {
        match category {
            FilterCategory::JobType => &self.job_type,
            FilterCategory::Location => &self.location,
            FilterCategory::Salary => &self.salary,
        }
    }

    fn values_mut(&mut self, category: FilterCategory) -> &mut Vec<String> {
        match category {
            FilterCategory::JobType => &mut self.job_type,
            FilterCategory::Location => &mut self.location,
            FilterCategory::Salary => &mut self.salary,
        }
    }

    pub fn is_selected(&self, category: FilterCategory, value: &str) -> bool {
        self.values(category).iter().any(|v| v == value)
    }

    /// Adds `value` when absent, removes it when present. Returns whether
    /// the value is selected afterwards.
    pub fn toggle(&mut self, category: FilterCategory, value: &str) -> bool {
        let values = self.values_mut(category);
        if values.iter().any(|v| v == value) {
            values.retain(|v| v != value);
            false
        } else {
            values.push(value.to_string());
            true
        }
    }

    pub fn toggled(&self, category: FilterCategory, value: &str) -> Self {
        let mut next = self.clone();
        next.toggle(category, value);
        next
    }

    pub fn is_empty(&self) -> bool {
        self.selected_count() == 0
    }

    pub fn selected_count(&self) -> usize {
        FilterCategory::ALL.iter().map(|c| self.values(*c).len()).sum()
    }

    pub fn clear(&mut self) {
        for category in FilterCategory::ALL {
            self.values_mut(category).clear();
        }
    }
}


/// Hash of the job fields option derivation reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobsFingerprint(u64);

impl JobsFingerprint {
    pub fn of(jobs: &[JobRecord]) -> Self {
        let mut hasher = DefaultHasher::new();
        jobs.len().hash(&mut hasher);
        for job in jobs {
            job.job_type_value().hash(&mut hasher);
            job.location_value().hash(&mut hasher);
        }
        Self(hasher.finish())
    }
}

/// Re-derives options only when the listing content changes.
#[derive(Debug, Clone, Default)]
pub struct OptionsTracker {
    last_seen: Option<JobsFingerprint>,
}

impl OptionsTracker {
    /// Returns a fresh option set when `jobs` is non-empty and differs from
    /// the last listing that produced one. An empty listing leaves the
    /// tracker untouched.
    pub fn observe(&mut self, jobs: &[JobRecord]) -> Option<OptionSet> {
        if jobs.is_empty() {
            return None;
        }
        let fingerprint = JobsFingerprint::of(jobs);
        if self.last_seen == Some(fingerprint) {
            return None;
        }
        self.last_seen = Some(fingerprint);
        OptionSet::derive(jobs)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn sample_jobs() -> Vec<JobRecord> {
        vec![
            JobRecord::new("Full-time", "Remote"),
            JobRecord::new("Part-time", "Anywhere"),
            JobRecord::new("Full-time", "Remote"),
        ]
    }

    #[test]
    fn dedup_keeps_first_seen_order() {
        let values = ["b", "a", "b", "c", "a", "d"];
        assert_eq!(dedup_first_seen(values), vec!["b", "a", "c", "d"]);
        assert!(dedup_first_seen(Vec::<&str>::new()).is_empty());
    }

    #[test]
    fn derived_job_types_are_distinct_in_first_seen_order() {
        let jobs = vec![
            JobRecord::new("Contract", "USA"),
            JobRecord::new("Full-time", "Remote"),
            JobRecord::new("Contract", "Europe"),
            JobRecord::new("Internship", "USA"),
            JobRecord::new("Full-time", "Remote"),
        ];
        let options = OptionSet::derive(&jobs).unwrap();
        assert_eq!(options.job_type, vec!["Contract", "Full-time", "Internship"]);
        assert_eq!(options.location, vec!["USA", "Remote", "Europe"]);
        assert_eq!(options.salary, SALARY_RANGES.to_vec());
    }

    #[test]
    fn records_missing_fields_are_skipped() {
        let jobs = vec![
            JobRecord::default(),
            JobRecord::new("Freelance", ""),
            JobRecord { candidate_required_location: Some("Canada".to_string()), ..Default::default() },
        ];
        let options = OptionSet::derive(&jobs).unwrap();
        assert_eq!(options.job_type, vec!["Freelance"]);
        assert_eq!(options.location, vec!["Canada"]);
    }

    #[test]
    fn empty_listing_derives_nothing() {
        assert_eq!(OptionSet::derive(&[]), None);
        let mut tracker = OptionsTracker::default();
        assert_eq!(tracker.observe(&[]), None);
        assert_eq!(tracker.observe(&[]), None);
    }

    #[test]
    fn rendered_locations_and_salaries_are_fixed() {
        let options = OptionSet::derive(&sample_jobs()).unwrap();
        assert_eq!(options.rendered(FilterCategory::Location), vec!["Remote", "On-site", "Hybrid"]);
        assert_eq!(
            options.rendered(FilterCategory::Salary),
            vec!["0k-50k", "50k-100k", "100k-150k", "150k-200k", "200k-250k", "250k+"]
        );
        // derived locations are reported, not rendered
        assert_eq!(options.values(FilterCategory::Location), ["Remote", "Anywhere"]);

        let empty = OptionSet::default();
        assert!(empty.rendered(FilterCategory::JobType).is_empty());
        assert_eq!(empty.rendered(FilterCategory::Location), LOCATION_OPTIONS.to_vec());
    }

    #[test]
    fn toggling_twice_restores_selection() {
        let mut selection = SelectionState::default();
        selection.toggle(FilterCategory::Salary, "50k-100k");
        for category in FilterCategory::ALL {
            for value in ["50k-100k", "Remote", "Full-time"] {
                let before = selection.clone();
                let after = selection.toggled(category, value).toggled(category, value);
                assert_eq!(before, after, "{category} / {value}");
            }
        }
    }

    #[test]
    fn toggle_sequences_never_duplicate_values() {
        let values = ["Remote", "On-site", "Hybrid", "Full-time"];
        let mut selection = SelectionState::default();
        // deterministic pseudo-random walk over (category, value) pairs
        let mut seed: u64 = 17;
        for _ in 0..500 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let category = FilterCategory::ALL[(seed >> 33) as usize % 3];
            let value = values[(seed >> 40) as usize % values.len()];
            let now_selected = selection.toggle(category, value);
            assert_eq!(now_selected, selection.is_selected(category, value));
            for c in FilterCategory::ALL {
                let v = selection.values(c);
                assert_eq!(dedup_first_seen(v.iter().map(String::as_str)).len(), v.len());
            }
        }
    }

    #[test]
    fn clear_empties_every_category() {
        let mut selection = SelectionState::default()
            .toggled(FilterCategory::JobType, "Full-time")
            .toggled(FilterCategory::Location, "Hybrid");
        assert_eq!(selection.selected_count(), 2);
        selection.clear();
        assert!(selection.is_empty());
        assert_eq!(selection, SelectionState::default());
    }

    #[test]
    fn tracker_skips_logically_equal_listings() {
        let mut tracker = OptionsTracker::default();
        let jobs = sample_jobs();
        assert!(tracker.observe(&jobs).is_some());
        assert_eq!(tracker.observe(&jobs.clone()), None);

        // fields the derivation does not read are ignored
        let mut retitled = jobs.clone();
        retitled[0].title = Some("Senior Engineer".to_string());
        assert_eq!(tracker.observe(&retitled), None);

        let mut changed = jobs.clone();
        changed.push(JobRecord::new("Contract", "Remote"));
        let options = tracker.observe(&changed).unwrap();
        assert_eq!(options.job_type, vec!["Full-time", "Part-time", "Contract"]);
    }

    #[test]
    fn options_then_selection_scenario() {
        let mut tracker = OptionsTracker::default();
        let options = tracker.observe(&sample_jobs()).unwrap();
        assert_eq!(options.job_type, vec!["Full-time", "Part-time"]);

        let mut selection = SelectionState::default();
        selection.toggle(FilterCategory::JobType, "Full-time");
        assert_eq!(
            serde_json::to_value(&selection).unwrap(),
            serde_json::json!({"jobType": ["Full-time"], "location": [], "salary": []})
        );

        selection.toggle(FilterCategory::JobType, "Full-time");
        assert_eq!(
            serde_json::to_value(&selection).unwrap(),
            serde_json::json!({"jobType": [], "location": [], "salary": []})
        );
    }

    #[test]
    fn category_keys_round_trip_through_from_str() {
        for category in FilterCategory::ALL {
            assert_eq!(category.key().parse::<FilterCategory>(), Ok(category));
        }
        assert_eq!(
            "remote".parse::<FilterCategory>(),
            Err(ParseFilterCategoryError::Unknown("remote".to_string()))
        );
        assert_eq!(serde_json::to_string(&FilterCategory::JobType).unwrap(), "\"jobType\"");
    }
}
