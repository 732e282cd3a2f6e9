//! Bundled job listing used to populate the board.

use anyhow::Context;
use jobboard_common::job_record::JobRecord;
use serde::Deserialize;

const SAMPLE_JOBS_JSON: &str = include_str!("../../assets/sample_jobs.json");

#[derive(Debug, Deserialize)]
struct JobFeed {
    #[serde(default)]
    jobs: Vec<JobRecord>,
}

/// Parses a feed document shaped like `{"jobs": [...]}`.
pub fn parse_job_feed(raw: &str) -> anyhow::Result<Vec<JobRecord>> {
    let feed: JobFeed = serde_json::from_str(raw).context("job feed is not valid JSON")?;
    Ok(feed.jobs)
}

pub fn load_sample_jobs() -> anyhow::Result<Vec<JobRecord>> {
    parse_job_feed(SAMPLE_JOBS_JSON).context("failed to load bundled sample jobs")
}


#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_common::job_filters::OptionSet;

    #[test]
    fn bundled_sample_jobs_parse() {
        let jobs = load_sample_jobs().unwrap();
        assert!(!jobs.is_empty());
        let options = OptionSet::derive(&jobs).unwrap();
        assert!(!options.job_type.is_empty());
        assert!(options.job_type.len() < jobs.len());
    }

    #[test]
    fn missing_jobs_key_is_an_empty_feed() {
        assert!(parse_job_feed(r#"{"job-count": 0}"#).unwrap().is_empty());
    }

    #[test]
    fn malformed_feed_reports_context() {
        let err = parse_job_feed("{\"jobs\": [").unwrap_err();
        assert!(format!("{err:#}").starts_with("job feed is not valid JSON"));
    }
}
