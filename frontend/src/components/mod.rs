pub mod error_boundary;
pub mod job_filter_components;
