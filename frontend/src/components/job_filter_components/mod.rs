pub mod job_filters;
pub mod job_list;
