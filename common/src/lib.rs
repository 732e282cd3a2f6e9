//! Common library exports: job records and filter panel logic.

extern crate serde;


pub mod job_record;
pub mod job_filters;
