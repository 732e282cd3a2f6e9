pub mod sample_jobs;
