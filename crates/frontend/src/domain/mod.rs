pub mod a001_saved_search;
pub mod a002_job_posting;
