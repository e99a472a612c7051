//! Job listing: the query client and the result list.

pub mod api;
pub mod ui;
