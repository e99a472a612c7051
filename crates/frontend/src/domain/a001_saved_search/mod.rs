//! Saved searches: the directory client, the selection logic that binds a
//! saved search to the filter store, and the save flow.

pub mod api;
pub mod directory;
pub mod save_flow;
pub mod selection;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_support;
