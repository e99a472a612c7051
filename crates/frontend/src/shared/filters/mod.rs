//! Shared job search filters: the reactive store and its input widgets.

pub mod inputs;
pub mod store;
pub mod tags;

pub use store::{use_filters, FilterSink, FilterStore};
