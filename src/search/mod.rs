pub mod filter;
pub mod types;

pub use filter::{filter, SearchResults};
pub use types::FilterCriteria;
