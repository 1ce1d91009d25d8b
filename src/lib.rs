//! Rental marketplace core: the property catalog, search filters, the listing
//! wizard with photo staging, and the persisted login session.

pub mod catalog;
pub mod dashboard;
pub mod interest;
pub mod listing;
pub mod models;
pub mod search;
pub mod session;

pub use catalog::Catalog;
pub use session::Session;
