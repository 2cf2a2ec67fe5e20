pub mod calendar;
pub mod footer;
pub mod header;
pub mod snapshot;
pub mod summary;
