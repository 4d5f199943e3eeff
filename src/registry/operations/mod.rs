//! Registry operations grouped by resource

pub mod tag_operations;

pub use tag_operations::TagOperations;
