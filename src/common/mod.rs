//! Shared abstractions

pub mod traits;

pub use traits::TagRegistry;
