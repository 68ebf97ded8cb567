//! Custom extractors for Axum handlers.

pub mod numeric_path;

pub use numeric_path::NumericPath;
