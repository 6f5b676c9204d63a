//! finsight-ingest: statement CSV acquisition and the record normalizer.

pub mod csv_source;
pub mod normalizer;
pub mod types;

pub use csv_source::{load_statement, read_rows, read_rows_from};
pub use normalizer::{normalize, normalize_with, parse_amount};
pub use types::{DatePolicy, NormalizeOptions, Normalized, SkipReason, SkippedRow};
