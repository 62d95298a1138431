// Public modules
pub mod chain;
pub mod defaults;
pub mod error;
pub mod format;
pub mod json;
pub mod matcher;
pub mod merge;
pub mod ordinal;
pub mod pluck;
pub mod uid;
pub mod upsert;

// Re-export the function surface for convenience
pub use chain::{chain, Chain};
pub use error::{Error, ErrorCode, Result};
pub use format::{format, format_named, format_positional, FormatParams};
pub use matcher::{MatchesProperty, Predicate};
pub use merge::{immutable_merge, merge_into};
pub use ordinal::{ordinal, with_ordinal};
pub use pluck::{pluck, pluck_values};
pub use uid::{is_uuid, parse_uuid, uuid, uuid_with, UuidGenerator};
pub use upsert::{reject, upsert};
