//! Cell-level normalization helpers.
//!
//! - **case**: lowercase passes and uppercase/trim folding
//! - **missing**: missing-value fill
//! - **canonical**: canonical map application

pub mod canonical;
pub mod case;
pub mod missing;

pub use canonical::{MapOutcome, apply_canonical_map};
pub use case::{lowercase_column, lowercase_text_columns, uppercase_trim, uppercase_trim_column};
pub use missing::fill_missing;
