//! Crash record category canonicalization.
//!
//! This crate provides the transformation logic of the normalizer:
//!
//! - **vocabulary**: canonical label tables for the four category columns
//! - **normalization**: case folding, missing-value fill, and map application
//! - **rules**: per-column rules combining the above
//! - **pipeline**: the [`Normalizer`] that runs every pass in order

pub mod error;
pub mod normalization;
pub mod pipeline;
pub mod report;
pub mod rules;
pub mod vocabulary;

pub use error::{Result, TransformError};
pub use normalization::{apply_canonical_map, fill_missing, lowercase_text_columns, uppercase_trim};
pub use pipeline::Normalizer;
pub use report::{NormalizationReport, PassStats};
pub use rules::{
    CaseFold, ColumnRule, apply_rule, canonicalize_collision_type, canonicalize_light,
    canonicalize_route_type, canonicalize_traffic_control, standard_rules,
};
pub use vocabulary::{
    COLLISION_TYPE_COLUMN, LIGHT_COLUMN, REQUIRED_COLUMNS, ROUTE_TYPE_COLUMN,
    TRAFFIC_CONTROL_COLUMN, Vocabulary, collision_type_map, light_map, route_type_map,
    traffic_control_map,
};
