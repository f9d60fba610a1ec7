//! The normalizer pipeline.
//!
//! Passes run strictly in this order:
//!
//! 1. lowercase every text column
//! 2. one [`ColumnRule`] per category column (route type, light, traffic
//!    control, collision type)
//! 3. lowercase every text column again, so canonical labels kept in mixed
//!    case end up lowercase

use std::time::Instant;

use crash_model::Table;
use tracing::{debug, info, info_span};

use crate::error::{Result, TransformError};
use crate::normalization::lowercase_text_columns;
use crate::report::NormalizationReport;
use crate::rules::{ColumnRule, apply_rule, standard_rules};
use crate::vocabulary::Vocabulary;

#[derive(Debug, Clone)]
pub struct Normalizer {
    rules: Vec<ColumnRule>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    /// Normalizer with the standard crash record vocabulary.
    pub fn new() -> Self {
        Self::with_vocabulary(Vocabulary::standard())
    }

    pub fn with_vocabulary(vocabulary: Vocabulary) -> Self {
        Self::with_rules(standard_rules(vocabulary))
    }

    pub fn with_rules(rules: Vec<ColumnRule>) -> Self {
        Self { rules }
    }

    pub fn required_columns(&self) -> Vec<&str> {
        self.rules.iter().map(ColumnRule::column).collect()
    }

    /// Checks that every rule's column is present.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::MissingColumns`] naming every absent column.
    pub fn validate(&self, table: &Table) -> Result<()> {
        let missing = table.missing_columns(&self.required_columns());
        if missing.is_empty() {
            Ok(())
        } else {
            Err(TransformError::MissingColumns { columns: missing })
        }
    }

    /// Normalizes the table in place.
    ///
    /// The table is validated before any cell is touched, so a schema error
    /// leaves it unchanged. Row count and row order never change.
    pub fn run(&self, table: &mut Table) -> Result<NormalizationReport> {
        self.validate(table)?;

        let span = info_span!("normalize", rows = table.height(), columns = table.width());
        let _guard = span.enter();
        let start = Instant::now();

        let initial_lowercased = lowercase_text_columns(table);
        debug!(cells = initial_lowercased, "initial lowercase pass");

        let mut passes = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            let stats = apply_rule(table, rule)?;
            debug!(
                column = %stats.column,
                filled = stats.filled,
                recased = stats.recased,
                rewritten = stats.rewritten,
                unmapped = stats.unmapped_cells,
                "column canonicalized"
            );
            passes.push(stats);
        }

        let final_lowercased = lowercase_text_columns(table);
        debug!(cells = final_lowercased, "final lowercase pass");

        let report = NormalizationReport {
            rows: table.height(),
            columns: table.width(),
            initial_lowercased,
            passes,
            final_lowercased,
        };
        info!(
            rows = report.rows,
            filled = report.total_filled(),
            rewritten = report.total_rewritten(),
            unmapped = report.total_unmapped(),
            duration_ms = start.elapsed().as_millis(),
            "normalization complete"
        );
        Ok(report)
    }
}
