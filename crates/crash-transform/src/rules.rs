//! Per-column canonicalization rules.
//!
//! A rule runs three steps against one column, in order: optional case
//! folding of present values, optional fill of missing cells, then the
//! canonical map lookup.

use crash_model::{CanonicalMap, ColumnKind, Table};
use tracing::debug;

use crate::error::Result;
use crate::normalization::{
    apply_canonical_map, fill_missing, lowercase_column, uppercase_trim_column,
};
use crate::report::PassStats;
use crate::vocabulary::{
    COLLISION_TYPE_FILL, ROUTE_TYPE_FILL, TRAFFIC_CONTROL_FILL, Vocabulary, collision_type_map,
    light_map, route_type_map, traffic_control_map,
};

/// Case folding applied to present values before the lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseFold {
    #[default]
    Unchanged,
    Lower,
    /// Uppercase, then trim surrounding whitespace.
    UpperTrim,
}

#[derive(Debug, Clone)]
pub struct ColumnRule {
    pub map: CanonicalMap,
    pub fold: CaseFold,
    pub fill: Option<String>,
}

impl ColumnRule {
    pub fn new(map: CanonicalMap) -> Self {
        Self {
            map,
            fold: CaseFold::Unchanged,
            fill: None,
        }
    }

    #[must_use]
    pub fn with_fold(mut self, fold: CaseFold) -> Self {
        self.fold = fold;
        self
    }

    #[must_use]
    pub fn with_fill(mut self, literal: impl Into<String>) -> Self {
        self.fill = Some(literal.into());
        self
    }

    pub fn column(&self) -> &str {
        self.map.column()
    }

    pub fn route_type(map: CanonicalMap) -> Self {
        Self::new(map).with_fill(ROUTE_TYPE_FILL)
    }

    pub fn light(map: CanonicalMap) -> Self {
        Self::new(map).with_fold(CaseFold::Lower)
    }

    pub fn traffic_control(map: CanonicalMap) -> Self {
        Self::new(map)
            .with_fold(CaseFold::UpperTrim)
            .with_fill(TRAFFIC_CONTROL_FILL)
    }

    pub fn collision_type(map: CanonicalMap) -> Self {
        Self::new(map).with_fill(COLLISION_TYPE_FILL)
    }
}

/// Rules for a vocabulary in pipeline order.
pub fn standard_rules(vocabulary: Vocabulary) -> Vec<ColumnRule> {
    vec![
        ColumnRule::route_type(vocabulary.route_type),
        ColumnRule::light(vocabulary.light),
        ColumnRule::traffic_control(vocabulary.traffic_control),
        ColumnRule::collision_type(vocabulary.collision_type),
    ]
}

/// Applies one rule to its column.
///
/// # Errors
///
/// Returns an error if the rule's column is not in the table.
pub fn apply_rule(table: &mut Table, rule: &ColumnRule) -> Result<PassStats> {
    let column = table.require_column_mut(rule.column())?;

    let recased = match rule.fold {
        CaseFold::Unchanged => 0,
        CaseFold::Lower => lowercase_column(column),
        CaseFold::UpperTrim => uppercase_trim_column(column),
    };
    let filled = rule
        .fill
        .as_deref()
        .map_or(0, |literal| fill_missing(column, literal));
    let outcome = apply_canonical_map(column, &rule.map);

    // Fill and lookup can turn an empty or numeric column into text.
    let kind = ColumnKind::infer(column.values());
    column.set_kind(kind);

    if !outcome.unmapped.is_empty() {
        debug!(
            column = rule.column(),
            cells = outcome.unmapped_cells,
            values = ?outcome.unmapped,
            "values without a canonical label kept as-is"
        );
    }

    Ok(PassStats {
        column: rule.column().to_string(),
        filled,
        recased,
        rewritten: outcome.rewritten,
        unmapped_cells: outcome.unmapped_cells,
        unmapped: outcome.unmapped,
    })
}

/// Fills missing route types with `unknown` and collapses route spellings.
pub fn canonicalize_route_type(table: &mut Table) -> Result<PassStats> {
    apply_rule(table, &ColumnRule::route_type(route_type_map()))
}

/// Lowercases lighting conditions and collapses their variants.
pub fn canonicalize_light(table: &mut Table) -> Result<PassStats> {
    apply_rule(table, &ColumnRule::light(light_map()))
}

/// Uppercases and trims device names, fills `UNKNOWN`, and collapses variants.
pub fn canonicalize_traffic_control(table: &mut Table) -> Result<PassStats> {
    apply_rule(table, &ColumnRule::traffic_control(traffic_control_map()))
}

/// Fills missing collision types with `unknown` and groups them into categories.
pub fn canonicalize_collision_type(table: &mut Table) -> Result<PassStats> {
    apply_rule(table, &ColumnRule::collision_type(collision_type_map()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crash_model::{CellValue, Column};

    fn single(name: &str, values: &[Option<&str>]) -> Table {
        Table::new(vec![Column::from_options(name, values.iter().copied())]).unwrap()
    }

    fn cells(table: &Table, name: &str) -> Vec<Option<String>> {
        table
            .column(name)
            .unwrap()
            .values()
            .iter()
            .map(|cell| cell.as_str().map(str::to_string))
            .collect()
    }

    #[test]
    fn route_type_fills_then_maps() {
        let mut table = single(
            "Route.Type",
            &[None, Some("county route"), Some("government (state)"), Some("interstate (state)")],
        );
        let stats = canonicalize_route_type(&mut table).unwrap();

        assert_eq!(
            cells(&table, "Route.Type"),
            vec![
                Some("unknown".to_string()),
                Some("county".to_string()),
                Some("government".to_string()),
                Some("interstate (state)".to_string()),
            ]
        );
        assert_eq!(stats.filled, 1);
        assert_eq!(stats.rewritten, 2);
        assert_eq!(stats.unmapped_cells, 2);
    }

    #[test]
    fn light_keeps_missing() {
        let mut table = single("Light", &[Some("DARK NO LIGHTS"), None, Some("Foggy")]);
        let stats = canonicalize_light(&mut table).unwrap();

        assert_eq!(
            cells(&table, "Light"),
            vec![
                Some("dark - not lighted".to_string()),
                None,
                Some("foggy".to_string())
            ]
        );
        assert_eq!(stats.filled, 0);
        assert_eq!(stats.recased, 2);
    }

    #[test]
    fn traffic_control_trims_and_fills_uppercase() {
        let mut table = single(
            "Traffic.Control",
            &[Some(" no control "), None, Some("school zone"), Some("other")],
        );
        canonicalize_traffic_control(&mut table).unwrap();

        assert_eq!(
            cells(&table, "Traffic.Control"),
            vec![
                Some("NO CONTROLS".to_string()),
                Some("UNKNOWN".to_string()),
                Some("SCHOOL ZONE SIGN".to_string()),
                Some("UNKNOWN".to_string()),
            ]
        );
    }

    #[test]
    fn blank_traffic_control_is_filled() {
        let mut table = single("Traffic.Control", &[Some("   "), Some("Stop Sign")]);
        let stats = canonicalize_traffic_control(&mut table).unwrap();

        assert_eq!(
            cells(&table, "Traffic.Control"),
            vec![Some("UNKNOWN".to_string()), Some("STOP SIGN".to_string())]
        );
        assert_eq!(stats.filled, 1);
    }

    #[test]
    fn collision_type_groups_descriptions() {
        let mut table = single(
            "Collision.Type",
            &[Some("head on left turn"), None, Some("same dir both left turn"), Some("jackknife")],
        );
        canonicalize_collision_type(&mut table).unwrap();

        assert_eq!(
            cells(&table, "Collision.Type"),
            vec![
                Some("Head-On Collisions".to_string()),
                Some("Unknown".to_string()),
                Some("Sideswipe Collisions".to_string()),
                Some("jackknife".to_string()),
            ]
        );
    }

    #[test]
    fn filled_empty_column_becomes_text() {
        let mut table = single("Collision.Type", &[None, None]);
        canonicalize_collision_type(&mut table).unwrap();

        let column = table.column("Collision.Type").unwrap();
        assert_eq!(column.kind(), ColumnKind::Text);
        assert_eq!(column.values()[0], CellValue::text("Unknown"));
    }

    #[test]
    fn missing_column_is_an_error() {
        let mut table = single("Light", &[Some("dusk")]);
        assert!(canonicalize_route_type(&mut table).is_err());
    }
}
