//! Header row cleanup.

use std::collections::{HashMap, HashSet};

/// Cleans raw header names so every column has a unique, non-empty name.
///
/// - a UTF-8 BOM on the first name is dropped
/// - empty names become `Unnamed: <index>`
/// - repeats get a numeric suffix: `Light`, `Light.1`, `Light.2`
pub fn dedupe_headers(raw: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut suffixes: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::with_capacity(raw.len());

    for (index, name) in raw.into_iter().enumerate() {
        let name = if index == 0 {
            name.trim_start_matches('\u{feff}').to_string()
        } else {
            name
        };
        let name = if name.is_empty() {
            format!("Unnamed: {index}")
        } else {
            name
        };

        if seen.insert(name.clone()) {
            names.push(name);
            continue;
        }

        let mut suffix = suffixes.get(&name).copied().unwrap_or(0);
        let candidate = loop {
            suffix += 1;
            let candidate = format!("{name}.{suffix}");
            if !seen.contains(&candidate) {
                break candidate;
            }
        };
        suffixes.insert(name, suffix);
        seen.insert(candidate.clone());
        names.push(candidate);
    }

    names
}
