//! Canonical label tables for the crash record category columns.
//!
//! Tables are written in the casing they are maintained in; every output label
//! is lowercased by the final pass of the pipeline.

use crash_model::{CanonicalMap, MatchMode};

pub const ROUTE_TYPE_COLUMN: &str = "Route.Type";
pub const LIGHT_COLUMN: &str = "Light";
pub const TRAFFIC_CONTROL_COLUMN: &str = "Traffic.Control";
pub const COLLISION_TYPE_COLUMN: &str = "Collision.Type";

pub const ROUTE_TYPE_FILL: &str = "unknown";
pub const TRAFFIC_CONTROL_FILL: &str = "UNKNOWN";
pub const COLLISION_TYPE_FILL: &str = "unknown";

/// Columns every input file must carry.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    ROUTE_TYPE_COLUMN,
    LIGHT_COLUMN,
    TRAFFIC_CONTROL_COLUMN,
    COLLISION_TYPE_COLUMN,
];

/// Route type spellings, matched after the first lowercase pass.
pub const ROUTE_TYPE_SYNONYMS: &[(&str, &str)] = &[
    ("maryland (state) route", "maryland (state)"),
    ("government (state)", "government"),
    ("government route", "government"),
    ("county route", "county"),
];

/// Lighting conditions, matched case-insensitively.
pub const LIGHT_SYNONYMS: &[(&str, &str)] = &[
    ("DAYLIGHT", "DAYLIGHT"),
    ("DARK LIGHTS ON", "DARK - LIGHTED"),
    ("DARK - LIGHTED", "DARK - LIGHTED"),
    ("DARK NO LIGHTS", "DARK - NOT LIGHTED"),
    ("DARK - NOT LIGHTED", "DARK - NOT LIGHTED"),
    ("DARK -- UNKNOWN LIGHTING", "DARK - UNKNOWN LIGHTING"),
    ("DARK - UNKNOWN LIGHTING", "DARK - UNKNOWN LIGHTING"),
    ("DAWN", "DAWN"),
    ("DUSK", "DUSK"),
    ("OTHER", "UNKNOWN"),
    ("UNKNOWN", "UNKNOWN"),
];

/// Traffic control devices, matched after uppercasing and trimming.
pub const TRAFFIC_CONTROL_SYNONYMS: &[(&str, &str)] = &[
    ("NO CONTROLS", "NO CONTROLS"),
    ("NO CONTROL", "NO CONTROLS"),
    ("STOP SIGN", "STOP SIGN"),
    ("TRAFFIC SIGNAL", "TRAFFIC SIGNAL"),
    ("TRAFFIC CONTROL SIGNAL", "TRAFFIC SIGNAL"),
    ("FLASHING TRAFFIC SIGNAL", "FLASHING TRAFFIC SIGNAL"),
    ("FLASHING TRAFFIC CONTROL SIGNAL", "FLASHING TRAFFIC SIGNAL"),
    ("YIELD SIGN", "YIELD SIGN"),
    ("PERSON", "PERSON"),
    (
        "PERSON (INCLUDING FLAGGER, LAW ENFORCEMENT, CROSSING GUARD, ETC.)",
        "PERSON",
    ),
    (
        "PERSON (INCLUDING FLAGGER, LAW ENFORCEMENT, CROSSING GUARD, ETC.",
        "PERSON",
    ),
    ("PEDESTRIAN CROSSING", "PEDESTRIAN CROSSING"),
    ("PEDESTRIAN CROSSING SIGN", "PEDESTRIAN CROSSING"),
    ("SCHOOL ZONE SIGN DEVICE", "SCHOOL ZONE SIGN"),
    ("SCHOOL ZONE SIGN", "SCHOOL ZONE SIGN"),
    ("SCHOOL ZONE", "SCHOOL ZONE SIGN"),
    ("WARNING SIGN", "WARNING SIGN"),
    ("OTHER WARNING SIGN", "WARNING SIGN"),
    ("CURVE AHEAD WARNING SIGN", "WARNING SIGN"),
    ("INTERSECTION AHEAD WARNING SIGN", "WARNING SIGN"),
    ("REDUCE SPEED AHEAD WARNING SIGN", "WARNING SIGN"),
    ("OTHER SIGNAL", "OTHER SIGNAL"),
    ("RAMP METER SIGNAL", "OTHER SIGNAL"),
    ("LANE USE CONTROL SIGNAL", "OTHER SIGNAL"),
    ("RAILWAY CROSSING DEVICE", "RAILROAD CROSSING DEVICE"),
    (
        "FLASHING RAILROAD CROSSING SIGNAL (MAY INCLUDE GATES)",
        "RAILROAD CROSSING DEVICE",
    ),
    (
        "OTHER PAVEMENT MARKING (EXCLUDING EDGELINES, CENTERLINES, OR LANE LINES)",
        "OTHER PAVEMENT MARKING",
    ),
    ("BICYCLE CROSSING SIGN", "BICYCLE CROSSING SIGN"),
    ("OTHER", "UNKNOWN"),
    ("UNKNOWN", "UNKNOWN"),
];

/// Collision descriptions grouped into seven categories plus `Unknown`.
///
/// `angle` and `angle meets left head on` are head-on collisions while the
/// other `angle meets ...` descriptions are turning collisions.
pub const COLLISION_TYPE_SYNONYMS: &[(&str, &str)] = &[
    ("same dir rear end", "Same Direction Collisions"),
    ("same dir rend left turn", "Same Direction Collisions"),
    ("same dir rend right turn", "Same Direction Collisions"),
    ("same direction", "Same Direction Collisions"),
    ("same direction left turn", "Same Direction Collisions"),
    ("same direction right turn", "Same Direction Collisions"),
    ("opposite direction sideswipe", "Opposite Direction Collisions"),
    ("opposite dir both left turn", "Opposite Direction Collisions"),
    ("sideswipe, same direction", "Sideswipe Collisions"),
    ("sideswipe, opposite direction", "Sideswipe Collisions"),
    ("head on", "Head-On Collisions"),
    ("head on left turn", "Head-On Collisions"),
    ("angle", "Head-On Collisions"),
    ("angle meets left head on", "Head-On Collisions"),
    ("angle meets left turn", "Turning Collisions"),
    ("angle meets right turn", "Turning Collisions"),
    ("single vehicle", "Single Vehicle Collisions"),
    ("straight movement angle", "Single Vehicle Collisions"),
    ("front to rear", "Front/Rear Collisions"),
    ("rear to side", "Front/Rear Collisions"),
    ("rear to rear", "Front/Rear Collisions"),
    ("front to front", "Front/Rear Collisions"),
    ("same dir both left turn", "Sideswipe Collisions"),
    ("same direction sideswipe", "Sideswipe Collisions"),
    ("unknown", "Unknown"),
    ("other", "Unknown"),
];

pub fn route_type_map() -> CanonicalMap {
    CanonicalMap::from_pairs(ROUTE_TYPE_COLUMN, MatchMode::Exact, ROUTE_TYPE_SYNONYMS)
}

pub fn light_map() -> CanonicalMap {
    CanonicalMap::from_pairs(LIGHT_COLUMN, MatchMode::CaseInsensitive, LIGHT_SYNONYMS)
}

pub fn traffic_control_map() -> CanonicalMap {
    CanonicalMap::from_pairs(
        TRAFFIC_CONTROL_COLUMN,
        MatchMode::Exact,
        TRAFFIC_CONTROL_SYNONYMS,
    )
}

pub fn collision_type_map() -> CanonicalMap {
    CanonicalMap::from_pairs(
        COLLISION_TYPE_COLUMN,
        MatchMode::Exact,
        COLLISION_TYPE_SYNONYMS,
    )
}

/// The full set of canonical maps, one per category column.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub route_type: CanonicalMap,
    pub light: CanonicalMap,
    pub traffic_control: CanonicalMap,
    pub collision_type: CanonicalMap,
}

impl Vocabulary {
    pub fn standard() -> Self {
        Self {
            route_type: route_type_map(),
            light: light_map(),
            traffic_control: traffic_control_map(),
            collision_type: collision_type_map(),
        }
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_synonym_resolves_to_its_label() {
        let tables = [
            (route_type_map(), ROUTE_TYPE_SYNONYMS),
            (light_map(), LIGHT_SYNONYMS),
            (traffic_control_map(), TRAFFIC_CONTROL_SYNONYMS),
            (collision_type_map(), COLLISION_TYPE_SYNONYMS),
        ];
        for (map, synonyms) in tables {
            for (raw, canonical) in synonyms {
                let found = map.lookup(raw).map(str::to_lowercase);
                assert_eq!(found, Some(canonical.to_lowercase()), "{}: {raw}", map.column());
            }
        }
    }

    #[test]
    fn light_keys_fold_case() {
        let map = light_map();
        assert_eq!(map.lookup("dark -- unknown lighting"), Some("dark - unknown lighting"));
        assert_eq!(map.lookup("Other"), Some("unknown"));
        assert_eq!(map.lookup("foggy"), None);
    }

    #[test]
    fn angle_descriptions_split_between_categories() {
        let map = collision_type_map();
        assert_eq!(map.lookup("angle"), Some("Head-On Collisions"));
        assert_eq!(map.lookup("angle meets left head on"), Some("Head-On Collisions"));
        assert_eq!(map.lookup("angle meets left turn"), Some("Turning Collisions"));
        assert_eq!(map.lookup("angle meets right turn"), Some("Turning Collisions"));
    }
}
