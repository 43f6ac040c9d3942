use serde_json::{json, Map, Value};

use crate::error::Result;

/// Every key a render configuration mapping must carry
pub const REQUIRED_KEYS: [&str; 11] = [
    "padding",
    "opacity",
    "points",
    "distance_threshold",
    "show_confidence",
    "font_size",
    "font_family",
    "font_weight",
    "min_branch_length",
    "max_branch_length",
    "default_length",
];

/// Validated rendering options for a tree page.
///
/// Only `show_confidence` and the three branch lengths are coerced. The other
/// fields are emitted into the page exactly as the caller supplied them, so a
/// string `points` stays a string. Field names match the snake_case keys of
/// the input mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub padding: Value,
    pub opacity: Value,
    /// Points sampled per node when drawing group hulls
    pub points: Value,
    pub distance_threshold: Value,
    pub show_confidence: bool,
    pub font_size: Value,
    pub font_family: Value,
    pub font_weight: Value,
    pub min_branch_length: f64,
    pub max_branch_length: f64,
    pub default_length: f64,
}

impl RenderConfig {
    /// Build a config from a raw mapping, coercing the typed fields.
    /// Fails with every missing key at once, or on the first value that cannot be coerced.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self> {
        crate::parser::parse_render_config(map)
    }

    /// The config as a snake_case mapping, suitable for layering overrides on top
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("padding".into(), self.padding.clone());
        map.insert("opacity".into(), self.opacity.clone());
        map.insert("points".into(), self.points.clone());
        map.insert("distance_threshold".into(), self.distance_threshold.clone());
        map.insert("show_confidence".into(), Value::Bool(self.show_confidence));
        map.insert("font_size".into(), self.font_size.clone());
        map.insert("font_family".into(), self.font_family.clone());
        map.insert("font_weight".into(), self.font_weight.clone());
        map.insert("min_branch_length".into(), Value::from(self.min_branch_length));
        map.insert("max_branch_length".into(), Value::from(self.max_branch_length));
        map.insert("default_length".into(), Value::from(self.default_length));
        map
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            padding: json!(35),
            opacity: json!(0.3),
            points: json!(100),
            distance_threshold: json!(30),
            show_confidence: false,
            font_size: json!(12),
            font_family: json!("Arial"),
            font_weight: json!("normal"),
            min_branch_length: 0.0,
            max_branch_length: 1.0,
            default_length: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_map_has_every_required_key() {
        let map = RenderConfig::default().to_map();
        for key in REQUIRED_KEYS {
            assert!(map.contains_key(key), "missing {key}");
        }
        assert_eq!(map.len(), REQUIRED_KEYS.len());
    }

    #[test]
    fn test_default_map_validates_back_to_default() {
        let config = RenderConfig::default();
        assert_eq!(RenderConfig::from_map(&config.to_map()).unwrap(), config);
    }

    #[test]
    fn test_pass_through_values_survive_to_map() {
        let mut config = RenderConfig::default();
        config.points = json!("5");
        config.font_weight = json!(700);
        let map = config.to_map();
        assert_eq!(map["points"], json!("5"));
        assert_eq!(map["font_weight"], json!(700));
    }
}
