use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::model::RenderConfig;
use crate::parser::config::check_finite;

/// Configuration object embedded in the page for the scripts to read
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VizConfig {
    pub padding: Value,
    pub opacity: Value,
    pub points_per_node: Value,
    pub distance_threshold: Value,
    pub show_confidence: bool,
    pub font_size: Value,
    pub font_family: Value,
    pub font_weight: Value,
    pub branch_length: VizBranchLength,
}

#[derive(Debug, Serialize)]
pub struct VizBranchLength {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl VizConfig {
    /// Fails if a branch length was set to a non-finite value after validation
    pub fn from_config(config: &RenderConfig) -> Result<Self> {
        Ok(Self {
            padding: config.padding.clone(),
            opacity: config.opacity.clone(),
            points_per_node: config.points.clone(),
            distance_threshold: config.distance_threshold.clone(),
            show_confidence: config.show_confidence,
            font_size: config.font_size.clone(),
            font_family: config.font_family.clone(),
            font_weight: config.font_weight.clone(),
            branch_length: VizBranchLength {
                min: check_finite("min_branch_length", config.min_branch_length)?,
                max: check_finite("max_branch_length", config.max_branch_length)?,
                default: check_finite("default_length", config.default_length)?,
            },
        })
    }
}
