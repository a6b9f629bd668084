use serde::{Deserialize, Serialize};

/// Positional marker on one image
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub tag_id: String,
    pub base_image_id: String,
    /// Percent of image width, 0..=100
    pub x: f64,
    /// Percent of image height, 0..=100
    pub y: f64,
    /// 1-based sequence number, unique across all images
    pub index: u32,
}

/// Clamp an image-relative coordinate into [0, 100].
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}
