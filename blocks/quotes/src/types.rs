use serde::Serialize;
use std::collections::BTreeMap;

pub use tagquote_shared::types::{Image, ItemData, Tag};

// ========== IMAGE WITH TAGS ==========
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ImageWithTags {
    #[serde(flatten)]
    pub image: Image,
    /// Tags on this image, in index order
    pub tags: Vec<Tag>,
}

// ========== SESSION SNAPSHOT ==========
/// Everything the aggregation views read, in one serializable value.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub images: Vec<ImageWithTags>,
    /// Keyed by tag id
    pub item_data: BTreeMap<String, ItemData>,
}

impl Snapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
