use std::collections::HashMap;

use super::model::ItemData;
use crate::tags::Tag;

/// Line items keyed by tag id. Knows nothing about images; callers pass
/// whatever tag list a cascade needs.
#[derive(Debug, Default, Clone)]
pub struct ItemStore {
    items: HashMap<String, ItemData>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, tag_id: &str) -> Option<&ItemData> {
        self.items.get(tag_id)
    }

    /// Stored record, or the empty record a fresh tag would get
    pub fn get_or_default(&self, tag_id: &str) -> ItemData {
        self.items.get(tag_id).cloned().unwrap_or_default()
    }

    pub fn items(&self) -> &HashMap<String, ItemData> {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Insert an empty record for a new tag. Existing records are kept;
    /// returns false in that case.
    pub fn add_item_for_tag(&mut self, tag_id: &str) -> bool {
        if self.items.contains_key(tag_id) {
            tracing::debug!("add_item_for_tag: item already exists, tag_id={}", tag_id);
            return false;
        }
        self.items.insert(tag_id.to_string(), ItemData::default());
        tracing::debug!("item created: tag_id={}", tag_id);
        true
    }

    /// Replace the whole record (no field merge).
    pub fn update_item_data(&mut self, tag_id: &str, data: ItemData) {
        self.items.insert(tag_id.to_string(), data.normalized());
        tracing::debug!("item updated: tag_id={}", tag_id);
    }

    pub fn remove_item_data(&mut self, tag_id: &str) -> Option<ItemData> {
        let removed = self.items.remove(tag_id);
        if removed.is_none() {
            tracing::warn!("remove_item_data: item not found, tag_id={}", tag_id);
        }
        removed
    }

    /// Drop the items of every tag in `tags` that sits on `image_id`.
    /// Returns how many records were removed.
    pub fn remove_items_for_image(&mut self, image_id: &str, tags: &[Tag]) -> usize {
        let before = self.items.len();
        for tag in tags.iter().filter(|tag| tag.base_image_id == image_id) {
            self.items.remove(&tag.tag_id);
        }
        let removed = before - self.items.len();
        tracing::debug!("items removed for image: image_id={}, removed={}", image_id, removed);
        removed
    }
}
