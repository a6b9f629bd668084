use std::collections::BTreeMap;

use tagquote_atoms::items::{ItemData, ItemStore};
use tagquote_atoms::media::{Image, ImageSource, ImageStore};
use tagquote_atoms::tags::TagStore;
use tagquote_shared::InvoiceConfig;

use crate::invoice::Invoice;
use crate::types::{ImageWithTags, Snapshot};

/// One editing session: owns the three stores and keeps them consistent.
///
/// The stores never call each other; every cross-store rule (cascade
/// deletes, renumbering after a reorder) lives here.
#[derive(Debug, Default, Clone)]
pub struct QuoteSession {
    images: ImageStore,
    tags: TagStore,
    items: ItemStore,
}

impl QuoteSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn images(&self) -> &ImageStore {
        &self.images
    }

    pub fn tags(&self) -> &TagStore {
        &self.tags
    }

    pub fn items(&self) -> &ItemStore {
        &self.items
    }

    // ---------- images ----------

    /// Called by the upload collaborator once the file is readable.
    pub fn add_image(&mut self, source: impl Into<ImageSource>, title: Option<&str>) -> Image {
        let image = self.images.add_image(source, title);
        tracing::info!(
            "📥 add_image: image_id={}, order={}, total={}",
            image.image_id,
            image.order,
            self.images.len()
        );
        image
    }

    /// Swap the picture of an existing image, keeping its title. Returns the
    /// replaced source so an object URL can be released.
    pub fn edit_image_source(
        &mut self,
        image_id: &str,
        source: impl Into<ImageSource>,
    ) -> Option<ImageSource> {
        let title = self.images.get_image(image_id)?.title.clone();
        self.images.update_image(image_id, source, &title)
    }

    pub fn update_image_title(&mut self, image_id: &str, title: &str) -> bool {
        self.images.update_image_title(image_id, title)
    }

    pub fn update_image_notes(&mut self, image_id: &str, notes: &str) -> bool {
        self.images.update_image_notes(image_id, notes)
    }

    /// Drag-reorder an image, then renumber every tag against the new order.
    pub fn move_image(&mut self, drag_id: &str, hover_id: &str) -> bool {
        if !self.images.move_image(drag_id, hover_id) {
            return false;
        }
        self.tags.reindex(&self.images);
        tracing::info!("🔀 move_image: drag_id={}, hover_id={}", drag_id, hover_id);
        true
    }

    /// Delete an image together with its tags and their item data.
    pub fn delete_image(&mut self, image_id: &str) -> Option<Image> {
        if self.images.get_image(image_id).is_none() {
            tracing::warn!("❌ delete_image: image not found, image_id={}", image_id);
            return None;
        }

        // STEP 1: item data needs the tag list, so it goes before the tags
        let removed_items = self.items.remove_items_for_image(image_id, self.tags.tags());

        // STEP 2: tags, renumbering against the order that still holds the image
        let removed_tags = self.tags.remove_tags_for_image(image_id, &self.images);

        // STEP 3: the image itself
        let image = self.images.delete_image(image_id);

        tracing::info!(
            "🗑️ delete_image: image_id={}, tags_removed={}, items_removed={}",
            image_id,
            removed_tags.len(),
            removed_items
        );
        image
    }

    // ---------- tags ----------

    /// Place a tag with an empty line item. Returns `None` for an unknown
    /// image so no orphan tag is ever created through the session.
    pub fn place_tag(&mut self, image_id: &str, x: f64, y: f64) -> Option<String> {
        if self.images.get_image(image_id).is_none() {
            tracing::warn!("❌ place_tag: image not found, image_id={}", image_id);
            return None;
        }
        let tag_id = self.tags.add_tag(image_id, x, y, &self.images);
        self.items.add_item_for_tag(&tag_id);

        tracing::info!("✅ place_tag: tag_id={}, image_id={}", tag_id, image_id);
        Some(tag_id)
    }

    pub fn drag_tag(&mut self, tag_id: &str, x: f64, y: f64) -> bool {
        self.tags.drag_tag(tag_id, x, y)
    }

    /// Store the edited line item of a tag. Items for unknown tags are
    /// refused.
    pub fn save_item(&mut self, tag_id: &str, data: ItemData) -> bool {
        if self.tags.get_tag(tag_id).is_none() {
            tracing::warn!("❌ save_item: tag not found, tag_id={}", tag_id);
            return false;
        }
        self.items.update_item_data(tag_id, data);
        true
    }

    /// Delete a tag and its line item.
    pub fn delete_tag(&mut self, tag_id: &str) -> bool {
        self.items.remove_item_data(tag_id);
        let removed = self.tags.remove_tag(tag_id, &self.images);
        if removed {
            tracing::info!("🗑️ delete_tag: tag_id={}, remaining={}", tag_id, self.tags.len());
        }
        removed
    }

    /// The add-item dialog for a freshly placed tag was dismissed.
    pub fn cancel_new_item(&mut self, tag_id: &str) -> bool {
        self.delete_tag(tag_id)
    }

    // ---------- projections ----------

    /// Images in display order, each with its own tags
    pub fn images_with_tags(&self) -> Vec<ImageWithTags> {
        self.images
            .images()
            .iter()
            .map(|image| ImageWithTags {
                image: image.clone(),
                tags: self.tags.tags_for_image(&image.image_id).cloned().collect(),
            })
            .collect()
    }

    pub fn invoice(&self, config: &InvoiceConfig) -> Invoice {
        Invoice::build(&self.images_with_tags(), &self.items, config)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            images: self.images_with_tags(),
            item_data: self
                .items
                .items()
                .iter()
                .map(|(tag_id, data)| (tag_id.clone(), data.clone()))
                .collect::<BTreeMap<_, _>>(),
        }
    }
}
