use super::model::{clamp_percent, Tag};
use super::reindex::{is_contiguous, reindex, ImageRank};

/// Every tag across every image, always kept in canonical order with
/// indices 1..=N.
///
/// The image order is not stored here; structural calls take it as an
/// argument.
#[derive(Debug, Default, Clone)]
pub struct TagStore {
    tags: Vec<Tag>,
}

impl TagStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn get_tag(&self, tag_id: &str) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.tag_id == tag_id)
    }

    /// Tags placed on one image, in index order
    pub fn tags_for_image<'a>(&'a self, image_id: &'a str) -> impl Iterator<Item = &'a Tag> + 'a {
        self.tags
            .iter()
            .filter(move |tag| tag.base_image_id == image_id)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Place a new tag and renumber. Returns the new tag id.
    ///
    /// The image id is not validated; a tag on an unknown image ranks after
    /// all known images.
    pub fn add_tag<R: ImageRank + ?Sized>(
        &mut self,
        image_id: &str,
        x: f64,
        y: f64,
        images: &R,
    ) -> String {
        // Provisional index puts the tag after its siblings; reindex makes it global.
        let provisional = self
            .tags_for_image(image_id)
            .map(|tag| tag.index)
            .max()
            .unwrap_or(0)
            + 1;

        let tag = Tag {
            tag_id: uuid::Uuid::new_v4().to_string(),
            base_image_id: image_id.to_string(),
            x: clamp_percent(x),
            y: clamp_percent(y),
            index: provisional,
        };
        let tag_id = tag.tag_id.clone();

        self.tags.push(tag);
        self.reindex(images);

        tracing::debug!(
            "tag added: tag_id={}, image_id={}, total={}",
            tag_id,
            image_id,
            self.tags.len()
        );
        tag_id
    }

    /// Remove one tag and renumber the rest. Returns false if the id is unknown.
    pub fn remove_tag<R: ImageRank + ?Sized>(&mut self, tag_id: &str, images: &R) -> bool {
        let before = self.tags.len();
        self.tags.retain(|tag| tag.tag_id != tag_id);
        if self.tags.len() == before {
            tracing::warn!("remove_tag: tag not found, tag_id={}", tag_id);
            return false;
        }
        self.reindex(images);
        tracing::debug!("tag removed: tag_id={}, total={}", tag_id, self.tags.len());
        true
    }

    /// Move a tag. Never renumbers.
    pub fn drag_tag(&mut self, tag_id: &str, x: f64, y: f64) -> bool {
        match self.tags.iter_mut().find(|tag| tag.tag_id == tag_id) {
            Some(tag) => {
                tag.x = clamp_percent(x);
                tag.y = clamp_percent(y);
                true
            }
            None => {
                tracing::warn!("drag_tag: tag not found, tag_id={}", tag_id);
                false
            }
        }
    }

    /// Drop every tag on `image_id` and renumber. Returns the removed tags.
    pub fn remove_tags_for_image<R: ImageRank + ?Sized>(
        &mut self,
        image_id: &str,
        images: &R,
    ) -> Vec<Tag> {
        let (removed, kept): (Vec<Tag>, Vec<Tag>) = std::mem::take(&mut self.tags)
            .into_iter()
            .partition(|tag| tag.base_image_id == image_id);
        self.tags = kept;
        self.reindex(images);

        tracing::debug!(
            "tags removed for image: image_id={}, removed={}, total={}",
            image_id,
            removed.len(),
            self.tags.len()
        );
        removed
    }

    /// Recompute every index against the current image order. Run after the
    /// images are reordered.
    pub fn reindex<R: ImageRank + ?Sized>(&mut self, images: &R) {
        self.tags = reindex(std::mem::take(&mut self.tags), images);
        debug_assert!(is_contiguous(&self.tags));
    }
}
