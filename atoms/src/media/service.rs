use super::model::{Image, ImageSource};

/// Ordered collection of uploaded images. The vector order is the display
/// order; `Image::order` mirrors it.
#[derive(Debug, Default, Clone)]
pub struct ImageStore {
    images: Vec<Image>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All images in display order
    pub fn images(&self) -> &[Image] {
        &self.images
    }

    pub fn get_image(&self, image_id: &str) -> Option<&Image> {
        self.images.iter().find(|img| img.image_id == image_id)
    }

    /// Rank of the image in the display order
    pub fn position_of(&self, image_id: &str) -> Option<usize> {
        self.images.iter().position(|img| img.image_id == image_id)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Append a new image at the end of the display order
    pub fn add_image(&mut self, source: impl Into<ImageSource>, title: Option<&str>) -> Image {
        let order = self
            .images
            .iter()
            .map(|img| img.order)
            .max()
            .map_or(0, |max| max + 1);

        let image = Image {
            image_id: uuid::Uuid::new_v4().to_string(),
            source: source.into(),
            title: title.unwrap_or_default().to_string(),
            notes: String::new(),
            order,
            uploaded_at: chrono::Utc::now().to_rfc3339(),
        };

        tracing::debug!("image added: image_id={}, order={}", image.image_id, order);
        self.images.push(image.clone());
        image
    }

    /// Remove an image. Tags and item data are NOT touched here; the caller
    /// runs the cascade on the other stores.
    pub fn delete_image(&mut self, image_id: &str) -> Option<Image> {
        let Some(pos) = self.position_of(image_id) else {
            tracing::warn!("delete_image: image not found, image_id={}", image_id);
            return None;
        };
        let removed = self.images.remove(pos);
        tracing::debug!("image deleted: image_id={}", image_id);
        Some(removed)
    }

    /// Move `drag_id` to the slot currently held by `hover_id`, then rewrite
    /// every order key densely. Returns false when nothing moved.
    pub fn move_image(&mut self, drag_id: &str, hover_id: &str) -> bool {
        if drag_id == hover_id {
            return false;
        }
        let (Some(drag_index), Some(hover_index)) =
            (self.position_of(drag_id), self.position_of(hover_id))
        else {
            tracing::warn!(
                "move_image: image not found, drag_id={}, hover_id={}",
                drag_id,
                hover_id
            );
            return false;
        };

        let moved = self.images.remove(drag_index);
        self.images.insert(hover_index, moved);

        for (order, img) in self.images.iter_mut().enumerate() {
            img.order = order as i32;
        }

        tracing::debug!(
            "image moved: image_id={}, from={}, to={}",
            drag_id,
            drag_index,
            hover_index
        );
        true
    }

    /// Replace the source and title. Returns the replaced source so the
    /// caller can release it.
    pub fn update_image(
        &mut self,
        image_id: &str,
        source: impl Into<ImageSource>,
        title: &str,
    ) -> Option<ImageSource> {
        let Some(image) = self.find_mut(image_id) else {
            tracing::warn!("update_image: image not found, image_id={}", image_id);
            return None;
        };
        let previous = std::mem::replace(&mut image.source, source.into());
        image.title = title.to_string();
        Some(previous)
    }

    pub fn update_image_title(&mut self, image_id: &str, title: &str) -> bool {
        match self.find_mut(image_id) {
            Some(image) => {
                image.title = title.to_string();
                true
            }
            None => {
                tracing::warn!("update_image_title: image not found, image_id={}", image_id);
                false
            }
        }
    }

    pub fn update_image_notes(&mut self, image_id: &str, notes: &str) -> bool {
        match self.find_mut(image_id) {
            Some(image) => {
                image.notes = notes.to_string();
                true
            }
            None => {
                tracing::warn!("update_image_notes: image not found, image_id={}", image_id);
                false
            }
        }
    }

    fn find_mut(&mut self, image_id: &str) -> Option<&mut Image> {
        self.images.iter_mut().find(|img| img.image_id == image_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(store: &ImageStore) -> Vec<String> {
        store.images().iter().map(|img| img.image_id.clone()).collect()
    }

    fn orders(store: &ImageStore) -> Vec<i32> {
        store.images().iter().map(|img| img.order).collect()
    }

    #[test]
    fn test_add_image_assigns_increasing_order() {
        let mut store = ImageStore::new();
        let a = store.add_image("data:a", Some("Kitchen"));
        let b = store.add_image("data:b", None);

        assert_eq!(a.order, 0);
        assert_eq!(b.order, 1);
        assert_eq!(a.title, "Kitchen");
        assert_eq!(b.title, "");
        assert_eq!(b.notes, "");
        assert_ne!(a.image_id, b.image_id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_add_after_delete_uses_max_plus_one() {
        let mut store = ImageStore::new();
        let a = store.add_image("data:a", None);
        store.add_image("data:b", None);
        store.delete_image(&a.image_id);

        let c = store.add_image("data:c", None);
        assert_eq!(c.order, 2);
    }

    #[test]
    fn test_delete_image() {
        let mut store = ImageStore::new();
        let a = store.add_image("blob:http://local/1", None);
        let b = store.add_image("data:b", None);

        let removed = store.delete_image(&a.image_id).unwrap();
        assert!(removed.source.is_object_url());
        assert_eq!(ids(&store), vec![b.image_id.clone()]);

        assert!(store.delete_image("missing").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_move_image_forward_and_back() {
        let mut store = ImageStore::new();
        let a = store.add_image("a", None).image_id;
        let b = store.add_image("b", None).image_id;
        let c = store.add_image("c", None).image_id;

        assert!(store.move_image(&a, &c));
        assert_eq!(ids(&store), vec![b.clone(), c.clone(), a.clone()]);
        assert_eq!(orders(&store), vec![0, 1, 2]);

        assert!(store.move_image(&a, &b));
        assert_eq!(ids(&store), vec![a, b, c]);
        assert_eq!(orders(&store), vec![0, 1, 2]);
    }

    #[test]
    fn test_move_image_noops() {
        let mut store = ImageStore::new();
        let a = store.add_image("a", None).image_id;
        let b = store.add_image("b", None).image_id;

        assert!(!store.move_image(&a, &a));
        assert!(!store.move_image(&a, "missing"));
        assert!(!store.move_image("missing", &b));
        assert_eq!(ids(&store), vec![a, b]);
    }

    #[test]
    fn test_move_image_makes_order_dense() {
        let mut store = ImageStore::new();
        let a = store.add_image("a", None).image_id;
        let b = store.add_image("b", None).image_id;
        let c = store.add_image("c", None).image_id;
        store.delete_image(&b);
        assert_eq!(orders(&store), vec![0, 2]);

        store.move_image(&c, &a);
        assert_eq!(ids(&store), vec![c, a]);
        assert_eq!(orders(&store), vec![0, 1]);
    }

    #[test]
    fn test_update_fields() {
        let mut store = ImageStore::new();
        let a = store.add_image("blob:old", Some("Old")).image_id;

        let previous = store.update_image(&a, "data:new", "New").unwrap();
        assert_eq!(previous.as_str(), "blob:old");
        assert!(previous.is_object_url());

        assert!(store.update_image_notes(&a, "second floor"));
        assert!(store.update_image_title(&a, "Renamed"));

        let img = store.get_image(&a).unwrap();
        assert_eq!(img.source.as_str(), "data:new");
        assert_eq!(img.title, "Renamed");
        assert_eq!(img.notes, "second floor");
        assert_eq!(img.order, 0);

        assert!(store.update_image("missing", "x", "y").is_none());
        assert!(!store.update_image_title("missing", "y"));
        assert!(!store.update_image_notes("missing", "y"));
    }
}
