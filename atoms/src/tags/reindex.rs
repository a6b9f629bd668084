use std::cmp::Ordering;

use super::model::Tag;
use crate::media::{Image, ImageStore};

/// Read-only view of the image display order used to rank tags.
pub trait ImageRank {
    /// Position of the image in display order, `None` if unknown
    fn rank(&self, image_id: &str) -> Option<usize>;
}

impl ImageRank for ImageStore {
    fn rank(&self, image_id: &str) -> Option<usize> {
        self.position_of(image_id)
    }
}

impl ImageRank for [Image] {
    fn rank(&self, image_id: &str) -> Option<usize> {
        self.iter().position(|img| img.image_id == image_id)
    }
}

impl ImageRank for [&str] {
    fn rank(&self, image_id: &str) -> Option<usize> {
        self.iter().position(|id| *id == image_id)
    }
}

impl ImageRank for [String] {
    fn rank(&self, image_id: &str) -> Option<usize> {
        self.iter().position(|id| id == image_id)
    }
}

/// Sort tags by (image rank, prior index) and renumber them 1..=N.
///
/// Tags on images the ranking does not know sort after every ranked tag and
/// keep their prior relative order.
pub fn reindex<R: ImageRank + ?Sized>(tags: Vec<Tag>, images: &R) -> Vec<Tag> {
    // Resolve each rank once; lookups are linear.
    let mut keyed: Vec<(Option<usize>, Tag)> = tags
        .into_iter()
        .map(|tag| (images.rank(&tag.base_image_id), tag))
        .collect();

    keyed.sort_by(|(a_rank, a), (b_rank, b)| {
        let by_image = match (a_rank, b_rank) {
            (Some(a_order), Some(b_order)) => a_order.cmp(b_order),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_image.then(a.index.cmp(&b.index))
    });

    keyed
        .into_iter()
        .enumerate()
        .map(|(pos, (_, mut tag))| {
            tag.index = pos as u32 + 1;
            tag
        })
        .collect()
}

/// True when the indices are exactly 1..=N in sequence order.
pub fn is_contiguous(tags: &[Tag]) -> bool {
    tags.iter()
        .enumerate()
        .all(|(pos, tag)| tag.index == pos as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(id: &str, image: &str, index: u32) -> Tag {
        Tag {
            tag_id: id.to_string(),
            base_image_id: image.to_string(),
            x: 0.0,
            y: 0.0,
            index,
        }
    }

    fn summary(tags: &[Tag]) -> Vec<(&str, u32)> {
        tags.iter().map(|t| (t.tag_id.as_str(), t.index)).collect()
    }

    #[test]
    fn test_reindex_orders_by_image_then_index() {
        let order: &[&str] = &["imgA", "imgB"];
        let tags = vec![
            tag("b1", "imgB", 1),
            tag("a2", "imgA", 2),
            tag("a1", "imgA", 1),
            tag("b2", "imgB", 2),
        ];

        let out = reindex(tags, order);
        assert_eq!(summary(&out), vec![("a1", 1), ("a2", 2), ("b1", 3), ("b2", 4)]);
        assert!(is_contiguous(&out));
    }

    #[test]
    fn test_reindex_closes_gaps_and_breaks_duplicates_stably() {
        let order: &[&str] = &["img"];
        let tags = vec![tag("t1", "img", 4), tag("t2", "img", 9), tag("t3", "img", 4)];

        let out = reindex(tags, order);
        assert_eq!(summary(&out), vec![("t1", 1), ("t3", 2), ("t2", 3)]);
    }

    #[test]
    fn test_reindex_is_idempotent() {
        let order: &[&str] = &["imgB", "imgA"];
        let tags = vec![tag("a1", "imgA", 1), tag("b1", "imgB", 2), tag("a2", "imgA", 5)];

        let once = reindex(tags, order);
        let twice = reindex(once.clone(), order);
        assert_eq!(once, twice);
        assert_eq!(summary(&once), vec![("b1", 1), ("a1", 2), ("a2", 3)]);
    }

    #[test]
    fn test_orphans_sort_last_in_prior_order() {
        let order: &[&str] = &["imgA"];
        let tags = vec![
            tag("o2", "gone", 2),
            tag("a1", "imgA", 3),
            tag("o1", "other", 1),
        ];

        let out = reindex(tags, order);
        assert_eq!(summary(&out), vec![("a1", 1), ("o1", 2), ("o2", 3)]);
    }

    #[test]
    fn test_reindex_empty() {
        let order: &[&str] = &[];
        assert!(reindex(Vec::new(), order).is_empty());
        assert!(is_contiguous(&[]));
    }

    #[test]
    fn test_rank_over_images_and_store() {
        let mut store = ImageStore::new();
        let a = store.add_image("a", None).image_id;
        let b = store.add_image("b", None).image_id;

        assert_eq!(store.rank(&b), Some(1));
        assert_eq!(store.images().rank(&a), Some(0));
        assert_eq!(store.rank("missing"), None);

        let ids = vec![b.clone(), a.clone()];
        assert_eq!(ids.as_slice().rank(&a), Some(1));
    }
}
