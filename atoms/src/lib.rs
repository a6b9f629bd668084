//! Domain stores for image tagging and quoting: images, the tags placed on
//! them and the line items attached to tags.
//!
//! The stores are independent of each other. Keeping them consistent
//! (cascade deletes, renumbering after an image reorder) is the caller's job.

pub mod items;
pub mod media;
pub mod tags;
