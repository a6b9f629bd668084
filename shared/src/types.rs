// ========== IMAGE ==========
pub use tagquote_atoms::media::model::{Image, ImageSource};

// ========== TAG ==========
pub use tagquote_atoms::tags::model::Tag;

// ========== ITEM ==========
pub use tagquote_atoms::items::model::{Dimensions, ItemData, ItemType};
