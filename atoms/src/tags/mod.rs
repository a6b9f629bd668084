pub mod model;
pub mod reindex;
pub mod service;

pub use model::Tag;
pub use reindex::{reindex, ImageRank};
pub use service::TagStore;
