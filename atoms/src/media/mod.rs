// Re-export model types and the store
pub mod model;
pub mod service;

pub use model::{Image, ImageSource};
pub use service::ImageStore;
