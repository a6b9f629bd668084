pub mod model;
pub mod service;

pub use model::{parse_amount, Dimensions, ItemData, ItemType};
pub use service::ItemStore;
