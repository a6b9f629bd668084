use serde::{Deserialize, Serialize};

/// Opaque reference to the picture bytes: a data URL, an object URL or a
/// remote URL. The core never looks inside it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct ImageSource(pub String);

impl ImageSource {
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    /// Object URLs (`blob:`) hold browser memory and have to be revoked by
    /// whoever created them once the image is replaced or deleted.
    pub fn is_object_url(&self) -> bool {
        self.0.starts_with("blob:")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageSource {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ImageSource {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Image domain model - one uploaded picture
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub image_id: String,
    pub source: ImageSource,
    pub title: String,
    pub notes: String,
    /// Display order key; dense (0..N-1) after any reorder
    pub order: i32,
    pub uploaded_at: String,
}
