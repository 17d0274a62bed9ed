use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageImage {
    /// Zero-based position within the chapter
    pub index: usize,
    pub image_url: String,
}
