use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterEntry {
    pub id: String,
    pub manga_id: String,
    pub display_name: String,
    pub volume: i64,
    pub chapter_number: i64,
    pub sub_chapter_number: i64,
    /// Upload time in epoch milliseconds, 0 when upstream sent an unreadable timestamp
    pub uploaded_at_millis: i64,
    pub url: String,
}

impl ChapterEntry {
    /// Format a chapter label: `Vol. 1 Ch. 5`, or `Vol. 1 Ch. 5.2` when a
    /// sub-chapter number is present.
    pub fn format_name(volume: i64, chapter_number: i64, sub_chapter_number: i64) -> String {
        if sub_chapter_number == 0 {
            format!("Vol. {} Ch. {}", volume, chapter_number)
        } else {
            format!(
                "Vol. {} Ch. {}.{}",
                volume, chapter_number, sub_chapter_number
            )
        }
    }
}
