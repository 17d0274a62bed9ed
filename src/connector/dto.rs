//! Wire schema of the catalogue API. Unknown fields are ignored so upstream
//! additions don't break decoding.

use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MangaDto {
    pub id: String,
    pub poster_id: String,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub manga_type: String,
    pub chapters: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MangaListResponse {
    pub data: Vec<MangaDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterDto {
    pub id: String,
    pub volume: i64,
    pub chapter_num: i64,
    pub sub_chapter_num: i64,
    pub manga_id: String,
    pub last_updated: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterPagesDto {
    pub id: String,
    /// Zero-based page index (as a string) to image resource id
    pub resource_ids: BTreeMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manga_ignores_unknown_fields() {
        let json = r#"{"id":"1","posterId":"p","title":"T","type":"manga",
            "chapters":3,"description":"d","likes":999,"genres":["a"]}"#;
        let manga: MangaDto = serde_json::from_str(json).unwrap();
        assert_eq!(manga.poster_id, "p");
        assert_eq!(manga.manga_type, "manga");
        assert_eq!(manga.chapters, Some(3));
    }

    #[test]
    fn test_manga_nullable_fields() {
        let json = r#"{"id":"1","posterId":"p","title":"T","type":"manhwa",
            "chapters":null,"description":null}"#;
        let manga: MangaDto = serde_json::from_str(json).unwrap();
        assert!(manga.description.is_none());
        assert!(manga.chapters.is_none());
    }

    #[test]
    fn test_manga_missing_required_field() {
        let json = r#"{"id":"1","title":"T","type":"manga"}"#;
        assert!(serde_json::from_str::<MangaDto>(json).is_err());
    }
}
