//! Static catalog of the books the reader offers.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../ui/types/")]
pub enum BookStatus {
    Ongoing,
    Completed,
    Hiatus,
}

/// Book metadata shown on the shelf. Chapters are resolved by the frontend
/// from the asset pipeline, not listed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../ui/types/")]
pub struct Book {
    pub title: String,
    pub subtitle: String,
    /// URL-safe identifier, unique across the catalog.
    pub slug: String,
    /// Cover image path relative to the asset root.
    pub cover_image: String,
    pub status: BookStatus,
    pub tags: Vec<String>,
}

pub fn catalog() -> Vec<Book> {
    vec![Book {
        title: "Unfiltered".to_string(),
        subtitle: "A Raw Love Story".to_string(),
        slug: "unfiltered".to_string(),
        cover_image: "covers/unfiltered.jpeg".to_string(),
        status: BookStatus::Ongoing,
        tags: vec![
            "Romance".to_string(),
            "Drama".to_string(),
            "Slice of Life".to_string(),
        ],
    }]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn slugs_are_unique_and_url_safe() {
        let books = catalog();
        let slugs: HashSet<_> = books.iter().map(|b| b.slug.as_str()).collect();
        assert_eq!(slugs.len(), books.len());
        for slug in slugs {
            assert!(slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&BookStatus::Ongoing).unwrap();
        assert_eq!(json, "\"ongoing\"");
    }
}
