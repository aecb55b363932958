//! Subcategories within a print category.

use crate::ids::{CategoryId, SubcategoryId};
use serde::{Deserialize, Serialize};

/// A subcategory under a category (e.g., "Business Cards" under
/// "Stationery").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subcategory {
    /// Unique subcategory identifier.
    pub id: SubcategoryId,
    /// Parent category ID.
    pub category_id: CategoryId,
    /// Subcategory name.
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Subcategory description.
    #[serde(default)]
    pub description: Option<String>,
    /// Subcategory image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Sort order position within the parent.
    #[serde(default)]
    pub position: i32,
}

impl Subcategory {
    /// Case-insensitive name match for client-side search.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        query.is_empty() || self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Keep only subcategories matching the search query.
pub fn filter_subcategories<'a>(items: &'a [Subcategory], query: &str) -> Vec<&'a Subcategory> {
    items.iter().filter(|s| s.matches(query)).collect()
}

/// Sort subcategories by their backend-assigned position, in place.
pub fn sort_by_position(items: &mut [Subcategory]) {
    items.sort_by_key(|s| s.position);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subcategory(name: &str) -> Subcategory {
        Subcategory {
            id: SubcategoryId::new("s1"),
            category_id: CategoryId::new("c1"),
            name: name.to_string(),
            slug: name.to_lowercase(),
            description: None,
            image_url: None,
            position: 0,
        }
    }

    #[test]
    fn test_matches_case_insensitive() {
        let s = subcategory("Business Cards");
        assert!(s.matches("business"));
        assert!(s.matches("CARDS"));
        assert!(!s.matches("posters"));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let s = subcategory("Flyers");
        assert!(s.matches(""));
        assert!(s.matches("   "));
    }

    #[test]
    fn test_filter_subcategories() {
        let items = vec![
            subcategory("Business Cards"),
            subcategory("Letterheads"),
            subcategory("Greeting Cards"),
        ];
        let hits = filter_subcategories(&items, "cards");
        let names: Vec<_> = hits.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Business Cards", "Greeting Cards"]);
    }
}
