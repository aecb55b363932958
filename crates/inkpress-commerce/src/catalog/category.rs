//! Top-level print categories.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A top-level category in the catalog (e.g., "Marketing Material").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Category name.
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Category description.
    #[serde(default)]
    pub description: Option<String>,
    /// Category image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Sort order position.
    #[serde(default)]
    pub position: i32,
}

/// Sort categories by their backend-assigned position, in place.
pub fn sort_by_position(categories: &mut [Category]) {
    categories.sort_by_key(|c| c.position);
}

/// Find a category by its slug.
pub fn find_by_slug<'a>(categories: &'a [Category], slug: &str) -> Option<&'a Category> {
    categories.iter().find(|c| c.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, slug: &str, position: i32) -> Category {
        Category {
            id: CategoryId::new(id),
            name: slug.to_string(),
            slug: slug.to_string(),
            description: None,
            image_url: None,
            position,
        }
    }

    #[test]
    fn test_sort_by_position() {
        let mut cats = vec![
            category("c2", "stationery", 2),
            category("c1", "marketing", 1),
            category("c3", "signage", 3),
        ];
        sort_by_position(&mut cats);
        let slugs: Vec<_> = cats.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, ["marketing", "stationery", "signage"]);
    }

    #[test]
    fn test_find_by_slug() {
        let cats = vec![category("c1", "marketing", 1), category("c2", "signage", 2)];
        assert_eq!(find_by_slug(&cats, "signage").map(|c| c.id.as_str()), Some("c2"));
        assert!(find_by_slug(&cats, "missing").is_none());
    }

    #[test]
    fn test_tolerates_missing_optional_fields() {
        let cat: Category =
            serde_json::from_str(r#"{"id":"c1","name":"Marketing","slug":"marketing"}"#).unwrap();
        assert_eq!(cat.position, 0);
        assert!(cat.image_url.is_none());
    }
}
