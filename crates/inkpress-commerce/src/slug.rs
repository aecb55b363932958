//! Slug generation and validation for URL-friendly identifiers.
//!
//! The admin console derives slugs from names as the user types, and
//! validates hand-edited slugs before submitting.

/// Generate a URL-friendly slug from arbitrary text.
///
/// Lowercases, keeps ASCII alphanumerics, and collapses every run of other
/// characters into a single `-`. Leading and trailing separators are trimmed.
///
/// ```
/// use inkpress_commerce::slug::slugify;
/// assert_eq!(slugify("Wedding Cards & Invites"), "wedding-cards-invites");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// Check that a slug is well-formed: non-empty, lowercase ASCII
/// alphanumerics and hyphens, no leading/trailing/doubled hyphens.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug == slugify(slug)
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Business Cards"), "business-cards");
    }

    #[test]
    fn test_slugify_collapses_separator_runs() {
        assert_eq!(slugify("Wedding Cards & Invites"), "wedding-cards-invites");
        assert_eq!(slugify("a  --  b"), "a-b");
    }

    #[test]
    fn test_slugify_trims_edges() {
        assert_eq!(slugify("  Flyers!  "), "flyers");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_slugify_keeps_digits() {
        assert_eq!(slugify("A4 Posters (Matte)"), "a4-posters-matte");
    }

    #[test]
    fn test_valid_slug() {
        assert!(is_valid_slug("business-cards"));
        assert!(is_valid_slug("a4-posters"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("Business-Cards"));
        assert!(!is_valid_slug("-leading"));
        assert!(!is_valid_slug("trailing-"));
        assert!(!is_valid_slug("double--hyphen"));
        assert!(!is_valid_slug("spa ce"));
    }
}
