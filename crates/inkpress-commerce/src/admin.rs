//! Form models for the admin console.

use crate::catalog::Subcategory;
use crate::ids::{CategoryId, SubcategoryId};
use crate::slug::is_valid_slug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validation problem on a form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormIssue {
    /// Machine name of the offending field.
    pub field: &'static str,
    /// Message shown next to the field.
    pub message: String,
}

impl FormIssue {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FormIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Draft state of the subcategory create/edit form.
///
/// `id` is `None` while creating; set when editing an existing row.
/// Doubles as the request body for the admin create/update endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SubcategoryDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<SubcategoryId>,
    pub category_id: Option<CategoryId>,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
}

impl SubcategoryDraft {
    /// Pre-fill the form from an existing subcategory for editing.
    pub fn from_subcategory(sub: &Subcategory) -> Self {
        Self {
            id: Some(sub.id.clone()),
            category_id: Some(sub.category_id.clone()),
            name: sub.name.clone(),
            slug: sub.slug.clone(),
            description: sub.description.clone().unwrap_or_default(),
            image_url: sub.image_url.clone().unwrap_or_default(),
        }
    }

    /// Everything blocking submission, one issue per field.
    pub fn validate(&self) -> Vec<FormIssue> {
        let mut issues = Vec::new();

        if self.name.trim().is_empty() {
            issues.push(FormIssue::new("name", "Name is required"));
        }
        if self.category_id.is_none() {
            issues.push(FormIssue::new("category_id", "Choose a parent category"));
        }
        if !is_valid_slug(&self.slug) {
            issues.push(FormIssue::new(
                "slug",
                "Slug must be lowercase letters, digits and hyphens",
            ));
        }
        let image_url = self.image_url.trim();
        if !image_url.is_empty()
            && !(image_url.starts_with("http://") || image_url.starts_with("https://"))
        {
            issues.push(FormIssue::new("image_url", "Image URL must be http(s)"));
        }

        issues
    }

    /// Whether the draft can be submitted.
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Whether this draft edits an existing row.
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }
}
