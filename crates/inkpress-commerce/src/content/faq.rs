//! Frequently asked questions.

use crate::ids::FaqId;
use serde::{Deserialize, Serialize};

/// One question/answer pair on the FAQ page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Faq {
    /// Unique FAQ identifier.
    pub id: FaqId,
    /// The question.
    pub question: String,
    /// The answer, rendered as plain text.
    pub answer: String,
    /// Topic grouping (e.g., "Shipping").
    #[serde(default)]
    pub topic: Option<String>,
    /// Sort order position.
    #[serde(default)]
    pub position: i32,
}

impl Faq {
    /// Case-insensitive match over question and answer text.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.question.to_lowercase().contains(&query)
            || self.answer.to_lowercase().contains(&query)
    }
}

/// Keep only FAQs matching the search query, in position order.
pub fn filter_faqs<'a>(items: &'a [Faq], query: &str) -> Vec<&'a Faq> {
    let mut hits: Vec<&Faq> = items.iter().filter(|f| f.matches(query)).collect();
    hits.sort_by_key(|f| f.position);
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faq(id: &str, question: &str, answer: &str, position: i32) -> Faq {
        Faq {
            id: FaqId::new(id),
            question: question.to_string(),
            answer: answer.to_string(),
            topic: None,
            position,
        }
    }

    #[test]
    fn test_matches_question_and_answer() {
        let f = faq("f1", "How long does shipping take?", "3-5 business days.", 0);
        assert!(f.matches("shipping"));
        assert!(f.matches("BUSINESS DAYS"));
        assert!(!f.matches("refund"));
    }

    #[test]
    fn test_filter_faqs_sorted_by_position() {
        let items = vec![
            faq("f2", "Do you print logos?", "Yes.", 2),
            faq("f1", "What formats do you accept?", "PDF and PNG.", 1),
            faq("f3", "Can I reorder?", "Yes, from your account.", 3),
        ];
        let hits = filter_faqs(&items, "");
        let ids: Vec<_> = hits.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["f1", "f2", "f3"]);

        let hits = filter_faqs(&items, "print");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "f2");
    }
}
