use serde::{Deserialize, Serialize};

/// A single annotated customer review
///
/// `aspect_categories` and `sentiments` are positionally paired: the first
/// aspect goes with the first sentiment, and so on. Records are built once
/// from the dataset source and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewRecord {
    /// Business location the review belongs to
    pub location_id: i64,
    /// Free-form review body
    pub text: String,
    /// Aspect labels mentioned by the review
    pub aspect_categories: Vec<String>,
    /// Sentiment label for each aspect, same length as `aspect_categories`
    pub sentiments: Vec<String>,
}

impl ReviewRecord {
    /// Creates a new review record
    pub fn new(
        location_id: i64,
        text: impl Into<String>,
        aspect_categories: Vec<String>,
        sentiments: Vec<String>,
    ) -> Self {
        Self {
            location_id,
            text: text.into(),
            aspect_categories,
            sentiments,
        }
    }

    /// Expands the record into its ordered (aspect, sentiment) pairs
    ///
    /// A record whose annotation lists are empty or of unequal length is
    /// malformed and expands to zero pairs, which keeps it out of all
    /// downstream aggregation without raising an error.
    pub fn aspect_sentiment_pairs(&self) -> Vec<(&str, &str)> {
        if self.aspect_categories.is_empty()
            || self.aspect_categories.len() != self.sentiments.len()
        {
            return Vec::new();
        }

        self.aspect_categories
            .iter()
            .zip(&self.sentiments)
            .map(|(aspect, sentiment)| (aspect.as_str(), sentiment.as_str()))
            .collect()
    }

    /// Whether the record carries the exact (aspect, sentiment) pair
    pub fn mentions(&self, aspect: &str, sentiment: &str) -> bool {
        self.aspect_sentiment_pairs()
            .iter()
            .any(|&(a, s)| a == aspect && s == sentiment)
    }
}

/// Raw row shape of the review dataset CSV
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewRow {
    #[serde(rename = "Store_locations_ID")]
    pub location_id: i64,
    #[serde(rename = "Text")]
    pub text: String,
    /// Comma-joined aspect labels, e.g. "drinks, parking"
    #[serde(rename = "aspectCategory")]
    pub aspect_categories: String,
    /// Comma-joined sentiment labels, same cardinality as the aspects
    #[serde(rename = "sentiment")]
    pub sentiments: String,
}

impl From<ReviewRow> for ReviewRecord {
    fn from(row: ReviewRow) -> Self {
        ReviewRecord {
            location_id: row.location_id,
            text: row.text,
            aspect_categories: split_labels(&row.aspect_categories),
            sentiments: split_labels(&row.sentiments),
        }
    }
}

/// Splits a comma-joined annotation column into individual labels
fn split_labels(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    raw.split(',').map(|label| label.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_positional_order() {
        let record = ReviewRecord::new(
            1,
            "Great coffee, terrible parking",
            vec!["drinks".to_string(), "parking".to_string()],
            vec!["positive".to_string(), "negative".to_string()],
        );

        assert_eq!(
            record.aspect_sentiment_pairs(),
            vec![("drinks", "positive"), ("parking", "negative")]
        );
    }

    #[test]
    fn test_pairs_cardinality_mismatch_yields_none() {
        let record = ReviewRecord::new(
            1,
            "Parking lot is dark",
            vec!["parking".to_string(), "drinks".to_string()],
            vec!["negative".to_string()],
        );

        assert!(record.aspect_sentiment_pairs().is_empty());
        assert!(!record.mentions("parking", "negative"));
    }

    #[test]
    fn test_pairs_empty_annotations_yield_none() {
        let record = ReviewRecord::new(1, "No labels here", Vec::new(), Vec::new());
        assert!(record.aspect_sentiment_pairs().is_empty());
    }

    #[test]
    fn test_mentions_requires_exact_pair() {
        let record = ReviewRecord::new(
            1,
            "Drinks were fine",
            vec!["drinks".to_string()],
            vec!["positive".to_string()],
        );

        assert!(record.mentions("drinks", "positive"));
        assert!(!record.mentions("drinks", "negative"));
        assert!(!record.mentions("parking", "positive"));
    }

    #[test]
    fn test_row_conversion_splits_labels() {
        let row = ReviewRow {
            location_id: 5,
            text: "Nice drinks, no parking".to_string(),
            aspect_categories: "drinks, parking".to_string(),
            sentiments: "positive,negative".to_string(),
        };

        let record = ReviewRecord::from(row);
        assert_eq!(record.location_id, 5);
        assert_eq!(record.aspect_categories, vec!["drinks", "parking"]);
        assert_eq!(record.sentiments, vec!["positive", "negative"]);
    }

    #[test]
    fn test_row_conversion_empty_column() {
        let row = ReviewRow {
            location_id: 5,
            text: "Unlabeled review".to_string(),
            aspect_categories: "  ".to_string(),
            sentiments: String::new(),
        };

        let record = ReviewRecord::from(row);
        assert!(record.aspect_categories.is_empty());
        assert!(record.sentiments.is_empty());
        assert!(record.aspect_sentiment_pairs().is_empty());
    }
}
