use serde::{Deserialize, Serialize};

/// One ranked aspect with its mention count across a location's reviews
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AspectRank {
    pub aspect: String,
    pub count: usize,
}

/// Recommendation data for one (aspect, sentiment) pair
///
/// Only created when at least one review matches the pair; `recommendation`
/// stays `None` when the generation call for this entry failed.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentRecommendation {
    pub sentiment: String,
    /// Representative review texts, at most three, in record order
    pub top_reviews: Vec<String>,
    /// The top reviews merged into one generation passage
    pub summary: String,
    pub recommendation: Option<String>,
}

/// All recommendation entries for one ranked aspect
///
/// Entries follow the first-seen order of sentiment labels in the
/// location's records.
#[derive(Debug, Clone, PartialEq)]
pub struct AspectRecommendations {
    pub aspect: String,
    pub entries: Vec<SentimentRecommendation>,
}

/// Two-column recommendation summary returned to the client
///
/// Columns are padded to equal length with empty strings; rows are aligned
/// by position only, not by aspect.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SummaryTable {
    #[serde(rename = "Things to Consider")]
    pub things_to_consider: Vec<String>,
    #[serde(rename = "Things to Avoid")]
    pub things_to_avoid: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_table_column_names() {
        let table = SummaryTable {
            things_to_consider: vec!["You should provide more drinks".to_string()],
            things_to_avoid: vec![String::new()],
        };

        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(
            json["Things to Consider"][0],
            "You should provide more drinks"
        );
        assert_eq!(json["Things to Avoid"][0], "");
    }
}
