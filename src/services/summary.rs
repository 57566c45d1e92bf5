use crate::models::{AspectRecommendations, SummaryTable};

/// Sentiment labels routed into the two output columns; anything else is
/// excluded from both
pub const POSITIVE_SENTIMENT: &str = "positive";
pub const NEGATIVE_SENTIMENT: &str = "negative";

/// Builds the two-column consider/avoid table from ranked recommendations
///
/// Columns are collected independently in aspect-rank order and padded
/// with empty strings to equal length, so row i of the two columns may
/// reference different aspects. An entry whose generation failed
/// contributes an empty cell rather than dropping its row.
pub fn build_summary_table(recommendations: &[AspectRecommendations]) -> SummaryTable {
    let mut things_to_consider = Vec::new();
    let mut things_to_avoid = Vec::new();

    for aspect in recommendations {
        for entry in &aspect.entries {
            match entry.sentiment.as_str() {
                POSITIVE_SENTIMENT => {
                    things_to_consider.push(entry.recommendation.clone().unwrap_or_default());
                }
                NEGATIVE_SENTIMENT => {
                    things_to_avoid.push(entry.recommendation.clone().unwrap_or_default());
                }
                _ => {}
            }
        }
    }

    let rows = things_to_consider.len().max(things_to_avoid.len());
    things_to_consider.resize(rows, String::new());
    things_to_avoid.resize(rows, String::new());

    SummaryTable {
        things_to_consider,
        things_to_avoid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SentimentRecommendation;

    fn entry(sentiment: &str, recommendation: Option<&str>) -> SentimentRecommendation {
        SentimentRecommendation {
            sentiment: sentiment.to_string(),
            top_reviews: vec!["some review".to_string()],
            summary: "some review".to_string(),
            recommendation: recommendation.map(|r| r.to_string()),
        }
    }

    fn aspect(name: &str, entries: Vec<SentimentRecommendation>) -> AspectRecommendations {
        AspectRecommendations {
            aspect: name.to_string(),
            entries,
        }
    }

    #[test]
    fn test_empty_recommendations_build_empty_table() {
        let table = build_summary_table(&[]);
        assert!(table.things_to_consider.is_empty());
        assert!(table.things_to_avoid.is_empty());
    }

    #[test]
    fn test_columns_are_padded_to_equal_length() {
        let recommendations = vec![
            aspect(
                "drinks",
                vec![entry("negative", Some("Avoid the watery drinks"))],
            ),
            aspect(
                "parking",
                vec![
                    entry("positive", Some("You should provide more parking")),
                    entry("negative", Some("Avoid the dark parking lot")),
                ],
            ),
        ];

        let table = build_summary_table(&recommendations);
        assert_eq!(table.things_to_consider.len(), table.things_to_avoid.len());
        assert_eq!(
            table.things_to_consider,
            vec!["You should provide more parking", ""]
        );
        assert_eq!(
            table.things_to_avoid,
            vec!["Avoid the watery drinks", "Avoid the dark parking lot"]
        );
    }

    #[test]
    fn test_positive_only_input_pads_avoid_column() {
        let recommendations = vec![
            aspect("drinks", vec![entry("positive", Some("You should provide more drinks"))]),
            aspect("service", vec![entry("positive", Some("You should provide faster service"))]),
        ];

        let table = build_summary_table(&recommendations);
        assert_eq!(table.things_to_consider.len(), 2);
        assert!(table.things_to_avoid.iter().all(String::is_empty));
        assert_eq!(table.things_to_consider.len(), table.things_to_avoid.len());
    }

    #[test]
    fn test_failed_generation_becomes_empty_cell() {
        let recommendations = vec![aspect(
            "drinks",
            vec![
                entry("positive", None),
                entry("negative", Some("Avoid the watery drinks")),
            ],
        )];

        let table = build_summary_table(&recommendations);
        assert_eq!(table.things_to_consider, vec![""]);
        assert_eq!(table.things_to_avoid, vec!["Avoid the watery drinks"]);
    }

    #[test]
    fn test_other_sentiment_labels_route_nowhere() {
        let recommendations = vec![aspect(
            "seating",
            vec![
                entry("neutral", Some("Seats are acceptable")),
                entry("positive", Some("You should provide more seating")),
            ],
        )];

        let table = build_summary_table(&recommendations);
        assert_eq!(table.things_to_consider, vec!["You should provide more seating"]);
        assert_eq!(table.things_to_avoid, vec![""]);
    }

    #[test]
    fn test_columns_follow_aspect_rank_order() {
        let recommendations = vec![
            aspect("first", vec![entry("positive", Some("first consider"))]),
            aspect("second", vec![entry("positive", Some("second consider"))]),
        ];

        let table = build_summary_table(&recommendations);
        assert_eq!(table.things_to_consider, vec!["first consider", "second consider"]);
    }
}
