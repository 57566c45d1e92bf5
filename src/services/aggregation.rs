use std::collections::HashMap;

use crate::models::{AspectRank, ReviewRecord};

/// Number of top aspects selected per location
pub const MAX_RANKED_ASPECTS: usize = 3;

/// Number of representative reviews sampled per (aspect, sentiment) pair
pub const MAX_SAMPLE_REVIEWS: usize = 3;

/// Ranks aspect categories by mention count across the given records
///
/// Each expanded (aspect, sentiment) pair contributes one occurrence to its
/// aspect. The sort is stable over first-encounter order, so equally
/// frequent aspects keep the order they first appeared in and repeated
/// calls over the same input return the same ranking. Fewer than `limit`
/// distinct aspects yield them all; no records yield an empty ranking.
pub fn rank_aspects(records: &[&ReviewRecord], limit: usize) -> Vec<AspectRank> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for record in records {
        for (aspect, _) in record.aspect_sentiment_pairs() {
            let count = counts.entry(aspect).or_insert(0);
            if *count == 0 {
                first_seen.push(aspect);
            }
            *count += 1;
        }
    }

    let mut ranked: Vec<AspectRank> = first_seen
        .into_iter()
        .map(|aspect| AspectRank {
            aspect: aspect.to_string(),
            count: counts[aspect],
        })
        .collect();

    // Vec::sort_by is stable: ties keep first-seen order
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}

/// Distinct sentiment labels across the records, in first-encounter order
///
/// The order matters: downstream entry assembly and column routing must be
/// reproducible for a fixed input ordering.
pub fn distinct_sentiments(records: &[&ReviewRecord]) -> Vec<String> {
    let mut sentiments: Vec<String> = Vec::new();

    for record in records {
        for (_, sentiment) in record.aspect_sentiment_pairs() {
            if !sentiments.iter().any(|seen| seen == sentiment) {
                sentiments.push(sentiment.to_string());
            }
        }
    }

    sentiments
}

/// Selects up to `limit` review texts carrying the exact (aspect, sentiment)
/// pair, in record order
///
/// "First" means original record order, not any re-ranking; an empty result
/// means no review matches the pair at all.
pub fn sample_reviews<'a>(
    records: &[&'a ReviewRecord],
    aspect: &str,
    sentiment: &str,
    limit: usize,
) -> Vec<&'a str> {
    records
        .iter()
        .filter(|record| record.mentions(aspect, sentiment))
        .map(|record| record.text.as_str())
        .take(limit)
        .collect()
}
