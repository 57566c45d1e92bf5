use std::sync::Arc;

use crate::error::AppResult;
use crate::models::{AspectRecommendations, SentimentRecommendation};
use crate::services::aggregation::{self, MAX_RANKED_ASPECTS, MAX_SAMPLE_REVIEWS};
use crate::services::providers::TextGenerator;
use crate::store::ReviewStore;

/// Separator used to merge sampled review texts into one passage
const REVIEW_JOIN_SEPARATOR: &str = " and ";

/// Builds ranked per-aspect recommendations for one location
///
/// Ranks the location's most mentioned aspects, samples representative
/// reviews per (aspect, sentiment) pair, and requests one recommendation
/// sentence per qualifying pair from the text-generation collaborator.
/// Generation calls run as independent tasks; a failed call leaves that
/// entry's `recommendation` empty while sibling entries complete.
pub async fn build_recommendations(
    store: &ReviewStore,
    generator: Arc<dyn TextGenerator>,
    location_id: i64,
) -> AppResult<Vec<AspectRecommendations>> {
    let records = store.records_for_location(location_id);
    let ranked = aggregation::rank_aspects(&records, MAX_RANKED_ASPECTS);
    let sentiments = aggregation::distinct_sentiments(&records);

    tracing::info!(
        location_id,
        records = records.len(),
        aspects = ranked.len(),
        sentiments = sentiments.len(),
        "Aggregated review annotations"
    );

    let mut aspects: Vec<AspectRecommendations> = ranked
        .iter()
        .map(|rank| AspectRecommendations {
            aspect: rank.aspect.clone(),
            entries: Vec::new(),
        })
        .collect();

    // Flatten qualifying (aspect, sentiment) entries so generation can fan
    // out over one list; pairs with no matching reviews get no entry
    let mut pending: Vec<(usize, SentimentRecommendation)> = Vec::new();
    for (aspect_idx, rank) in ranked.iter().enumerate() {
        for sentiment in &sentiments {
            let texts =
                aggregation::sample_reviews(&records, &rank.aspect, sentiment, MAX_SAMPLE_REVIEWS);
            if texts.is_empty() {
                continue;
            }

            pending.push((
                aspect_idx,
                SentimentRecommendation {
                    sentiment: sentiment.clone(),
                    top_reviews: texts.iter().map(|text| text.to_string()).collect(),
                    summary: texts.join(REVIEW_JOIN_SEPARATOR),
                    recommendation: None,
                },
            ));
        }
    }

    // One task per entry; entries are independent, so a slow or failing
    // call only affects its own slot. Dropping the set (request cancelled)
    // aborts whatever is still in flight.
    let mut tasks = tokio::task::JoinSet::new();
    for (slot, (aspect_idx, entry)) in pending.iter().enumerate() {
        let generator = Arc::clone(&generator);
        let prompt =
            recommendation_prompt(&entry.summary, &aspects[*aspect_idx].aspect, &entry.sentiment);
        tasks.spawn(async move { (slot, generator.generate(&prompt).await) });
    }

    let mut failures = 0usize;
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((slot, Ok(recommendation))) => {
                pending[slot].1.recommendation = Some(recommendation);
            }
            Ok((slot, Err(e))) => {
                let (aspect_idx, entry) = &pending[slot];
                tracing::warn!(
                    error = %e,
                    aspect = %aspects[*aspect_idx].aspect,
                    sentiment = %entry.sentiment,
                    "Recommendation generation failed for entry"
                );
                failures += 1;
            }
            Err(e) => {
                tracing::error!(error = %e, "Generation task join error");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        tracing::warn!(
            completed = pending.len() - failures,
            failures,
            "Partial recommendation generation"
        );
    }

    // Reassemble grouped by aspect in rank order; within an aspect, entries
    // keep the sentiment first-seen order from the sampling pass
    for (aspect_idx, entry) in pending {
        aspects[aspect_idx].entries.push(entry);
    }

    Ok(aspects)
}

/// Assembles the generation prompt for one (aspect, sentiment) entry
///
/// The instruction block is the behavioral contract for the collaborator:
/// openers per sentiment, one sentence of 5 to 10 words, no staff names,
/// no contradictions between companion recommendations, vague reviews
/// excluded.
pub fn recommendation_prompt(summary: &str, aspect: &str, sentiment: &str) -> String {
    format!(
        "Based on the review text, aspect, and sentiment provided, generate a concise summary \
         recommendation that is logical and reflects clear cause and effect. \
         When a review expresses a negative sentiment, begin the recommendation with the word \
         'Avoid.' Highlight the main criticism mentioned in the review and propose a specific \
         action to address this issue. For example, if the criticism pertains to slow service, \
         the recommendation could be formulated as: 'Avoid the slow service by hiring additional \
         staff to enhance efficiency.' \
         Whenever a review expresses positive sentiment, start with 'You should provide,' \
         emphasize the praised aspects, and suggest expanding them, such as 'You should provide \
         more spacious parking spaces for cars.' \
         Ensure the recommendation is directly linked to the aspect and sentiment, and is \
         limited to one sentence of 5-10 words. \
         Avoid contradictions between negative and positive recommendations; for example, \
         'Avoid the drinks' should not coincide with 'You should provide a variety of delicious \
         drinks'. \
         When generating recommendations based on customer feedback, ensure that no staff names \
         are mentioned. Focus on the qualities of the service or product itself. \
         Exclude reviews that are unclear, lack meaningful content, or contain vague opinions. \
         When customers consistently report a specific issue with a product, provide a targeted \
         recommendation to address the problem. \
         Differentiate clearly between staff-related issues and service-related issues: for \
         staff issues, focus on training and personnel management; for service issues, address \
         operational improvements. \
         Ensure that each recommendation directly addresses the specific issues mentioned and \
         avoid mixing different matters or contexts in the same sentence. \
         Here's the input for your reference:\nReview: {review}\nAspect: {aspect}\nSentiment: {sentiment}",
        review = summary,
        aspect = aspect,
        sentiment = sentiment,
    )
}
