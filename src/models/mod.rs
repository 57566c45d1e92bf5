mod recommendation;
mod review;

pub use recommendation::{
    AspectRank, AspectRecommendations, SentimentRecommendation, SummaryTable,
};
pub use review::{ReviewRecord, ReviewRow};
