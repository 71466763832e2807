// Sentiment scoring: per-article polarity alongside the bias score.

pub mod lexicon;
pub mod traits;

pub use lexicon::LexiconSentimentScorer;
pub use traits::SentimentScorer;
