// Sentiment scorer trait.
//
// Sentiment is independent of the bias axis: it is one extra number per
// article. The default implementation is a local polarity lexicon; anything
// producing a polarity in [-1, 1] can stand in for it.

/// Trait for scoring the polarity of a text.
///
/// Implementations must be `Send + Sync` because batches are scored in
/// parallel across articles.
pub trait SentimentScorer: Send + Sync {
    /// Polarity from -1.0 (negative) to 1.0 (positive); 0.0 when neutral.
    fn polarity(&self, text: &str) -> f64;
}
