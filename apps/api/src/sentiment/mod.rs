//! Sentiment Normalizer: prompt construction, completion cleaning, and
//! resolution of free-text completions onto the closed tag set.

pub mod handlers;
pub mod normalizer;
pub mod prompts;

use serde::{Deserialize, Serialize};

/// Closed set of sentiment labels.
/// The wire form is the angle-bracket tag the model contract uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    #[serde(rename = "<NEGATIVE>")]
    Negative,
    #[serde(rename = "<NEUTRAL>")]
    Neutral,
    #[serde(rename = "<POSITIVE>")]
    Positive,
}

impl Sentiment {
    /// The angle-bracket tag for this label.
    pub fn tag(&self) -> &'static str {
        match self {
            Sentiment::Negative => "<NEGATIVE>",
            Sentiment::Neutral => "<NEUTRAL>",
            Sentiment::Positive => "<POSITIVE>",
        }
    }

    /// Exact-match lookup against the three valid tags.
    pub fn from_tag(s: &str) -> Option<Self> {
        match s {
            "<NEGATIVE>" => Some(Sentiment::Negative),
            "<NEUTRAL>" => Some(Sentiment::Neutral),
            "<POSITIVE>" => Some(Sentiment::Positive),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_serializes_to_tag() {
        assert_eq!(
            serde_json::to_string(&Sentiment::Negative).unwrap(),
            r#""<NEGATIVE>""#
        );
        assert_eq!(
            serde_json::to_string(&Sentiment::Neutral).unwrap(),
            r#""<NEUTRAL>""#
        );
        assert_eq!(
            serde_json::to_string(&Sentiment::Positive).unwrap(),
            r#""<POSITIVE>""#
        );
    }

    #[test]
    fn test_sentiment_deserializes_from_tag() {
        let sentiment: Sentiment = serde_json::from_str(r#""<POSITIVE>""#).unwrap();
        assert_eq!(sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_from_tag_accepts_only_exact_tags() {
        assert_eq!(Sentiment::from_tag("<NEGATIVE>"), Some(Sentiment::Negative));
        assert_eq!(Sentiment::from_tag("<NEUTRAL>"), Some(Sentiment::Neutral));
        assert_eq!(Sentiment::from_tag("<POSITIVE>"), Some(Sentiment::Positive));
        assert_eq!(Sentiment::from_tag("NEGATIVE"), None);
        assert_eq!(Sentiment::from_tag("<negative>"), None);
        assert_eq!(Sentiment::from_tag(""), None);
    }

    #[test]
    fn test_tag_round_trips_through_from_tag() {
        for sentiment in [Sentiment::Negative, Sentiment::Neutral, Sentiment::Positive] {
            assert_eq!(Sentiment::from_tag(sentiment.tag()), Some(sentiment));
        }
    }
}
