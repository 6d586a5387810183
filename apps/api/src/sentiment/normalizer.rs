//! Completion cleaning and tag resolution.
//!
//! The model is asked for exactly one tag, but real completions drift:
//! reasoning blocks, prose around the tag, or no tag at all. Everything
//! funnels through `resolve_sentiment`, which always lands on one of the
//! three labels.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::llm_client::CompletionClient;
use crate::sentiment::prompts::{build_analyze_prompt, ANALYZER_SYSTEM};
use crate::sentiment::Sentiment;

// Reasoning block some models emit before the final answer
static RE_THINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<think[^>]*>.*?</think>").expect("valid regex"));

/// Inbound body for POST /analyze.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// Outbound body: the original text, the resolved tag, and a placeholder
/// confidence that is always 1.0 (not computed).
#[derive(Debug, Serialize)]
pub struct SentimentResponse {
    pub text: String,
    pub sentiment: Sentiment,
    pub confidence: f32,
}

/// Strips `<think>...</think>` reasoning blocks and surrounding whitespace.
pub fn clean_completion(raw: &str) -> String {
    RE_THINK.replace_all(raw.trim(), "").trim().to_string()
}

/// Resolves a raw completion onto the closed tag set.
///
/// An exact tag match after cleaning wins. Otherwise a keyword fallback on
/// the lowercased text applies. Negative keywords are checked before
/// positive ones, so mixed text like "not bad, pretty good" resolves
/// negative; neutral is the default when nothing matches.
pub fn resolve_sentiment(completion: &str) -> Sentiment {
    let cleaned = clean_completion(completion);

    if let Some(sentiment) = Sentiment::from_tag(&cleaned) {
        return sentiment;
    }

    let lower = cleaned.to_lowercase();
    if lower.contains("negative") || lower.contains("bad") {
        Sentiment::Negative
    } else if lower.contains("positive") || lower.contains("good") {
        Sentiment::Positive
    } else {
        Sentiment::Neutral
    }
}

/// Runs one full analyze pass: validate the input, build the two-turn
/// prompt, call the completion client, resolve the tag.
pub async fn analyze(
    text: &str,
    llm: &dyn CompletionClient,
) -> Result<SentimentResponse, AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation("Text cannot be empty".to_string()));
    }

    let prompt = build_analyze_prompt(text);
    let completion = llm
        .complete(ANALYZER_SYSTEM, &prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Error analyzing sentiment: {e}")))?;

    let sentiment = resolve_sentiment(&completion);
    debug!("completion resolved to {}", sentiment.tag());

    Ok(SentimentResponse {
        text: text.to_string(),
        sentiment,
        confidence: 1.0,
    })
}
