// Prompts for the sentiment normalizer. Each service that needs LLM calls
// defines its own prompts.rs alongside it.

/// System instruction enforcing the closed tag contract.
pub const ANALYZER_SYSTEM: &str = "You are an expert sentiment analysis model. \
    Your task is to classify the sentiment of the provided text as exactly one of: \
    <NEGATIVE>, <NEUTRAL>, or <POSITIVE>. \
    Respond with only the tag, no additional text or explanation.";

/// Builds the user turn for one analyze call.
pub fn build_analyze_prompt(input_text: &str) -> String {
    format!("Text to analyze:\n{input_text}")
}
