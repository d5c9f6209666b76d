//! Caption generation.
//!
//! Two interchangeable backends produce title/description/hashtags from a
//! clip transcript: a Gemini-backed one and a deterministic heuristic one.
//! Selection happens at orchestrator construction based on whether an API
//! key is configured; backend failures are absorbed by the orchestrator,
//! which falls back to [`heuristic_captions`].

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{PipelineError, PipelineResult};
use crate::gemini::GeminiClient;

/// Hashtags attached by the heuristic generator.
pub const DEFAULT_HASHTAGS: [&str; 3] = ["#shorts", "#viral", "#clip"];

/// Title length cap for heuristic titles, in characters.
const HEURISTIC_TITLE_CHARS: usize = 70;

/// Description length cap for heuristic descriptions, in characters.
const HEURISTIC_DESCRIPTION_CHARS: usize = 200;

/// Generated caption metadata for one clip.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipMetadata {
    pub title: String,
    pub description: String,
    pub hashtags: Vec<String>,
}

/// Caption generation capability.
#[async_trait]
pub trait CaptionBackend: Send + Sync {
    /// Produce caption metadata from a transcript (which may be empty).
    async fn generate(&self, transcript: &str) -> PipelineResult<ClipMetadata>;

    /// Human-readable name for logging.
    fn name(&self) -> &'static str;
}

/// Deterministic local caption generator.
#[derive(Debug, Clone, Default)]
pub struct HeuristicCaptioner;

#[async_trait]
impl CaptionBackend for HeuristicCaptioner {
    async fn generate(&self, transcript: &str) -> PipelineResult<ClipMetadata> {
        Ok(heuristic_captions(transcript))
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

/// Gemini-backed caption generator.
///
/// Fails on transport errors, non-success statuses, and replies without an
/// extractable JSON object; the caller degrades to the heuristic generator.
pub struct GeminiCaptioner {
    client: GeminiClient,
}

impl GeminiCaptioner {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CaptionBackend for GeminiCaptioner {
    async fn generate(&self, transcript: &str) -> PipelineResult<ClipMetadata> {
        let prompt = build_caption_prompt(transcript);
        let text = self.client.generate(&prompt).await?;

        match parse_caption_text(&text) {
            Some(metadata) => {
                debug!(title = %metadata.title, "Parsed caption metadata from backend");
                Ok(metadata)
            }
            None => {
                warn!("Caption backend reply carried no parseable JSON object");
                Err(PipelineError::caption_request_failed(
                    "no JSON object in backend reply",
                ))
            }
        }
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

/// Build the caption prompt sent to the text-generation backend.
fn build_caption_prompt(transcript: &str) -> String {
    format!(
        "You are a social media assistant. From the transcript below produce a JSON with keys:\n\
         title (5-8 words), description (one sentence), hashtags (list of strings)\n\n\
         Transcript:\n{transcript}\n\nRespond ONLY in JSON."
    )
}

/// Generate caption metadata locally from the transcript.
///
/// Empty transcript gets the fixed "Short clip" title and no description;
/// otherwise the first line (truncated) becomes the title and the leading
/// characters the description, both with an unconditional ellipsis.
pub fn heuristic_captions(transcript: &str) -> ClipMetadata {
    let hashtags = DEFAULT_HASHTAGS.iter().map(|s| s.to_string()).collect();

    if transcript.is_empty() {
        return ClipMetadata {
            title: "Short clip".to_string(),
            description: String::new(),
            hashtags,
        };
    }

    let first_line = transcript.trim().lines().next().unwrap_or_default();
    ClipMetadata {
        title: format!("{}...", truncate_chars(first_line, HEURISTIC_TITLE_CHARS)),
        description: format!(
            "{}...",
            truncate_chars(transcript, HEURISTIC_DESCRIPTION_CHARS)
        ),
        hashtags,
    }
}

/// Clip a string at a character count, respecting UTF-8 boundaries.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Extract the first-`{`-to-last-`}` slice of a backend reply.
///
/// Backends may wrap the JSON object in explanatory text; everything outside
/// the outermost braces is discarded.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Caption fields as the backend emits them.
#[derive(Debug, Deserialize)]
struct CaptionPayload {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    hashtags: Option<TagPayload>,
    #[serde(default)]
    tags: Option<TagPayload>,
}

/// Backends return tags either as a list or as one comma-separated string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TagPayload {
    List(Vec<String>),
    Text(String),
}

/// Normalize a tag payload into a list.
///
/// String payloads are split on commas with `#` and surrounding whitespace
/// stripped; list payloads pass through untouched.
fn normalize_tags(tags: Option<TagPayload>) -> Vec<String> {
    match tags {
        None => Vec::new(),
        Some(TagPayload::List(list)) => list,
        Some(TagPayload::Text(text)) => text
            .replace('#', "")
            .split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect(),
    }
}

/// Parse caption metadata out of a raw backend reply.
///
/// Returns `None` when no bracketed JSON object is present or it fails to
/// deserialize.
pub fn parse_caption_text(text: &str) -> Option<ClipMetadata> {
    let json = extract_json_object(text)?;
    let payload: CaptionPayload = serde_json::from_str(json).ok()?;
    let tags = payload.hashtags.or(payload.tags);

    Some(ClipMetadata {
        title: payload.title,
        description: payload.description,
        hashtags: normalize_tags(tags),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_heuristic_with_transcript() {
        let meta = heuristic_captions("hello world");
        assert_eq!(meta.title, "hello world...");
        assert_eq!(meta.description, "hello world...");
        assert_eq!(meta.hashtags, vec!["#shorts", "#viral", "#clip"]);
    }

    #[test]
    fn test_heuristic_empty_transcript() {
        let meta = heuristic_captions("");
        assert_eq!(meta.title, "Short clip");
        assert_eq!(meta.description, "");
        assert_eq!(meta.hashtags, vec!["#shorts", "#viral", "#clip"]);
    }

    #[test]
    fn test_heuristic_truncates_long_transcript() {
        let line = "a".repeat(250);
        let transcript = format!("{line}\nsecond line");
        let meta = heuristic_captions(&transcript);
        assert_eq!(meta.title, format!("{}...", "a".repeat(70)));
        assert_eq!(meta.description, format!("{}...", "a".repeat(200)));
    }

    #[test]
    fn test_heuristic_title_uses_first_line_only() {
        let meta = heuristic_captions("first line\nsecond line");
        assert_eq!(meta.title, "first line...");
    }

    #[test]
    fn test_truncate_respects_utf8() {
        // Multi-byte characters must not be split.
        let text = "héllo wörld";
        assert_eq!(truncate_chars(text, 4), "héll");
        assert_eq!(truncate_chars(text, 100), text);
    }

    #[test]
    fn test_extract_json_object() {
        assert_eq!(
            extract_json_object("Sure! Here it is: {\"title\": \"x\"} Hope that helps."),
            Some("{\"title\": \"x\"}")
        );
        assert_eq!(extract_json_object("no braces here"), None);
        assert_eq!(extract_json_object("} reversed {"), None);
    }

    #[test]
    fn test_parse_caption_text_with_tag_string() {
        let reply = r##"Here you go: {"title": "t", "description": "d", "hashtags": "#a, #b"}"##;
        let meta = parse_caption_text(reply).unwrap();
        assert_eq!(meta.title, "t");
        assert_eq!(meta.description, "d");
        assert_eq!(meta.hashtags, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_caption_text_with_tag_list() {
        let reply = r##"{"title": "t", "description": "d", "hashtags": ["#x", "#y"]}"##;
        let meta = parse_caption_text(reply).unwrap();
        // List payloads are passed through, # intact.
        assert_eq!(meta.hashtags, vec!["#x", "#y"]);
    }

    #[test]
    fn test_parse_caption_text_tags_key_fallback() {
        let reply = r#"{"title": "t", "tags": "one, two , , three"}"#;
        let meta = parse_caption_text(reply).unwrap();
        assert_eq!(meta.hashtags, vec!["one", "two", "three"]);
        assert_eq!(meta.description, "");
    }

    #[test]
    fn test_parse_caption_text_missing_fields_default() {
        let meta = parse_caption_text("{}").unwrap();
        assert_eq!(meta.title, "");
        assert_eq!(meta.description, "");
        assert!(meta.hashtags.is_empty());
    }

    #[test]
    fn test_parse_caption_text_malformed() {
        assert!(parse_caption_text("{not json}").is_none());
        assert!(parse_caption_text("plain text").is_none());
    }

    #[tokio::test]
    async fn test_gemini_captioner_parses_wrapped_json() {
        let server = MockServer::start().await;
        let reply = "Here is your JSON:\n{\"title\": \"Big moment\", \"description\": \"desc\", \"hashtags\": \"#a,#b\"}\nEnjoy!";
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": [{"text": reply}]}}]
            })))
            .mount(&server)
            .await;

        let captioner =
            GeminiCaptioner::new(GeminiClient::new("test-key").with_base_url(server.uri()));
        let meta = captioner.generate("some transcript").await.unwrap();
        assert_eq!(meta.title, "Big moment");
        assert_eq!(meta.hashtags, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_gemini_captioner_errors_on_non_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let captioner =
            GeminiCaptioner::new(GeminiClient::new("test-key").with_base_url(server.uri()));
        let err = captioner.generate("transcript").await.unwrap_err();
        assert!(matches!(err, PipelineError::CaptionStatus(500)));
    }

    #[tokio::test]
    async fn test_gemini_captioner_errors_on_payload_without_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": [{"text": "sorry, no can do"}]}}]
            })))
            .mount(&server)
            .await;

        let captioner =
            GeminiCaptioner::new(GeminiClient::new("test-key").with_base_url(server.uri()));
        let err = captioner.generate("transcript").await.unwrap_err();
        assert!(matches!(err, PipelineError::CaptionRequestFailed(_)));
    }

    #[tokio::test]
    async fn test_heuristic_captioner_backend() {
        let captioner = HeuristicCaptioner;
        let meta = captioner.generate("hello world").await.unwrap();
        assert_eq!(meta.title, "hello world...");
        assert_eq!(captioner.name(), "heuristic");
    }
}
