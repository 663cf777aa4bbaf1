use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use business::domain::headline::errors::HeadlineError;
use business::domain::headline::model::{HeadlineRequest, MAX_HEADLINE_WORDS, SUGGESTION_TARGET};
use business::domain::headline::services::HeadlineGeneratorService;

use crate::client::GeminiClient;
use crate::safety::headline_safety_settings;

const SYSTEM_PROMPT: &str = r#"You are a marketing expert specializing in concise, conversion-focused headlines for landing pages.

Your goal is to generate alternative headlines for a product landing page based on the product description provided. The headlines should be engaging and encourage visitors to take action (e.g., "Lihat Demo", "Beli Sekarang").

Return ONLY a JSON object, no additional text."#;

pub struct HeadlineGeneratorGemini {
    client: GeminiClient,
}

impl HeadlineGeneratorGemini {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn build_prompt(request: &HeadlineRequest) -> String {
        let current_headline = request.current_headline.as_deref().unwrap_or("(none)");

        format!(
            r#"Current Headline (if any): {}
Product Description: {}

Generate {} alternative headlines.
Format your response as a JSON object with a "suggestedHeadlines" key containing an array of strings.
The current headline, if provided, must not be included in the suggested headlines.
The headlines must be very short, with a maximum of {} words each.
Make sure the headlines are unique and do not repeat themselves.
Always use the original language of the product description, do not translate.
Make sure the generated headlines are professional and do not include any offensive or inappropriate content."#,
            current_headline, request.product_description, SUGGESTION_TARGET, MAX_HEADLINE_WORDS
        )
    }

    /// Output schema submitted with the request so the model answers in
    /// structured JSON rather than prose.
    fn response_schema() -> serde_json::Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "suggestedHeadlines": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" }
                }
            },
            "required": ["suggestedHeadlines"]
        })
    }

    /// Validates the model's text output against the headline schema.
    /// Reject-on-mismatch; no coercion and no repair beyond stripping the
    /// markdown fences some models wrap JSON in.
    fn parse_payload(content: &str) -> Result<Vec<String>, HeadlineError> {
        let mut json_text = content.trim();
        json_text = json_text
            .strip_prefix("```json")
            .or_else(|| json_text.strip_prefix("```"))
            .unwrap_or(json_text);
        json_text = json_text.strip_suffix("```").unwrap_or(json_text).trim();

        let payload: HeadlinePayload =
            serde_json::from_str(json_text).map_err(|_| HeadlineError::MalformedModelOutput)?;

        Ok(payload.suggested_headlines)
    }
}

#[derive(Debug, Deserialize)]
struct HeadlinePayload {
    #[serde(rename = "suggestedHeadlines")]
    suggested_headlines: Vec<String>,
}

#[async_trait]
impl HeadlineGeneratorService for HeadlineGeneratorGemini {
    async fn generate(&self, request: &HeadlineRequest) -> Result<Vec<String>, HeadlineError> {
        let prompt = Self::build_prompt(request);

        let body = json!({
            "systemInstruction": {
                "parts": [{ "text": SYSTEM_PROMPT }]
            },
            "contents": [
                { "role": "user", "parts": [{ "text": prompt }] }
            ],
            "generationConfig": {
                "temperature": 0.7,
                "responseMimeType": "application/json",
                "responseSchema": Self::response_schema(),
            },
            "safetySettings": headline_safety_settings(),
        });

        let response = self
            .client
            .client
            .post(self.client.generate_content_url())
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.client.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|_| HeadlineError::UpstreamUnavailable)?;

        if !response.status().is_success() {
            return Err(HeadlineError::UpstreamUnavailable);
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|_| HeadlineError::UpstreamUnavailable)?;

        // A success envelope without candidate text means the model answer
        // itself is unusable (blocked or truncated), not that the provider
        // was unreachable.
        let content = data["candidates"]
            .as_array()
            .and_then(|candidates| candidates.first())
            .and_then(|candidate| candidate["content"]["parts"][0]["text"].as_str())
            .ok_or(HeadlineError::MalformedModelOutput)?;

        Self::parse_payload(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(current: Option<&str>) -> HeadlineRequest {
        HeadlineRequest::new(
            "Template portfolio siap pakai untuk mahasiswa",
            current.map(|c| c.to_string()),
        )
        .unwrap()
    }

    #[test]
    fn prompt_should_carry_description_and_target_count() {
        let prompt = HeadlineGeneratorGemini::build_prompt(&request(None));

        assert!(prompt.contains("Template portfolio siap pakai untuk mahasiswa"));
        assert!(prompt.contains("Generate 3 alternative headlines"));
        assert!(prompt.contains("maximum of 10 words"));
    }

    #[test]
    fn prompt_should_instruct_exclusion_of_current_headline() {
        let prompt = HeadlineGeneratorGemini::build_prompt(&request(Some(
            "Buat Kesan Pertama yang Tak Terlupakan",
        )));

        assert!(prompt.contains("Buat Kesan Pertama yang Tak Terlupakan"));
        assert!(prompt.contains("must not be included in the suggested headlines"));
    }

    #[test]
    fn prompt_should_instruct_language_preservation() {
        let prompt = HeadlineGeneratorGemini::build_prompt(&request(None));
        assert!(prompt.contains("original language"));
    }

    #[test]
    fn response_schema_should_require_suggested_headlines() {
        let schema = HeadlineGeneratorGemini::response_schema();
        assert_eq!(schema["required"][0], "suggestedHeadlines");
        assert_eq!(schema["properties"]["suggestedHeadlines"]["type"], "ARRAY");
    }

    #[test]
    fn should_parse_conforming_payload() {
        let payload = r#"{"suggestedHeadlines":["Lihat Demo Sekarang","Beli Sekarang"]}"#;

        let headlines = HeadlineGeneratorGemini::parse_payload(payload).unwrap();

        assert_eq!(
            headlines,
            vec!["Lihat Demo Sekarang".to_string(), "Beli Sekarang".to_string()]
        );
    }

    #[test]
    fn should_parse_payload_wrapped_in_markdown_fences() {
        let payload = "```json\n{\"suggestedHeadlines\":[\"Lihat Demo\"]}\n```";

        let headlines = HeadlineGeneratorGemini::parse_payload(payload).unwrap();

        assert_eq!(headlines, vec!["Lihat Demo".to_string()]);
    }

    #[test]
    fn should_reject_payload_missing_required_field() {
        let payload = r#"{"headlines":["Lihat Demo"]}"#;

        let result = HeadlineGeneratorGemini::parse_payload(payload);

        assert!(matches!(result, Err(HeadlineError::MalformedModelOutput)));
    }

    #[test]
    fn should_reject_payload_with_non_string_entries() {
        let payload = r#"{"suggestedHeadlines":["Lihat Demo", 42]}"#;

        let result = HeadlineGeneratorGemini::parse_payload(payload);

        assert!(matches!(result, Err(HeadlineError::MalformedModelOutput)));
    }

    #[test]
    fn should_reject_non_json_payload() {
        let result = HeadlineGeneratorGemini::parse_payload("Here are three great headlines!");
        assert!(matches!(result, Err(HeadlineError::MalformedModelOutput)));
    }

    #[test]
    fn should_accept_empty_headline_array() {
        // The contract tolerates 0..N entries; fewer than asked is the
        // caller's problem to surface, not a schema violation.
        let headlines =
            HeadlineGeneratorGemini::parse_payload(r#"{"suggestedHeadlines":[]}"#).unwrap();
        assert!(headlines.is_empty());
    }
}
