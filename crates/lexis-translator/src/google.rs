use async_trait::async_trait;
use serde_json::Value;

use crate::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator, ensure_supported};

pub const DEFAULT_API_URL: &str = "https://translate.googleapis.com/translate_a/single";

/// Keyless web endpoint. Returns a transliteration alongside the text.
#[derive(Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    api_url: String,
}

impl GoogleTranslator {
    pub fn new(api_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        }
    }
}

impl Default for GoogleTranslator {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Extract translated text and target pronunciation.
///
/// `json[0]` holds sentence rows `[translated, original, ...]` followed by an
/// optional romanisation row `[null, null, target_translit, source_translit]`.
pub(crate) fn parse_response(json: &Value) -> Result<(String, Option<String>), TranslateError> {
    let rows = json
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslateError::ApiError("No translation in response".to_string()))?;

    let text: String = rows
        .iter()
        .filter_map(|row| row.get(0).and_then(Value::as_str))
        .collect();

    if text.is_empty() {
        return Err(TranslateError::ApiError(
            "No translation in response".to_string(),
        ));
    }

    let pronunciation = rows
        .iter()
        .filter(|row| row.get(0).is_some_and(Value::is_null))
        .find_map(|row| row.get(2).and_then(Value::as_str))
        .filter(|p| !p.is_empty())
        .map(str::to_string);

    Ok((text, pronunciation))
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        ensure_supported(self, &to)?;

        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("client", "gtx"),
                ("sl", from.as_str()),
                ("tl", to.as_str()),
                ("dt", "t"),
                ("dt", "rm"),
                ("q", text),
            ])
            .send()
            .await?;

        if response.status() == 429 {
            return Err(TranslateError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let json: Value = response.json().await.map_err(|e| {
            TranslateError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        let (translated_text, pronunciation) = parse_response(&json)?;
        tracing::debug!("Google translated '{}' -> '{}'", text, translated_text);

        Ok(Translation {
            text: translated_text,
            pronunciation,
            from,
            to,
            provider: "google".to_string(),
        })
    }

    fn supported_languages(&self) -> Vec<LanguageCode> {
        ["es", "fr", "de", "zh-cn", "zh-tw", "ja", "en"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Google Translate".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}
