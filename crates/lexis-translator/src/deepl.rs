use async_trait::async_trait;

use crate::{
    AUTO_DETECT, LanguageCode, ProviderMetadata, TranslateError, Translation, Translator,
    ensure_supported,
};

pub const DEFAULT_API_URL: &str = "https://api-free.deepl.com/v2/translate";

#[derive(Clone)]
pub struct DeepLTranslator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl DeepLTranslator {
    pub fn new(api_key: String, api_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url: api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        }
    }
}

/// DeepL uses upper-case codes and plain `ZH` for simplified Chinese
pub fn deepl_code(code: &str) -> String {
    match code.to_lowercase().as_str() {
        "zh-cn" | "zh" => "ZH".to_string(),
        other => other.to_uppercase(),
    }
}

pub(crate) fn parse_response(json: &serde_json::Value) -> Result<String, TranslateError> {
    json["translations"]
        .get(0)
        .and_then(|t| t["text"].as_str())
        .map(str::to_string)
        .ok_or_else(|| TranslateError::ApiError("No translation in response".to_string()))
}

#[async_trait]
impl Translator for DeepLTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        if self.api_key.is_empty() {
            return Err(TranslateError::AuthenticationError);
        }
        ensure_supported(self, &to)?;

        let target = deepl_code(&to);
        let mut params = vec![("text", text.to_string()), ("target_lang", target)];
        if from != AUTO_DETECT {
            params.push(("source_lang", deepl_code(&from)));
        }

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
            .form(&params)
            .send()
            .await?;

        if response.status() == 429 {
            return Err(TranslateError::RateLimitExceeded);
        }

        if response.status() == 403 {
            return Err(TranslateError::AuthenticationError);
        }

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            TranslateError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        let translated_text = parse_response(&json)?;
        tracing::debug!("DeepL translated '{}' -> '{}'", text, translated_text);

        Ok(Translation {
            text: translated_text,
            pronunciation: None,
            from,
            to,
            provider: "deepl".to_string(),
        })
    }

    fn supported_languages(&self) -> Vec<LanguageCode> {
        ["es", "fr", "de", "zh-cn", "zh", "ja", "en"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "DeepL".to_string(),
            requires_api_key: true,
            free_tier_available: true,
        }
    }
}
