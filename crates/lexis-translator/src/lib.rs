pub mod deepl;
pub mod google;

pub use deepl::DeepLTranslator;
pub use google::GoogleTranslator;

pub type LanguageCode = String;

/// Source code asking the provider to detect the language
pub const AUTO_DETECT: &str = "auto";

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text from source to target language
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError>;

    /// Target languages this provider accepts
    fn supported_languages(&self) -> Vec<LanguageCode>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub text: String,
    /// Romanised reading of `text`, when the provider returns one
    pub pronunciation: Option<String>,
    pub from: LanguageCode,
    pub to: LanguageCode,
    pub provider: String,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
    pub free_tier_available: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,

    #[error("translation disabled")]
    Disabled,
}

pub(crate) fn ensure_supported(
    translator: &dyn Translator,
    to: &str,
) -> Result<(), TranslateError> {
    let to = to.to_lowercase();
    if translator.supported_languages().iter().any(|l| *l == to) {
        Ok(())
    } else {
        Err(TranslateError::UnsupportedLanguage(to))
    }
}
