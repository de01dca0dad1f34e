use lexis_types::TargetLanguage;
use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_provider() -> String {
    "google".to_string()
}

fn default_from_lang() -> String {
    "auto".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// "google" or "deepl"
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_from_lang")]
    pub from_lang: String,
    #[serde(default)]
    pub to_lang: TargetLanguage,
    #[serde(default)]
    pub api_key: String,
    /// Overrides the provider's endpoint
    #[serde(default)]
    pub api_url: Option<String>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            provider: default_provider(),
            from_lang: default_from_lang(),
            to_lang: TargetLanguage::default(),
            api_key: String::new(),
            api_url: None,
        }
    }
}
