use std::env;

use lexis_types::TargetLanguage;
use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::history::HistoryConfig;
use self::translator::TranslatorConfig;
use self::ui::UiConfig;
use self::voice::VoiceConfig;

pub mod dictionary;
pub mod history;
pub mod translator;
pub mod ui;
pub mod voice;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub translator: TranslatorConfig,
    pub voice: VoiceConfig,
    pub history: HistoryConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Environment variables win over profile values
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(path) = var("LEXIS_LEXICON_PATH") {
            self.dictionary.lexicon_path = Some(path);
        }

        if let Some(path) = var("LEXIS_HISTORY_FILE") {
            self.history.path = path;
        }

        if let Some(provider) = var("LEXIS_TRANSLATOR") {
            self.translator.provider = provider.to_lowercase();
        }

        if let Some(api_key) = var("LEXIS_TRANSLATOR_API_KEY") {
            self.translator.api_key = api_key;
        }

        if let Some(lang) = var("LEXIS_TARGET_LANG").and_then(|v| TargetLanguage::from_code(&v)) {
            self.translator.to_lang = lang;
        }

        if let Some(enabled) = var("LEXIS_VOICE_ENABLED").and_then(|v| v.parse().ok()) {
            self.voice.enabled = enabled;
        }

        if let Some(url) = var("LEXIS_RECOGNIZER_URL") {
            self.voice.recognizer_url = url;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn partial_profile_fills_defaults() {
        let json = r#"{ "translator": { "provider": "deepl", "to_lang": "ja" } }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.translator.provider, "deepl");
        assert_eq!(config.translator.to_lang, TargetLanguage::Japanese);
        assert_eq!(config.translator.from_lang, "auto");
        assert_eq!(config.history.capacity, 50);
        assert_eq!(config.voice.listen_timeout_seconds, 5);
        assert!(config.dictionary.enabled);
    }

    #[test]
    fn overrides_replace_profile_values() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("LEXIS_HISTORY_FILE", "/tmp/history.json"),
            ("LEXIS_TARGET_LANG", "fr"),
            ("LEXIS_VOICE_ENABLED", "false"),
            ("LEXIS_TRANSLATOR", "DeepL"),
        ]);

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.history.path, "/tmp/history.json");
        assert_eq!(config.translator.to_lang, TargetLanguage::French);
        assert_eq!(config.translator.provider, "deepl");
        assert!(!config.voice.enabled);
        assert!(config.dictionary.lexicon_path.is_none());
    }

    #[test]
    fn unknown_target_language_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "LEXIS_TARGET_LANG").then(|| "xx".to_string()));
        assert_eq!(config.translator.to_lang, TargetLanguage::Spanish);
    }

    #[test]
    fn shipped_config_matches_defaults() {
        let config: Config = serde_json::from_str(include_str!("../../../config.json")).unwrap();
        let defaults = Config::default();

        assert_eq!(config.translator.provider, defaults.translator.provider);
        assert_eq!(config.voice.capture_args, defaults.voice.capture_args);
        assert_eq!(config.history.path, defaults.history.path);
        assert_eq!(config.ui.title, defaults.ui.title);
    }
}
