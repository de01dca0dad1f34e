use std::path::Path;
use std::sync::Arc;

use lexis_config::Config;
use lexis_config::dictionary::DictionaryConfig;
use lexis_config::translator::TranslatorConfig;
use lexis_config::voice::VoiceConfig;
use lexis_core::LexicalAggregator;
use lexis_lexicon_wordnet::{WordNet, WordNetLoader};
use lexis_translator::{DeepLTranslator, GoogleTranslator, Translator};
use lexis_voice::{CommandVoice, VoiceBridge};

/// Long-lived handles shared by the event handlers
pub struct Services {
    pub aggregator: LexicalAggregator,
    pub translator: Option<Arc<dyn Translator>>,
    pub voice: Option<Arc<dyn VoiceBridge>>,
}

impl Services {
    pub fn from_config(config: &Config) -> Self {
        Self {
            aggregator: LexicalAggregator::new(Arc::new(build_lexicon(&config.dictionary))),
            translator: build_translator(&config.translator),
            voice: build_voice(&config.voice),
        }
    }
}

fn build_lexicon(config: &DictionaryConfig) -> WordNet {
    if !config.enabled {
        tracing::warn!("Dictionary disabled, using empty lexicon");
        return WordNet::new();
    }

    WordNetLoader::load_with_additional(
        config.lexicon_path.as_deref().map(Path::new),
        &config.additional_paths,
    )
}

fn build_translator(config: &TranslatorConfig) -> Option<Arc<dyn Translator>> {
    if !config.enabled {
        tracing::info!("Translation disabled");
        return None;
    }

    match config.provider.as_str() {
        "google" => Some(Arc::new(GoogleTranslator::new(config.api_url.clone()))),
        "deepl" if !config.api_key.is_empty() => Some(Arc::new(DeepLTranslator::new(
            config.api_key.clone(),
            config.api_url.clone(),
        ))),
        "deepl" => {
            tracing::warn!("DeepL selected without an API key, translation disabled");
            None
        }
        other => {
            tracing::warn!("Unknown translation provider '{}', translation disabled", other);
            None
        }
    }
}

fn build_voice(config: &VoiceConfig) -> Option<Arc<dyn VoiceBridge>> {
    if !config.enabled {
        tracing::info!("Voice input disabled");
        return None;
    }

    Some(Arc::new(CommandVoice::new(config.clone())))
}
