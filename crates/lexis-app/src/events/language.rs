use kanal::AsyncSender;
use lexis_core::preprocess::{DefaultPreprocessor, Preprocessor};
use lexis_core::present::{render_translation, render_translation_error};
use lexis_translator::TranslateError;
use lexis_types::{AppEvent, TargetLanguage};

use crate::services::Services;
use crate::state::AppState;

/// Switch the target language and re-translate the current search text
pub async fn handle_language_selected(
    language: TargetLanguage,
    text: &str,
    state: &AppState,
    services: &Services,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    *state.target_language.write().await = language;
    tracing::info!("Target language: {}", language.label());

    match DefaultPreprocessor.process(text) {
        Ok(word) => send_translation(&word, state, services, app_to_ui_tx).await,
        Err(_) => Ok(()),
    }
}

/// Translation failures end up in the translation panel, never as errors
pub async fn send_translation(
    word: &str,
    state: &AppState,
    services: &Services,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let target = *state.target_language.read().await;

    let text = match &services.translator {
        Some(translator) => match translator
            .translate(
                word,
                state.config.translator.from_lang.clone(),
                target.code().to_string(),
            )
            .await
        {
            Ok(translation) => {
                tracing::debug!(
                    "Translated '{}' -> '{}' via {}",
                    word,
                    translation.text,
                    translation.provider
                );
                render_translation(&translation.text, translation.pronunciation.as_deref())
            }
            Err(e) => {
                tracing::warn!("Translation of '{}' to {} failed: {}", word, target, e);
                render_translation_error(&e)
            }
        },
        None => render_translation_error(&TranslateError::Disabled),
    };

    app_to_ui_tx.send(AppEvent::ShowTranslation(text)).await?;
    Ok(())
}
