use kanal::AsyncSender;
use lexis_core::preprocess::{DefaultPreprocessor, Preprocessor};
use lexis_types::{AppEvent, Notice};

use crate::services::Services;

pub async fn handle_speak(
    text: &str,
    services: &Services,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let word = match DefaultPreprocessor.process(text) {
        Ok(word) => word,
        Err(e) => {
            app_to_ui_tx.send(Notice::warning(e.to_string()).into()).await?;
            return Ok(());
        }
    };

    let Some(voice) = &services.voice else {
        app_to_ui_tx
            .send(Notice::error("Speech output error: voice output disabled").into())
            .await?;
        return Ok(());
    };

    tracing::debug!("Speaking '{}'", word);
    if let Err(e) = voice.speak(&word).await {
        tracing::warn!("Speech output failed: {}", e);
        app_to_ui_tx
            .send(Notice::error(format!("Speech output error: {e}")).into())
            .await?;
    }

    Ok(())
}
