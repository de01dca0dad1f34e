use std::time::Duration;

use kanal::AsyncSender;
use lexis_types::{AppEvent, Notice};
use lexis_voice::VoiceError;

use crate::events::search::handle_search;
use crate::services::Services;
use crate::state::AppState;

/// Listen once, put the transcript in the search field and search it
pub async fn handle_voice_input(
    state: &AppState,
    services: &Services,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(voice) = &services.voice else {
        app_to_ui_tx
            .send(Notice::error("Voice input error: voice input disabled").into())
            .await?;
        return Ok(());
    };

    app_to_ui_tx
        .send(AppEvent::VoiceStatus { listening: true })
        .await?;
    let timeout = Duration::from_secs(u64::from(state.config.voice.listen_timeout_seconds));
    let result = voice.listen_once(timeout).await;
    app_to_ui_tx
        .send(AppEvent::VoiceStatus { listening: false })
        .await?;

    match result {
        Ok(text) => {
            tracing::info!("Voice input: '{}'", text);
            app_to_ui_tx.send(AppEvent::SetSearchText(text.clone())).await?;
            handle_search(&text, state, services, app_to_ui_tx).await
        }
        Err(e) => {
            tracing::warn!("Voice input failed: {}", e);
            app_to_ui_tx
                .send(Notice::error(voice_error_message(&e)).into())
                .await?;
            Ok(())
        }
    }
}

fn voice_error_message(error: &VoiceError) -> String {
    match error {
        VoiceError::NoSpeechDetected => error.to_string(),
        VoiceError::RecognitionServiceUnavailable(_) => {
            "Could not request results from speech recognition service".to_string()
        }
        VoiceError::DeviceError(detail) => format!("Voice input error: {detail}"),
    }
}
