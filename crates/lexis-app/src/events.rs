use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexis_core::present::render_history;
use lexis_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::services::Services;
use crate::state::AppState;

pub mod language;
pub mod search;
pub mod speak;
pub mod voice_input;

use language::handle_language_selected;
use search::handle_search;
use speak::handle_speak;
use voice_input::handle_voice_input;

/// App's main loop. Handles one event to completion before taking the next.
pub async fn event_loop(
    state: Arc<AppState>,
    services: Arc<Services>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel_token: CancellationToken,
) -> anyhow::Result<()> {
    let history = history_lines(&state).await;
    app_to_ui_tx.send(AppEvent::BackendReady { history }).await?;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel_token.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                break;
            }
            event = ui_to_app_rx.recv() => event?,
        };

        tracing::debug!("[EVENT_LOOP] Event received: {:?}", event);
        if event == AppEvent::Shutdown {
            tracing::info!("[EVENT_LOOP] Shutdown requested");
            break;
        }

        handle_events(&state, &services, &app_to_ui_tx, event).await?;
    }

    Ok(())
}

async fn handle_events(
    state: &AppState,
    services: &Services,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::Search(text) => {
            handle_search(&text, state, services, app_to_ui_tx).await?;
        }
        AppEvent::VoiceInput => {
            handle_voice_input(state, services, app_to_ui_tx).await?;
        }
        AppEvent::Speak(text) => {
            handle_speak(&text, services, app_to_ui_tx).await?;
        }
        AppEvent::LanguageSelected { language, text } => {
            handle_language_selected(language, &text, state, services, app_to_ui_tx).await?;
        }
        AppEvent::Shutdown => {}
        // UI-only events, ignore in backend
        AppEvent::BackendReady { .. }
        | AppEvent::ShowDefinition(_)
        | AppEvent::ShowTranslation(_)
        | AppEvent::ShowHistory(_)
        | AppEvent::SetSearchText(_)
        | AppEvent::VoiceStatus { .. }
        | AppEvent::Notice(_) => {}
    }

    Ok(())
}

/// History panel lines, newest first
pub(crate) async fn history_lines(state: &AppState) -> Vec<String> {
    let history = state.history.lock().await;
    render_history(history.entries().iter(), state.config.ui.history_preview_chars)
}
