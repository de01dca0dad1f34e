use kanal::AsyncSender;
use lexis_core::preprocess::{DefaultPreprocessor, Preprocessor};
use lexis_core::present::render_record;
use lexis_types::{AppEvent, Notice};

use crate::events::history_lines;
use crate::events::language::send_translation;
use crate::services::Services;
use crate::state::AppState;

/// Look up the word, then record it in history and translate it.
/// Nothing but the status line changes when the lookup fails.
pub async fn handle_search(
    text: &str,
    state: &AppState,
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

    let record = match services.aggregator.lookup(&word) {
        Ok(record) => record,
        Err(e) => {
            tracing::info!("Lookup failed: {}", e);
            app_to_ui_tx.send(Notice::error(e.to_string()).into()).await?;
            return Ok(());
        }
    };
    tracing::debug!("Found {} senses for '{}'", record.definitions().len(), word);

    app_to_ui_tx
        .send(AppEvent::ShowDefinition(render_record(&record)))
        .await?;

    state
        .history
        .lock()
        .await
        .append(record.word(), record.primary_definition());
    app_to_ui_tx
        .send(AppEvent::ShowHistory(history_lines(state).await))
        .await?;

    send_translation(&word, state, services, app_to_ui_tx).await
}
