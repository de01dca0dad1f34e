use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender, Sender};
use lexis_types::AppEvent;
use lexis_ui::UiBridge;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::services::Services;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    /// Sync side for UI callbacks, async side for the backend
    pub ui_to_app: (Sender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        let (ui_tx, ui_rx) = kanal::bounded(64);
        Self {
            app_to_ui: kanal::bounded_async(256),
            ui_to_app: (ui_tx, ui_rx.to_async()),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn ui_bridge(&self) -> UiBridge {
        UiBridge::new(self.channels.ui_to_app.0.clone())
    }

    pub fn ui_receiver(&self) -> AsyncReceiver<AppEvent> {
        self.channels.app_to_ui.1.clone()
    }

    /// Load the lexicon and providers off the async workers, then run the
    /// event loop
    pub fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        let state = self.state.clone();
        let services = async move {
            let config = state.config.clone();
            let services = tokio::task::spawn_blocking(move || Services::from_config(&config)).await?;
            Ok::<_, anyhow::Error>(Arc::new(services))
        };
        self.spawn_with(services)
    }

    /// Run the event loop with prepared services
    #[cfg(test)]
    pub fn spawn_tasks_with(&self, services: Arc<Services>) -> JoinSet<anyhow::Result<()>> {
        self.spawn_with(async move { Ok(services) })
    }

    fn spawn_with(
        &self,
        services: impl Future<Output = anyhow::Result<Arc<Services>>> + Send + 'static,
    ) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        let state = self.state.clone();
        let ui_to_app_rx = self.channels.ui_to_app.1.clone();
        let app_to_ui_tx = self.channels.app_to_ui.0.clone();
        let cancel_token = self.cancel_token.child_token();

        tasks.spawn(async move {
            let services = services.await?;
            event_loop(state, services, ui_to_app_rx, app_to_ui_tx, cancel_token).await
        });

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
