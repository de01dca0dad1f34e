use kanal::{AsyncReceiver, Sender};
use lexis_types::AppEvent;
use slint::Weak;

use crate::MainWindow;
use crate::events::handle_event;

/// Bridge between the sync UI thread and the async backend
#[derive(Clone)]
pub struct UiBridge {
    to_backend: Sender<AppEvent>,
}

impl UiBridge {
    pub fn new(to_backend: Sender<AppEvent>) -> Self {
        Self { to_backend }
    }

    /// Called from UI callbacks, never awaits
    pub fn send(&self, event: AppEvent) {
        tracing::debug!("[SLINT] -> backend: {:?}", std::mem::discriminant(&event));
        if let Err(e) = self.to_backend.send(event) {
            tracing::error!("[SLINT] Backend channel closed: {}", e);
        }
    }
}

/// Apply backend events on the UI thread, in the order they were sent
pub async fn forward_from_backend(window: Weak<MainWindow>, app_to_ui_rx: AsyncReceiver<AppEvent>) {
    while let Ok(event) = app_to_ui_rx.recv().await {
        if window
            .upgrade_in_event_loop(move |w| handle_event(&w, event))
            .is_err()
        {
            tracing::debug!("[SLINT] Event loop stopped, dropping backend events");
            break;
        }
    }
}
