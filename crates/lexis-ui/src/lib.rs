use std::rc::Rc;

use kanal::AsyncReceiver;
use lexis_types::{AppEvent, TargetLanguage};
use slint::{SharedString, VecModel};

pub mod bridge;
pub mod events;

pub use bridge::UiBridge;

slint::include_modules!();

pub struct UiOptions {
    pub title: String,
    pub language: TargetLanguage,
}

/// Run the dictionary window until it is closed.
///
/// Must be called on the main thread from within a tokio runtime context:
/// backend events are forwarded by a tokio task.
pub fn run_ui(
    options: UiOptions,
    bridge: UiBridge,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
) -> anyhow::Result<()> {
    let window = MainWindow::new()?;
    window.set_window_title(options.title.into());

    let labels: Vec<SharedString> = TargetLanguage::ALL
        .iter()
        .map(|lang| lang.label().into())
        .collect();
    window.set_languages(Rc::new(VecModel::from(labels)).into());
    window.set_language_index(options.language.index() as i32);

    {
        let bridge = bridge.clone();
        window.on_search(move |text| bridge.send(AppEvent::Search(text.to_string())));
    }

    {
        let bridge = bridge.clone();
        window.on_voice_input(move || bridge.send(AppEvent::VoiceInput));
    }

    {
        let bridge = bridge.clone();
        window.on_speak(move |text| bridge.send(AppEvent::Speak(text.to_string())));
    }

    {
        let bridge = bridge.clone();
        window.on_language_changed(move |index, text| {
            match usize::try_from(index).ok().and_then(TargetLanguage::from_index) {
                Some(language) => bridge.send(AppEvent::LanguageSelected {
                    language,
                    text: text.to_string(),
                }),
                None => tracing::warn!("[SLINT] Unknown language index {}", index),
            }
        });
    }

    let forwarder = tokio::spawn(bridge::forward_from_backend(
        window.as_weak(),
        app_to_ui_rx,
    ));

    let result = window.run();
    tracing::info!("Window closed");

    forwarder.abort();
    bridge.send(AppEvent::Shutdown);

    Ok(result?)
}
