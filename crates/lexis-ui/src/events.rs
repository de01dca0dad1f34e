use lexis_types::AppEvent;

use crate::MainWindow;

pub fn handle_event(window: &MainWindow, event: AppEvent) {
    match event {
        AppEvent::BackendReady { history } => {
            tracing::debug!("[SLINT] Backend ready, {} history lines", history.len());
            window.set_history_text(history_text(&history).into());
            window.set_ready(true);
            window.set_status_text("Ready".into());
        }
        AppEvent::ShowDefinition(text) => {
            window.set_definition_text(text.into());
            window.set_status_text("".into());
        }
        AppEvent::ShowTranslation(text) => {
            window.set_translation_text(text.into());
        }
        AppEvent::ShowHistory(lines) => {
            window.set_history_text(history_text(&lines).into());
        }
        AppEvent::SetSearchText(text) => {
            window.set_search_text(text.into());
        }
        AppEvent::VoiceStatus { listening } => {
            window.set_listening(listening);
            window.set_status_text(if listening { "Listening..." } else { "" }.into());
        }
        AppEvent::Notice(notice) => {
            tracing::debug!("[SLINT] Notice: {}", notice.display());
            window.set_status_text(notice.display().into());
        }
        // Requests travel the other way
        AppEvent::Search(_)
        | AppEvent::VoiceInput
        | AppEvent::Speak(_)
        | AppEvent::LanguageSelected { .. }
        | AppEvent::Shutdown => {}
    }
}

/// One history entry per line
fn history_text(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_lines_are_newline_terminated() {
        let lines = vec!["b".to_string(), "a".to_string()];
        assert_eq!(history_text(&lines), "b\na\n");
        assert_eq!(history_text(&[]), "");
    }
}
