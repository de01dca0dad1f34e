use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::VoiceError;

/// Client for an OpenAI-compatible `audio/transcriptions` endpoint
#[derive(Clone)]
pub struct SpeechRecognizer {
    client: reqwest::Client,
    url: String,
    model: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    #[serde(default)]
    text: String,
}

impl SpeechRecognizer {
    pub fn new(url: String, model: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            model,
            api_key,
        }
    }

    /// Transcribe a WAV recording
    pub async fn recognize(&self, wav: Vec<u8>) -> Result<String, VoiceError> {
        let file = Part::bytes(wav)
            .file_name("speech.wav")
            .mime_str("audio/wav")
            .map_err(unavailable)?;
        let form = Form::new()
            .part("file", file)
            .text("model", self.model.clone());

        let mut request = self.client.post(&self.url).multipart(form);
        if !self.api_key.is_empty() {
            request = request.bearer_auth(&self.api_key);
        }

        let response = request.send().await.map_err(unavailable)?;
        if !response.status().is_success() {
            return Err(VoiceError::RecognitionServiceUnavailable(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body: TranscriptionResponse = response.json().await.map_err(unavailable)?;
        transcript(body.text)
    }
}

fn unavailable(e: reqwest::Error) -> VoiceError {
    VoiceError::RecognitionServiceUnavailable(e.to_string())
}

fn transcript(text: String) -> Result<String, VoiceError> {
    let text = text.trim();
    if text.is_empty() {
        Err(VoiceError::NoSpeechDetected)
    } else {
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_transcript_means_no_speech() {
        assert_eq!(transcript("  \n".to_string()), Err(VoiceError::NoSpeechDetected));
        assert_eq!(transcript(" happy ".to_string()).unwrap(), "happy");
    }

    #[test]
    fn response_without_text_is_blank() {
        let body: TranscriptionResponse = serde_json::from_str("{}").unwrap();
        assert!(body.text.is_empty());
    }

    #[tokio::test]
    async fn unreachable_service_is_reported() {
        let recognizer = SpeechRecognizer::new(
            "http://127.0.0.1:9/v1/audio/transcriptions".to_string(),
            "whisper-1".to_string(),
            String::new(),
        );
        let result = recognizer.recognize(vec![0u8; 44]).await;
        assert!(matches!(
            result,
            Err(VoiceError::RecognitionServiceUnavailable(_))
        ));
    }
}
