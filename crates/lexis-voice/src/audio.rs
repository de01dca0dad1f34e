//! 16-bit little-endian mono PCM helpers.

/// Frame length used for speech detection
pub const FRAME_MS: u32 = 30;

pub fn samples_from_bytes(bytes: &[u8]) -> Vec<i16> {
    bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}

/// Root mean square energy, 0.0 for silence or no samples
pub fn rms(samples: &[i16]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }

    let sum: f64 = samples.iter().map(|&s| f64::from(s) * f64::from(s)).sum();
    (sum / samples.len() as f64).sqrt() as f32
}

/// Energy level above which a frame counts as speech
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyThreshold(pub f32);

impl EnergyThreshold {
    /// Calibrate from a recording of the room without speech
    pub fn calibrate(ambient: &[i16], minimum: f32, ratio: f32) -> Self {
        let ambient_energy = rms(ambient);
        Self((ambient_energy * ratio).max(minimum))
    }

    /// True if any frame of `samples` rises above the threshold
    pub fn detects_speech(&self, samples: &[i16], sample_rate: u32) -> bool {
        let frame_len = (sample_rate * FRAME_MS / 1000).max(1) as usize;
        samples.chunks(frame_len).any(|frame| rms(frame) > self.0)
    }
}

/// Wrap raw PCM in a canonical 44-byte-header WAV container
pub fn wav_from_pcm(pcm: &[u8], sample_rate: u32) -> Vec<u8> {
    const CHANNELS: u16 = 1;
    const BITS_PER_SAMPLE: u16 = 16;

    let block_align = CHANNELS * BITS_PER_SAMPLE / 8;
    let byte_rate = sample_rate * u32::from(block_align);
    let data_len = pcm.len() as u32;

    let mut wav = Vec::with_capacity(44 + pcm.len());
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_len).to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&CHANNELS.to_le_bytes());
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&block_align.to_le_bytes());
    wav.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_len.to_le_bytes());
    wav.extend_from_slice(pcm);
    wav
}
