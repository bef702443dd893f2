use anyhow::{Result, anyhow};
use macroquad::audio::{PlaySoundParams, Sound, load_sound_from_bytes, play_sound};

/// The two game cues, generated as short sine tones at startup so no asset
/// files are needed.
pub struct SoundBank {
    eat: Sound,
    game_over: Sound,
    volume: f32,
}

impl SoundBank {
    pub async fn load(volume: f32) -> Result<Self> {
        let eat = load_sound_from_bytes(&sine_wav(880.0, 0.08, 0.6))
            .await
            .map_err(|e| anyhow!("decoding eat cue: {e:?}"))?;
        let game_over = load_sound_from_bytes(&sine_wav(150.0, 0.5, 0.7))
            .await
            .map_err(|e| anyhow!("decoding game-over cue: {e:?}"))?;
        Ok(Self {
            eat,
            game_over,
            volume: volume.clamp(0.0, 1.0),
        })
    }

    pub fn play_eat(&self) {
        self.play(&self.eat);
    }

    pub fn play_game_over(&self) {
        self.play(&self.game_over);
    }

    fn play(&self, sound: &Sound) {
        play_sound(
            sound,
            PlaySoundParams {
                looped: false,
                volume: self.volume,
            },
        );
    }
}

/// PCM16 mono WAV containing a single sine tone.
fn sine_wav(frequency_hz: f32, duration_seconds: f32, volume: f32) -> Vec<u8> {
    let sample_rate: u32 = 44100;
    let num_samples: u32 = (duration_seconds * sample_rate as f32) as u32;
    let mut data: Vec<u8> = Vec::with_capacity((num_samples as usize) * 2 + 44);

    let block_align: u16 = 2; // mono 16-bit
    let byte_rate: u32 = sample_rate * block_align as u32;
    let data_size: u32 = num_samples * 2;
    let chunk_size: u32 = 36 + data_size;

    // RIFF header
    data.extend_from_slice(b"RIFF");
    data.extend_from_slice(&chunk_size.to_le_bytes());
    data.extend_from_slice(b"WAVE");
    // fmt chunk
    data.extend_from_slice(b"fmt ");
    data.extend_from_slice(&16u32.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes()); // PCM format
    data.extend_from_slice(&1u16.to_le_bytes()); // channels
    data.extend_from_slice(&sample_rate.to_le_bytes());
    data.extend_from_slice(&byte_rate.to_le_bytes());
    data.extend_from_slice(&block_align.to_le_bytes());
    data.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    // data chunk
    data.extend_from_slice(b"data");
    data.extend_from_slice(&data_size.to_le_bytes());

    let amplitude = volume.clamp(0.0, 1.0) * 0.7;
    for n in 0..num_samples {
        let t = n as f32 / sample_rate as f32;
        let sample =
            (amplitude * (std::f32::consts::TAU * frequency_hz * t).sin() * i16::MAX as f32) as i16;
        data.extend_from_slice(&sample.to_le_bytes());
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wav_header_and_length() {
        let wav = sine_wav(440.0, 0.1, 0.5);
        let samples = (0.1f32 * 44100.0) as usize;

        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[12..16], b"fmt ");
        assert_eq!(&wav[36..40], b"data");
        assert_eq!(wav.len(), 44 + samples * 2);

        let data_size = u32::from_le_bytes(wav[40..44].try_into().unwrap());
        assert_eq!(data_size as usize, samples * 2);
    }

    #[test]
    fn test_wav_starts_at_zero_amplitude() {
        let wav = sine_wav(440.0, 0.01, 1.0);
        let first = i16::from_le_bytes(wav[44..46].try_into().unwrap());
        assert_eq!(first, 0);
    }
}
