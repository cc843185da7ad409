//! Note sample loading.
//!
//! Every note's WAV file is decoded once at startup into mono `f32` frames.
//! Files that are missing or unreadable are skipped; the note then plays
//! silence.

use std::collections::HashMap;
use std::path::Path;

use ivory_types::NoteName;

use crate::error::AudioError;
use crate::paths::sample_path;

/// Decoded mono sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub frames: Vec<f32>,
    pub sample_rate: u32,
}

impl Sample {
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Decode a WAV file, downmixing all channels to mono.
pub fn load_sample(path: &Path) -> Result<Sample, AudioError> {
    let wav_err = |source: hound::Error| AudioError::Wav {
        path: path.to_path_buf(),
        source,
    };
    let reader = hound::WavReader::open(path).map_err(wav_err)?;
    let spec = reader.spec();
    if spec.sample_rate == 0 {
        return Err(AudioError::ZeroSampleRate(path.to_path_buf()));
    }
    let channels = spec.channels.max(1) as usize;

    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Int => {
            let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|s| s as f32 / max_val))
                .collect::<Result<_, _>>()
                .map_err(wav_err)?
        }
        hound::SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<Result<_, _>>()
            .map_err(wav_err)?,
    };

    let frames: Vec<f32> = interleaved
        .chunks(channels)
        .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
        .collect();

    if frames.is_empty() {
        return Err(AudioError::EmptySample(path.to_path_buf()));
    }

    Ok(Sample {
        frames,
        sample_rate: spec.sample_rate,
    })
}

/// One optional sample per note.
#[derive(Debug, Clone, Default)]
pub struct SampleBank {
    samples: HashMap<NoteName, Sample>,
}

impl SampleBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `<dir>/<note>.wav` for every note in the catalog.
    pub fn load(dir: &Path) -> Self {
        let mut bank = Self::new();
        for note in NoteName::ALL {
            let path = sample_path(dir, note);
            if !path.exists() {
                log::debug!(target: "audio", "no sample for {} at {}", note, path.display());
                continue;
            }
            match load_sample(&path) {
                Ok(sample) => bank.insert(note, sample),
                Err(e) => log::warn!(target: "audio", "skipping sample: {}", e),
            }
        }
        log::info!(
            target: "audio",
            "loaded {}/{} note samples from {}",
            bank.len(),
            NoteName::ALL.len(),
            dir.display()
        );
        bank
    }

    pub fn insert(&mut self, note: NoteName, sample: Sample) {
        self.samples.insert(note, sample);
    }

    pub fn get(&self, note: NoteName) -> Option<&Sample> {
        self.samples.get(&note)
    }

    pub fn contains(&self, note: NoteName) -> bool {
        self.samples.contains_key(&note)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_wav(path: &Path, spec: hound::WavSpec, samples: &[i16]) {
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        for &s in samples {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();
    }

    fn mono_spec() -> hound::WavSpec {
        hound::WavSpec {
            channels: 1,
            sample_rate: 22050,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        }
    }

    #[test]
    fn load_int_mono() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("C.wav");
        write_wav(&path, mono_spec(), &[0, 16384, -16384, 0]);

        let sample = load_sample(&path).unwrap();
        assert_eq!(sample.sample_rate, 22050);
        assert_eq!(sample.frames.len(), 4);
        assert!((sample.frames[1] - 0.5).abs() < 1e-4);
        assert!((sample.frames[2] + 0.5).abs() < 1e-4);
    }

    #[test]
    fn stereo_is_downmixed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("D.wav");
        let spec = hound::WavSpec {
            channels: 2,
            ..mono_spec()
        };
        write_wav(&path, spec, &[16384, 0, 16384, 16384]);

        let sample = load_sample(&path).unwrap();
        assert_eq!(sample.frames.len(), 2);
        assert!((sample.frames[0] - 0.25).abs() < 1e-4);
        assert!((sample.frames[1] - 0.5).abs() < 1e-4);
    }

    #[test]
    fn float_samples_pass_through() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("E.wav");
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 48000,
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Float,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        writer.write_sample(0.75f32).unwrap();
        writer.finalize().unwrap();

        let sample = load_sample(&path).unwrap();
        assert_eq!(sample.frames, vec![0.75]);
    }

    #[test]
    fn empty_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("F.wav");
        write_wav(&path, mono_spec(), &[]);
        assert!(matches!(load_sample(&path), Err(AudioError::EmptySample(_))));
    }

    /// Rewrite the `fmt ` chunk's sample rate field of a hound-written file.
    fn patch_sample_rate(path: &Path, rate: u32) {
        let mut bytes = std::fs::read(path).unwrap();
        let fmt = bytes.windows(4).position(|w| w == b"fmt ").unwrap();
        // chunk id, size, format tag, channels, then the rate
        let at = fmt + 4 + 4 + 2 + 2;
        bytes[at..at + 4].copy_from_slice(&rate.to_le_bytes());
        std::fs::write(path, bytes).unwrap();
    }

    #[test]
    fn zero_sample_rate_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("G.wav");
        write_wav(&path, mono_spec(), &[16384, 16384, 16384]);
        patch_sample_rate(&path, 0);

        assert!(load_sample(&path).is_err());
        let bank = SampleBank::load(dir.path());
        assert!(!bank.contains(NoteName::G));
    }

    #[test]
    fn bank_skips_missing_and_garbage() {
        let dir = tempfile::tempdir().unwrap();
        write_wav(&dir.path().join("A.wav"), mono_spec(), &[100, 200]);
        write_wav(&dir.path().join("C#.wav"), mono_spec(), &[100]);
        std::fs::write(dir.path().join("B.wav"), b"not a wav file").unwrap();

        let bank = SampleBank::load(dir.path());
        assert_eq!(bank.len(), 2);
        assert!(bank.contains(NoteName::A));
        assert!(bank.contains(NoteName::Cs));
        assert!(!bank.contains(NoteName::B));
        assert!(!bank.contains(NoteName::G));
    }

    #[test]
    fn bank_from_missing_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let bank = SampleBank::load(&dir.path().join("nope"));
        assert!(bank.is_empty());
    }
}
