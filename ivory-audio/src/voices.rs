//! Per-note playback voices.
//!
//! Each note owns exactly one voice. Triggering a note rewinds its voice to
//! the start of the sample at the given volume; other voices keep playing
//! untouched. The output callback sums all active voices.

use std::sync::Arc;

use ivory_types::NoteName;

use crate::samples::SampleBank;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Voice {
    /// Read position in sample frames (fractional for rate conversion).
    pub position: f64,
    pub volume: f32,
    pub active: bool,
}

pub struct VoiceTable {
    bank: Arc<SampleBank>,
    voices: [Voice; 12],
    output_rate: u32,
}

impl VoiceTable {
    pub fn new(bank: Arc<SampleBank>, output_rate: u32) -> Self {
        Self {
            bank,
            voices: [Voice::default(); 12],
            output_rate: output_rate.max(1),
        }
    }

    pub fn voice(&self, note: NoteName) -> &Voice {
        &self.voices[note.index()]
    }

    pub fn set_output_rate(&mut self, rate: u32) {
        self.output_rate = rate.max(1);
    }

    /// Restart `note` from frame 0. Returns false if the note has no playable sample.
    pub fn trigger(&mut self, note: NoteName, volume: f32) -> bool {
        match self.bank.get(note) {
            Some(sample) if sample.sample_rate > 0 && !sample.is_empty() => {}
            _ => return false,
        }
        self.voices[note.index()] = Voice {
            position: 0.0,
            volume,
            active: true,
        };
        true
    }

    /// Fill an interleaved buffer with the sum of all active voices.
    pub fn render(&mut self, out: &mut [f32], channels: usize) {
        let channels = channels.max(1);
        out.fill(0.0);

        for note in NoteName::ALL {
            let voice = &mut self.voices[note.index()];
            if !voice.active {
                continue;
            }
            let Some(sample) = self.bank.get(note) else {
                voice.active = false;
                continue;
            };
            let step = sample.sample_rate as f64 / self.output_rate as f64;

            for frame in out.chunks_mut(channels) {
                let idx = voice.position as usize;
                if idx >= sample.frames.len() {
                    voice.active = false;
                    break;
                }
                let value = sample.frames[idx] * voice.volume;
                for s in frame.iter_mut() {
                    *s += value;
                }
                voice.position += step;
            }
            if voice.position as usize >= sample.frames.len() {
                voice.active = false;
            }
        }

        for s in out.iter_mut() {
            *s = s.clamp(-1.0, 1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::Sample;

    fn bank() -> Arc<SampleBank> {
        let mut bank = SampleBank::new();
        bank.insert(
            NoteName::A,
            Sample {
                frames: vec![0.5; 8],
                sample_rate: 100,
            },
        );
        bank.insert(
            NoteName::C,
            Sample {
                frames: vec![0.25; 4],
                sample_rate: 100,
            },
        );
        Arc::new(bank)
    }

    #[test]
    fn trigger_plays_from_start_at_volume() {
        let mut table = VoiceTable::new(bank(), 100);
        assert!(table.trigger(NoteName::A, 0.2));
        let mut out = [0.0f32; 2];
        table.render(&mut out, 1);
        assert!((out[0] - 0.1).abs() < 1e-6);
        assert!((table.voice(NoteName::A).position - 2.0).abs() < 1e-9);
    }

    #[test]
    fn retrigger_rewinds() {
        let mut table = VoiceTable::new(bank(), 100);
        table.trigger(NoteName::A, 1.0);
        let mut out = [0.0f32; 5];
        table.render(&mut out, 1);
        assert!(table.voice(NoteName::A).position > 0.0);
        table.trigger(NoteName::A, 0.5);
        assert_eq!(table.voice(NoteName::A).position, 0.0);
        assert!((table.voice(NoteName::A).volume - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn missing_sample_does_not_trigger() {
        let mut table = VoiceTable::new(bank(), 100);
        assert!(!table.trigger(NoteName::B, 1.0));
        assert!(!table.voice(NoteName::B).active);
    }

    #[test]
    fn zero_rate_sample_never_sounds() {
        let mut bank = SampleBank::new();
        bank.insert(
            NoteName::A,
            Sample {
                frames: vec![0.5; 4],
                sample_rate: 0,
            },
        );
        let mut table = VoiceTable::new(Arc::new(bank), 48_000);
        assert!(!table.trigger(NoteName::A, 1.0));
        let mut out = [0.0f32; 4];
        table.render(&mut out, 1);
        assert_eq!(out, [0.0; 4]);
        assert!(!table.voice(NoteName::A).active);
    }

    #[test]
    fn voices_are_independent_and_summed() {
        let mut table = VoiceTable::new(bank(), 100);
        table.trigger(NoteName::A, 1.0);
        table.trigger(NoteName::C, 1.0);
        let mut out = [0.0f32; 2];
        table.render(&mut out, 1);
        assert!((out[0] - 0.75).abs() < 1e-6);

        // Retriggering C leaves A's cursor alone
        table.trigger(NoteName::C, 0.1);
        assert!((table.voice(NoteName::A).position - 2.0).abs() < 1e-9);
        assert!((table.voice(NoteName::A).volume - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn voice_stops_at_sample_end() {
        let mut table = VoiceTable::new(bank(), 100);
        table.trigger(NoteName::C, 1.0);
        let mut out = [0.0f32; 6];
        table.render(&mut out, 1);
        assert_eq!(&out[4..], &[0.0, 0.0]);
        assert!(!table.voice(NoteName::C).active);
    }

    #[test]
    fn stereo_duplicates_mono_frames() {
        let mut table = VoiceTable::new(bank(), 100);
        table.trigger(NoteName::C, 1.0);
        let mut out = [0.0f32; 4];
        table.render(&mut out, 2);
        assert_eq!(out, [0.25, 0.25, 0.25, 0.25]);
    }

    #[test]
    fn rate_conversion_steps_through_sample() {
        // Output at twice the sample rate: each sample frame lasts two output frames
        let mut table = VoiceTable::new(bank(), 200);
        table.trigger(NoteName::C, 1.0);
        let mut out = [0.0f32; 8];
        table.render(&mut out, 1);
        assert!(out.iter().all(|&s| (s - 0.25).abs() < 1e-6));
        assert!(!table.voice(NoteName::C).active);
    }
}
