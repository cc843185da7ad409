//! AudioHandle: main-thread interface to note playback.
//!
//! Owns the command channel and the shared sample bank. The output stream and
//! voice table live on the audio thread.

use std::path::Path;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::Sender;

use ivory_types::NoteName;

use crate::audio_thread::AudioThread;
use crate::commands::AudioCmd;
use crate::samples::SampleBank;
use crate::NotePlayer;

/// Main-thread handle to the audio subsystem.
pub struct AudioHandle {
    cmd_tx: Sender<AudioCmd>,
    bank: Arc<SampleBank>,
    join_handle: Option<JoinHandle<()>>,
}

impl AudioHandle {
    /// Load every note sample from `sounds_dir` and start the output thread.
    pub fn new(sounds_dir: &Path) -> Self {
        Self::with_bank(Arc::new(SampleBank::load(sounds_dir)))
    }

    pub fn with_bank(bank: Arc<SampleBank>) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded();
        let thread_bank = Arc::clone(&bank);

        let join_handle = thread::Builder::new()
            .name("ivory-audio".to_string())
            .spawn(move || AudioThread::new(cmd_rx, thread_bank).run());

        let join_handle = match join_handle {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::error!(target: "audio", "could not spawn audio thread: {}", e);
                None
            }
        };

        Self {
            cmd_tx,
            bank,
            join_handle,
        }
    }

    pub fn bank(&self) -> &SampleBank {
        &self.bank
    }

    /// Fire-and-forget: send a command and log if the audio thread is gone.
    fn send(&self, cmd: AudioCmd) {
        if self.cmd_tx.send(cmd).is_err() {
            log::debug!(target: "audio", "command dropped: audio thread disconnected");
        }
    }
}

impl NotePlayer for AudioHandle {
    fn play_note(&mut self, note: NoteName, volume: f32) {
        if !self.bank.contains(note) {
            log::debug!(target: "audio", "no sample loaded for {}", note);
            return;
        }
        self.send(AudioCmd::Trigger { note, volume });
    }
}

impl Drop for AudioHandle {
    fn drop(&mut self) {
        self.send(AudioCmd::Shutdown);
        if let Some(handle) = self.join_handle.take() {
            if handle.join().is_err() {
                log::error!(target: "audio", "audio thread panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::Sample;

    #[test]
    fn missing_sample_is_silent_and_drop_joins() {
        let mut handle = AudioHandle::with_bank(Arc::new(SampleBank::new()));
        handle.play_note(NoteName::A, 0.2);
        assert!(handle.bank().is_empty());
        drop(handle);
    }

    #[test]
    fn loaded_sample_triggers_without_blocking() {
        let mut bank = SampleBank::new();
        bank.insert(
            NoteName::C,
            Sample {
                frames: vec![0.0; 32],
                sample_rate: 44_100,
            },
        );
        let mut handle = AudioHandle::with_bank(Arc::new(bank));
        handle.play_note(NoteName::C, 0.5);
        handle.play_note(NoteName::C, 0.5);
        handle.play_note(NoteName::D, 0.5);
        drop(handle);
    }

    #[test]
    fn new_with_missing_dir_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let handle = AudioHandle::new(&dir.path().join("sounds"));
        assert!(handle.bank().is_empty());
    }
}
