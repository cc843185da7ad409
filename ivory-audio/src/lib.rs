//! Note sample playback for Ivory.
//!
//! `AudioHandle` loads one WAV sample per note and plays them through the
//! default cpal output device on a dedicated thread.

mod audio_thread;
pub mod commands;
pub mod error;
pub mod handle;
pub mod output;
pub mod paths;
pub mod samples;
pub mod voices;

pub use error::AudioError;
pub use handle::AudioHandle;
pub use samples::{Sample, SampleBank};

use ivory_types::NoteName;

/// Anything that can sound a note.
///
/// Implementations never fail: a note without a sample, a missing output
/// device or a dead audio thread all result in silence.
pub trait NotePlayer {
    /// Restart `note` from its beginning at `volume` (0..=1).
    fn play_note(&mut self, note: NoteName, volume: f32);
}
