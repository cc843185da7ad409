use ivory_types::NoteName;

/// Commands sent from the UI thread to the audio thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AudioCmd {
    /// Restart `note` from the beginning at `volume`.
    Trigger { note: NoteName, volume: f32 },
    Shutdown,
}
