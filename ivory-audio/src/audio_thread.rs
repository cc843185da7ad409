use std::sync::{Arc, Mutex};

use cpal::Stream;
use crossbeam_channel::Receiver;

use crate::commands::AudioCmd;
use crate::output::open_default_output;
use crate::samples::SampleBank;
use crate::voices::VoiceTable;

/// Fallback rate until the device reports its own.
const DEFAULT_OUTPUT_RATE: u32 = 44_100;

/// Owns the output stream and applies commands to the shared voice table.
///
/// cpal streams are not `Send` on every backend, so the stream is created and
/// dropped on this thread.
pub(crate) struct AudioThread {
    cmd_rx: Receiver<AudioCmd>,
    voices: Arc<Mutex<VoiceTable>>,
    stream: Option<Stream>,
}

impl AudioThread {
    pub(crate) fn new(cmd_rx: Receiver<AudioCmd>, bank: Arc<SampleBank>) -> Self {
        let voices = Arc::new(Mutex::new(VoiceTable::new(bank, DEFAULT_OUTPUT_RATE)));
        let stream = match open_default_output(Arc::clone(&voices)) {
            Ok(stream) => Some(stream),
            Err(e) => {
                log::warn!(target: "audio", "audio output unavailable, notes will be silent: {}", e);
                None
            }
        };
        Self {
            cmd_rx,
            voices,
            stream,
        }
    }

    pub(crate) fn run(self) {
        while let Ok(cmd) = self.cmd_rx.recv() {
            if self.handle_cmd(cmd) {
                break;
            }
        }
        drop(self.stream);
        log::debug!(target: "audio", "audio thread exiting");
    }

    /// Returns true when the thread should stop.
    fn handle_cmd(&self, cmd: AudioCmd) -> bool {
        match cmd {
            AudioCmd::Trigger { note, volume } => {
                if self.stream.is_none() {
                    return false;
                }
                match self.voices.lock() {
                    Ok(mut table) => {
                        table.trigger(note, volume);
                    }
                    Err(_) => log::error!(target: "audio", "voice table poisoned"),
                }
                false
            }
            AudioCmd::Shutdown => true,
        }
    }
}
