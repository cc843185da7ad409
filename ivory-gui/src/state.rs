//! State management for the GUI.
//!
//! Wraps AppState and AudioHandle for use with Dioxus signals.

use ivory_audio::{paths, AudioHandle};
use ivory_core::config::Config;
use ivory_core::dispatch::LocalDispatcher;
use ivory_core::state::AppState;
use ivory_types::{Action, DispatchResult, Dispatcher};

/// Shared state wrapper for the GUI.
///
/// Wrapped in a Dioxus Signal for reactivity.
pub struct SharedState {
    pub app: AppState,
    pub audio: AudioHandle,
}

impl SharedState {
    /// Load config and samples, build the keyboard and activate lesson 0.
    pub fn init() -> Self {
        let config = Config::load();
        let app = AppState::new_with_defaults(config.defaults());
        let sounds_dir = paths::sounds_dir(config.sounds_dir().as_deref());
        let audio = AudioHandle::new(&sounds_dir);
        if audio.bank().is_empty() {
            log::warn!(
                target: "audio",
                "no note samples found in {}; keys will be silent",
                sounds_dir.display()
            );
        }

        Self { app, audio }
    }

    /// Dispatch an action to the core.
    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        LocalDispatcher::new(&mut self.app, &mut self.audio).dispatch(&action)
    }
}
