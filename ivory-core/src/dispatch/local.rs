//! LocalDispatcher: Dispatcher implementation for local execution.

use ivory_audio::NotePlayer;
use ivory_types::{Action, DispatchResult, Dispatcher};

use crate::state::AppState;

use super::dispatch_action;

/// Local dispatcher that executes actions directly on in-process state.
///
/// Borrows the application state and the note player for the duration of one
/// or more dispatches.
pub struct LocalDispatcher<'a> {
    pub state: &'a mut AppState,
    pub player: &'a mut dyn NotePlayer,
}

impl<'a> LocalDispatcher<'a> {
    pub fn new(state: &'a mut AppState, player: &'a mut dyn NotePlayer) -> Self {
        Self { state, player }
    }
}

impl<'a> Dispatcher for LocalDispatcher<'a> {
    fn dispatch(&mut self, action: &Action) -> DispatchResult {
        dispatch_action(action, self.state, self.player)
    }
}
