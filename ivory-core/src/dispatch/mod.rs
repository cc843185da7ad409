mod local;

pub use local::LocalDispatcher;

use ivory_audio::NotePlayer;
use ivory_types::reduce::reduce_action;
use ivory_types::{Action, DispatchResult, KeyAction};

use crate::state::AppState;

/// Dispatch an action. Returns a DispatchResult describing side effects for the UI layer.
///
/// Key presses trigger the note on `player` at the current session volume
/// before the pressed flag is set; a missing sample never blocks the press.
pub fn dispatch_action(
    action: &Action,
    state: &mut AppState,
    player: &mut dyn NotePlayer,
) -> DispatchResult {
    log::debug!(target: "dispatch", "{:?}", action);

    if let Action::Key(KeyAction::Press(note)) = action {
        player.play_note(*note, state.session.volume);
        if !reduce(action, state) {
            log::debug!(target: "dispatch", "no key for {}", note);
            return DispatchResult::changed(false);
        }
        return DispatchResult::with_release(*note, state.press_duration);
    }

    DispatchResult::changed(reduce(action, state))
}

fn reduce(action: &Action, state: &mut AppState) -> bool {
    reduce_action(action, &mut state.session, &mut state.keyboard, state.lessons)
}
