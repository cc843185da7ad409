//! Pure state-mutation reducers.
//!
//! These functions are the single source of truth for action → state
//! mutations. They touch `SessionState` and `Keyboard` only; audio playback
//! and timers belong to the caller.

mod key;
mod lesson;
mod volume;

pub use lesson::go_to;

use crate::{Action, Keyboard, Lesson, SessionState};

/// Apply an action's state mutations.
/// Returns true if state changed, false for a no-op (out-of-range lesson,
/// unknown key, non-finite volume, navigation at a boundary).
pub fn reduce_action(
    action: &Action,
    session: &mut SessionState,
    keyboard: &mut Keyboard,
    lessons: &[Lesson],
) -> bool {
    match action {
        Action::Key(a) => key::reduce(a, keyboard),
        Action::Lesson(a) => lesson::reduce(a, session, keyboard, lessons),
        Action::Volume(a) => volume::reduce(a, session),
    }
}
