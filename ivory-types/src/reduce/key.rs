use crate::{KeyAction, Keyboard};

pub(super) fn reduce(action: &KeyAction, keyboard: &mut Keyboard) -> bool {
    match action {
        KeyAction::Press(note) => keyboard.press(*note),
        KeyAction::Release(note) => keyboard.release(*note),
    }
}
