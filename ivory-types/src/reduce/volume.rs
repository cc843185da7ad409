use crate::session::normalize_volume;
use crate::{SessionState, VolumeAction};

pub(super) fn reduce(action: &VolumeAction, session: &mut SessionState) -> bool {
    match action {
        VolumeAction::Set(raw) => match normalize_volume(*raw) {
            Some(volume) => {
                session.volume = volume;
                true
            }
            None => false,
        },
    }
}
