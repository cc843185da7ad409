//! Action types for the dispatch system.
//!
//! Actions represent user intents coming from the UI. Each UI control maps to
//! exactly one variant.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::NoteName;

/// Keyboard interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyAction {
    /// Key clicked: play the note and show the press state.
    Press(NoteName),
    /// Press timer elapsed.
    Release(NoteName),
}

/// Lesson navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LessonAction {
    GoTo(usize),
    Prev,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum VolumeAction {
    Set(f32),
}

/// Top-level action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Action {
    Key(KeyAction),
    Lesson(LessonAction),
    Volume(VolumeAction),
}

impl From<KeyAction> for Action {
    fn from(a: KeyAction) -> Self {
        Action::Key(a)
    }
}

impl From<LessonAction> for Action {
    fn from(a: LessonAction) -> Self {
        Action::Lesson(a)
    }
}

impl From<VolumeAction> for Action {
    fn from(a: VolumeAction) -> Self {
        Action::Volume(a)
    }
}

/// A key release the UI must schedule after a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledRelease {
    pub note: NoteName,
    pub after: Duration,
}

/// Side effects of a dispatched action that the UI layer has to carry out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchResult {
    /// True if any state changed (views should re-render).
    pub changed: bool,
    /// Set for key presses: fire `KeyAction::Release` after the delay.
    pub release: Option<ScheduledRelease>,
}

impl DispatchResult {
    pub fn changed(changed: bool) -> Self {
        Self {
            changed,
            ..Self::default()
        }
    }

    pub fn with_release(note: NoteName, after: Duration) -> Self {
        Self {
            changed: true,
            release: Some(ScheduledRelease { note, after }),
        }
    }
}
