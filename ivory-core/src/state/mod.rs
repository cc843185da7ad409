use std::time::Duration;

use ivory_types::reduce::go_to;
use ivory_types::{Keyboard, Lesson, LessonView, NoteName, SessionState, DEFAULT_VOLUME, LESSONS};

use crate::config::DEFAULT_PRESS_MS;

/// Startup values taken from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Defaults {
    pub volume: f32,
    pub press_duration: Duration,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            volume: DEFAULT_VOLUME,
            press_duration: Duration::from_millis(DEFAULT_PRESS_MS),
        }
    }
}

/// Top-level application state, owned by the GUI and mutated only through
/// `dispatch_action`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub session: SessionState,
    pub keyboard: Keyboard,
    pub lessons: &'static [Lesson],
    /// How long a clicked key stays pressed before its release fires.
    pub press_duration: Duration,
}

impl AppState {
    pub fn new() -> Self {
        Self::new_with_defaults(Defaults::default())
    }

    pub fn new_with_defaults(defaults: Defaults) -> Self {
        Self::with_lessons(LESSONS, defaults)
    }

    /// Build the keyboard and activate the first lesson.
    pub fn with_lessons(lessons: &'static [Lesson], defaults: Defaults) -> Self {
        let mut state = Self {
            session: SessionState::with_volume(defaults.volume),
            keyboard: Keyboard::default(),
            lessons,
            press_duration: defaults.press_duration,
        };
        state.rebuild_keyboard();
        state
    }

    /// Render data for the active lesson.
    pub fn lesson_view(&self) -> Option<LessonView> {
        LessonView::of(self.session.current_lesson, self.lessons)
    }

    /// Rebuild every key from the note catalog, then restore the active
    /// lesson's highlight.
    pub fn rebuild_keyboard(&mut self) {
        self.keyboard.rebuild(&NoteName::ALL);
        let current = self.session.current_lesson;
        go_to(current, &mut self.session, &mut self.keyboard, self.lessons);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
