use crate::{Keyboard, Lesson, LessonAction, SessionState};

pub(super) fn reduce(
    action: &LessonAction,
    session: &mut SessionState,
    keyboard: &mut Keyboard,
    lessons: &[Lesson],
) -> bool {
    let current = session.current_lesson;
    match action {
        LessonAction::GoTo(index) => go_to(*index, session, keyboard, lessons),
        LessonAction::Prev => {
            if current == 0 {
                return false;
            }
            go_to(current - 1, session, keyboard, lessons)
        }
        LessonAction::Next => {
            if current + 1 >= lessons.len() {
                return false;
            }
            go_to(current + 1, session, keyboard, lessons)
        }
    }
}

/// Activate lesson `index` and sync the keyboard highlight to it.
///
/// Out-of-range indices are ignored. Content, button enablement and the list
/// marker are derived from `session.current_lesson` at render time.
pub fn go_to(
    index: usize,
    session: &mut SessionState,
    keyboard: &mut Keyboard,
    lessons: &[Lesson],
) -> bool {
    let Some(lesson) = lessons.get(index) else {
        log::debug!(target: "lesson", "ignoring out-of-range lesson {}", index);
        return false;
    };
    session.current_lesson = index;
    keyboard.highlight(lesson.highlighted);
    log::debug!(target: "lesson", "active lesson {}: {}", index, lesson.title);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NoteName, LESSONS};

    fn setup() -> (SessionState, Keyboard) {
        let mut session = SessionState::default();
        let mut keyboard = Keyboard::build(&NoteName::ALL);
        go_to(0, &mut session, &mut keyboard, LESSONS);
        (session, keyboard)
    }

    #[test]
    fn next_walks_forward_and_stops() {
        let (mut s, mut kb) = setup();
        assert!(reduce(&LessonAction::Next, &mut s, &mut kb, LESSONS));
        assert_eq!(s.current_lesson, 1);
        assert!(reduce(&LessonAction::Next, &mut s, &mut kb, LESSONS));
        assert_eq!(s.current_lesson, 2);
        assert!(!reduce(&LessonAction::Next, &mut s, &mut kb, LESSONS));
        assert_eq!(s.current_lesson, 2);
    }

    #[test]
    fn prev_at_start_is_noop() {
        let (mut s, mut kb) = setup();
        let before = kb.clone();
        assert!(!reduce(&LessonAction::Prev, &mut s, &mut kb, LESSONS));
        assert_eq!(s.current_lesson, 0);
        assert_eq!(kb, before);
    }

    #[test]
    fn go_to_out_of_range_is_noop() {
        let (mut s, mut kb) = setup();
        assert!(!reduce(&LessonAction::GoTo(99), &mut s, &mut kb, LESSONS));
        assert_eq!(s.current_lesson, 0);
    }

    #[test]
    fn go_to_twice_is_idempotent() {
        let (mut s, mut kb) = setup();
        go_to(1, &mut s, &mut kb, LESSONS);
        let (s1, kb1) = (s, kb.clone());
        go_to(1, &mut s, &mut kb, LESSONS);
        assert_eq!(s, s1);
        assert_eq!(kb, kb1);
    }

    #[test]
    fn highlight_follows_lesson() {
        let (mut s, mut kb) = setup();
        assert_eq!(kb.highlighted().count(), 0);
        go_to(1, &mut s, &mut kb, LESSONS);
        assert_eq!(kb.highlighted().collect::<Vec<_>>(), LESSONS[1].highlighted);
        go_to(0, &mut s, &mut kb, LESSONS);
        assert_eq!(kb.highlighted().count(), 0);
    }

    #[test]
    fn empty_catalog_ignores_everything() {
        let mut s = SessionState::default();
        let mut kb = Keyboard::build(&NoteName::ALL);
        assert!(!reduce(&LessonAction::Next, &mut s, &mut kb, &[]));
        assert!(!reduce(&LessonAction::GoTo(0), &mut s, &mut kb, &[]));
    }
}
