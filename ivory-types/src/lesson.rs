use crate::NoteName;

/// A static lesson: a title, body markup and the keys it points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lesson {
    pub title: &'static str,
    /// Rendered as inner HTML of the lesson content area.
    pub body: &'static str,
    pub highlighted: &'static [NoteName],
}

const FIVE_FINGER: &[NoteName] = &[
    NoteName::C,
    NoteName::D,
    NoteName::E,
    NoteName::F,
    NoteName::G,
];

/// The lesson catalog, in presentation order.
pub const LESSONS: &[Lesson] = &[
    Lesson {
        title: "Lesson 1: Piano Overview",
        body: "<p>Welcome to the piano! It has white and black keys. White keys are natural notes, black keys are sharps/flats.</p>\
               <p>Try pressing keys in practice to hear their sounds.</p>",
        highlighted: &[],
    },
    Lesson {
        title: "Lesson 2: Finger Placement",
        body: "<p>Place your right thumb on the middle C (the white key near the middle).</p>\
               <p>Use fingers 1-5 for the white keys going right.</p>",
        highlighted: FIVE_FINGER,
    },
    Lesson {
        title: "Lesson 3: Reading Notes",
        body: "<p>Learn to read music notes like C, D, E, F, G on the piano.</p>\
               <p>Try playing simple songs in the Songs tab.</p>",
        highlighted: FIVE_FINGER,
    },
];

/// Derived render data for the active lesson.
///
/// Computed fresh from session state on every render; nothing here is cached.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonView {
    pub index: usize,
    pub title: &'static str,
    pub body: &'static str,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub highlighted: &'static [NoteName],
}

impl LessonView {
    /// Returns None only when `lessons` is empty or the index is stale.
    pub fn of(current: usize, lessons: &[Lesson]) -> Option<Self> {
        let lesson = lessons.get(current)?;
        Some(Self {
            index: current,
            title: lesson.title,
            body: lesson.body,
            prev_enabled: current > 0,
            next_enabled: current + 1 < lessons.len(),
            highlighted: lesson.highlighted,
        })
    }
}
