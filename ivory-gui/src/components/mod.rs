//! UI components for the Ivory GUI.

mod keyboard;
mod lesson_content;
mod lesson_list;
mod lesson_nav;
mod volume;

pub mod common;

pub use keyboard::PianoKeyboard;
pub use lesson_content::LessonContent;
pub use lesson_list::LessonList;
pub use lesson_nav::LessonNav;
pub use volume::VolumeControl;
