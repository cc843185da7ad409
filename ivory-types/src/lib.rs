//! # ivory-types
//!
//! Shared type definitions for Ivory: the note and lesson catalogs, the
//! keyboard model, session state, actions and the pure reducers over them.

pub mod action;
mod dispatch;
pub mod keyboard;
pub mod lesson;
pub mod note;
pub mod reduce;
pub mod session;

pub use action::*;
pub use dispatch::Dispatcher;
pub use keyboard::{KeyState, Keyboard};
pub use lesson::{Lesson, LessonView, LESSONS};
pub use note::{KeyColor, NoteName};
pub use session::{normalize_volume, SessionState, DEFAULT_VOLUME};
