//! Dispatch abstraction.

use crate::{Action, DispatchResult};

/// Trait for dispatching actions to the state engine.
///
/// The GUI only talks to this trait, so tests can drive it with a fake
/// audio backend.
pub trait Dispatcher {
    /// Dispatch an action and return the result.
    fn dispatch(&mut self, action: &Action) -> DispatchResult;
}
