//! Dispatch helpers for components.

use dioxus::prelude::*;
use ivory_types::{Action, KeyAction};

use crate::state::SharedState;

/// Hook to get the shared state signal for dispatching actions.
pub fn use_dispatch() -> Signal<SharedState> {
    use_context::<Signal<SharedState>>()
}

/// Extension trait for dispatching actions on the SharedState signal.
pub trait DispatchExt {
    fn dispatch_action(&mut self, action: Action);
}

impl DispatchExt for Signal<SharedState> {
    /// Dispatch, then schedule the key release a press asks for.
    ///
    /// Every press gets its own timer; timers are never cancelled.
    fn dispatch_action(&mut self, action: Action) {
        let result = self.write().dispatch(action);

        if let Some(release) = result.release {
            let mut state = *self;
            spawn(async move {
                async_std::task::sleep(release.after).await;
                state
                    .write()
                    .dispatch(Action::Key(KeyAction::Release(release.note)));
            });
        }
    }
}
