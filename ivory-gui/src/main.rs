//! Ivory GUI - piano practice app
//!
//! A Dioxus desktop window with a one-octave keyboard, a lesson list and
//! per-note sample playback.

mod app;
mod components;
mod dispatch;
mod state;

fn main() {
    env_logger::init();
    log::info!("Starting Ivory");
    dioxus::launch(app::App);
}
