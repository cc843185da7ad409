//! # ivory-core
//!
//! Application state, configuration and action dispatch for Ivory,
//! independent of any UI framework.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ivory_core::config::Config;
//! use ivory_core::dispatch::dispatch_action;
//! use ivory_core::state::AppState;
//! use ivory_audio::{paths, AudioHandle};
//!
//! let config = Config::load();
//! let mut state = AppState::new_with_defaults(config.defaults());
//! let mut audio = AudioHandle::new(&paths::sounds_dir(config.sounds_dir().as_deref()));
//!
//! let result = dispatch_action(&action, &mut state, &mut audio);
//! // Schedule result.release, if any, then dispatch KeyAction::Release.
//! ```
//!
//! ## Module Overview
//!
//! - [`state`] — `AppState`: session, keyboard model and the lesson catalog
//! - [`dispatch`] — `dispatch_action()`, the single entry point for state mutation
//! - [`config`] — TOML configuration loading (embedded defaults + user override)

pub mod config;
pub mod dispatch;
pub mod state;
