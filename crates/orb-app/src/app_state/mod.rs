//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop: one window, one scene, redrawn continuously.

mod core;
mod event_handler;
mod init;
mod input;
mod render;

pub use self::core::OrbApp;
