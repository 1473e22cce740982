//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window, the pane webviews, and their layout.

mod core;
mod event_handler;
mod init;
mod polling;
mod shutdown;
mod types;

pub use core::TesseraApp;
