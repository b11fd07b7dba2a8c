//! Library entry for sheetnav exposing core logic for integration tests.

pub mod app;
pub mod args;
pub mod config;
pub mod events;
pub mod index;
pub mod sources;
pub mod state;
pub mod ui;
pub mod util;
