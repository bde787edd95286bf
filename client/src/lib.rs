//! # shapeboard
//!
//! Leptos + WASM front-end for the shape board: a toolbar to pick and add
//! shapes and to switch between draw and cursor mode, a full-window canvas
//! driven by the `canvas` crate's `Engine`, and a status bar.

pub mod app;
pub mod bridge;
pub mod components;
pub mod state;
