//! Canvas rendering and input engine for the shape board.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of the drawing surface: translating raw DOM input events
//! into shape and camera mutations, maintaining camera state for pan/zoom,
//! hit-testing shapes, and rendering the scene. The host UI layer is
//! responsible only for wiring DOM events to the engine and reflecting the
//! resulting [`engine::Action`]s in its chrome.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Shape types and the ordered shape store |
//! | [`camera`] | Pan/zoom camera, pointer-anchored zoom, coordinate conversions |
//! | [`input`] | Interaction mode, pending shape selection, and the gesture state machine |
//! | [`hit`] | Hit-testing against shapes |
//! | [`render`] | Scene rendering onto a 2D context |
//! | [`consts`] | Shared numeric constants (zoom step, spawn range, shape sizes and colors) |

pub mod camera;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod error;
pub mod hit;
pub mod input;
pub mod render;

pub use error::CanvasError;
