//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The engine owns the truth; chrome reads `CanvasViewState`, a mirror kept
//! current by folding in the engine's actions.

pub mod canvas_view;
