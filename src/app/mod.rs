//! Application-Layer: Controller, State, Events und Handler.
//!
//! Dünne Schicht zwischen Host-Eingaben und dem Spline-Modell: Picking,
//! Undo/Redo und Command-Log. Enthält keine Geometrie-Logik.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod state;

pub use command_log::CommandLog;
pub use controller::PathController;
pub use events::{PathCommand, PathIntent};
pub use history::{EditHistory, Snapshot};
pub use state::PathEditorState;
