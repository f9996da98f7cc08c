//! Feature-Handler, die vom Controller für Commands aufgerufen werden.

pub mod editing;
pub mod history;
pub mod road;
