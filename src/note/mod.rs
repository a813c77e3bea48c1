//! Note module for notegen
//!
//! Request/response model, category handling and the note service.

mod model;
mod service;

pub use model::{Category, NoteRequest, NoteResponse, NoteSource, ValidNote};
pub use service::{fallback_note, NoteService};
