//! # Command Layer
//!
//! Business logic for every engine operation. Each command takes the
//! collection by `&mut` and returns a plain Rust value; nothing here touches
//! storage or the terminal. [`crate::api::NoutApi`] runs commands against a
//! working copy and persists the result, so a command may bail out with an
//! error at any point without leaving a half-applied change behind.
//!
//! Commands that find nothing to change leave the collection untouched; the
//! API layer uses that to skip redundant writes.

pub mod create;
pub mod delete;
pub mod favorite;
pub mod folders;
pub mod hide;
pub mod move_notes;
pub mod purge;
pub mod restore;
pub mod update;

use crate::collection::Collection;
use crate::error::{NoutError, Result};
use crate::model::{Note, NoteId};

pub(crate) fn note_mut<'a>(collection: &'a mut Collection, id: &NoteId) -> Result<&'a mut Note> {
    collection
        .note_mut(id)
        .ok_or(NoutError::NoteNotFound(*id))
}
