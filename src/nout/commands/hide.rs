use super::note_mut;
use crate::collection::Collection;
use crate::error::Result;
use crate::model::NoteId;

/// Flips the hidden flag and returns the new value.
///
/// Hiding only affects the Notes view. On a note inside a folder the flag is
/// stored but stays invisible until the note moves back to the default
/// category.
pub fn toggle(collection: &mut Collection, id: &NoteId) -> Result<bool> {
    let note = note_mut(collection, id)?;
    note.is_hidden = !note.is_hidden;
    note.touch();
    tracing::debug!(note = %id, is_hidden = note.is_hidden, "hidden toggled");
    Ok(note.is_hidden)
}
