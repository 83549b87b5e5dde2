use super::note_mut;
use crate::collection::Collection;
use crate::error::Result;
use crate::model::NoteId;

/// Replaces the note's content with the editor's document as-is.
pub fn run(collection: &mut Collection, id: &NoteId, text: String) -> Result<()> {
    let note = note_mut(collection, id)?;
    if note.text != text {
        note.text = text;
        note.touch();
        tracing::debug!(note = %id, len = note.text.len(), "note text updated");
    }
    Ok(())
}
