use crate::collection::Collection;
use crate::model::NoteId;

/// Trashes the given notes, or erases them when `permanent` is set.
///
/// Unknown ids are ignored and notes already in the trash are left as they
/// are. Returns the ids that actually changed.
pub fn run(collection: &mut Collection, ids: &[NoteId], permanent: bool) -> Vec<NoteId> {
    let mut affected = Vec::new();
    for id in ids {
        if permanent {
            if collection.remove_note(id).is_some() {
                affected.push(*id);
            }
        } else if let Some(note) = collection.note_mut(id) {
            if !note.is_trash {
                note.is_trash = true;
                note.touch();
                affected.push(*id);
            }
        }
    }
    if !affected.is_empty() {
        tracing::debug!(notes = ?affected, permanent, "notes deleted");
    }
    affected
}
