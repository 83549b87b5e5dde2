use crate::collection::Collection;
use crate::model::NoteId;

/// Takes a note out of the trash. Returns false when there was nothing to do
/// (unknown id or note not trashed).
pub fn run(collection: &mut Collection, id: &NoteId) -> bool {
    match collection.note_mut(id) {
        Some(note) if note.is_trash => {
            note.is_trash = false;
            note.touch();
            tracing::debug!(note = %id, "note restored");
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, delete, folders, hide};
    use crate::view::View;

    #[test]
    fn trash_then_restore_returns_note_to_its_view() {
        let mut collection = Collection::new();
        let folder = folders::add(&mut collection, "Work").unwrap();
        let in_folder = create::run(&mut collection, &View::Folder(folder)).unwrap();
        let plain = create::run(&mut collection, &View::Notes).unwrap();

        delete::run(&mut collection, &[in_folder, plain], false);
        assert!(run(&mut collection, &in_folder));
        assert!(run(&mut collection, &plain));

        assert!(View::Folder(folder).includes(collection.note(&in_folder).unwrap()));
        assert!(View::Notes.includes(collection.note(&plain).unwrap()));
        assert!(collection.trashed_ids().is_empty());
    }

    #[test]
    fn restore_keeps_hidden_flag() {
        let mut collection = Collection::new();
        let id = create::run(&mut collection, &View::Notes).unwrap();
        hide::toggle(&mut collection, &id).unwrap();
        delete::run(&mut collection, &[id], false);

        run(&mut collection, &id);
        let note = collection.note(&id).unwrap();
        assert!(note.is_hidden);
        assert!(!View::Notes.includes(note));
    }

    #[test]
    fn restoring_live_or_missing_note_is_a_noop() {
        let mut collection = Collection::new();
        let id = create::run(&mut collection, &View::Notes).unwrap();
        let before = collection.clone();

        assert!(!run(&mut collection, &id));
        assert!(!run(&mut collection, &NoteId::new()));
        assert_eq!(collection, before);
    }
}
