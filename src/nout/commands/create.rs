use crate::collection::Collection;
use crate::error::{NoutError, Result};
use crate::model::{Location, Note, NoteId};
use crate::view::View;

/// Creates an empty note placed according to `view`.
///
/// Folder views store the note in that folder. Every other view, Favorites
/// included, stores it in the default category without any flags set.
pub fn run(collection: &mut Collection, view: &View) -> Result<NoteId> {
    let location = view.storage_location();
    if let Location::Folder(folder_id) = location {
        if !collection.contains_folder(&folder_id) {
            return Err(NoutError::FolderNotFound(folder_id));
        }
    }

    let note = Note::new(location);
    let id = note.id;
    collection.insert_note(note);
    tracing::debug!(note = %id, location = ?location, "note created");
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::folders;
    use crate::model::{FolderId, DEFAULT_CATEGORY};

    #[test]
    fn creates_default_category_note_from_notes_view() {
        let mut collection = Collection::new();
        let id = run(&mut collection, &View::Notes).unwrap();

        let note = collection.note(&id).unwrap();
        assert_eq!(note.category(), DEFAULT_CATEGORY);
        assert_eq!(note.folder_id(), None);
        assert_eq!(note.text, "");
        assert!(!note.is_trash);
        assert!(!note.is_fav);
    }

    #[test]
    fn favorites_view_does_not_favorite_new_note() {
        let mut collection = Collection::new();
        let id = run(&mut collection, &View::Favorites).unwrap();

        let note = collection.note(&id).unwrap();
        assert!(!note.is_fav);
        assert_eq!(note.category(), DEFAULT_CATEGORY);
        assert!(!View::Favorites.includes(note));
    }

    #[test]
    fn folder_view_places_note_in_folder() {
        let mut collection = Collection::new();
        let folder = folders::add(&mut collection, "Work").unwrap();
        let id = run(&mut collection, &View::Folder(folder)).unwrap();

        let note = collection.note(&id).unwrap();
        assert_eq!(note.folder_id(), Some(folder));
        assert_eq!(note.category(), "");
    }

    #[test]
    fn unknown_folder_is_rejected() {
        let mut collection = Collection::new();
        let missing = FolderId::new();
        let err = run(&mut collection, &View::Folder(missing)).unwrap_err();
        assert!(matches!(err, NoutError::FolderNotFound(id) if id == missing));
        assert!(collection.is_empty());
    }

    #[test]
    fn ids_are_unique() {
        let mut collection = Collection::new();
        let a = run(&mut collection, &View::Notes).unwrap();
        let b = run(&mut collection, &View::Notes).unwrap();
        assert_ne!(a, b);
        assert_eq!(collection.notes().count(), 2);
    }
}
