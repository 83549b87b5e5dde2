use super::note_mut;
use crate::collection::Collection;
use crate::error::{NoutError, Result};
use crate::model::{FolderId, Location, NoteId};

/// Moves a note into `folder_id`, or back to the default category when `None`.
pub fn run(collection: &mut Collection, id: &NoteId, folder_id: Option<FolderId>) -> Result<()> {
    if let Some(folder_id) = folder_id {
        if !collection.contains_folder(&folder_id) {
            return Err(NoutError::FolderNotFound(folder_id));
        }
    }

    let note = note_mut(collection, id)?;
    let target = Location::from(folder_id);
    if note.location != target {
        note.location = target;
        note.touch();
        tracing::debug!(note = %id, folder = ?folder_id, "note moved");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, folders};
    use crate::model::DEFAULT_CATEGORY;
    use crate::view::View;

    #[test]
    fn moving_out_of_folder_restores_default_category() {
        let mut collection = Collection::new();
        let folder = folders::add(&mut collection, "F1").unwrap();
        let id = create::run(&mut collection, &View::Folder(folder)).unwrap();

        run(&mut collection, &id, None).unwrap();

        let note = collection.note(&id).unwrap();
        assert_eq!(note.folder_id(), None);
        assert_eq!(note.category(), DEFAULT_CATEGORY);
        assert!(!View::Folder(folder).includes(note));
        assert!(View::Notes.includes(note));
    }

    #[test]
    fn moving_into_folder_clears_category() {
        let mut collection = Collection::new();
        let folder = folders::add(&mut collection, "F1").unwrap();
        let id = create::run(&mut collection, &View::Notes).unwrap();

        run(&mut collection, &id, Some(folder)).unwrap();

        let note = collection.note(&id).unwrap();
        assert_eq!(note.folder_id(), Some(folder));
        assert_eq!(note.category(), "");
        assert!(!View::Notes.includes(note));
    }

    #[test]
    fn moves_between_folders() {
        let mut collection = Collection::new();
        let a = folders::add(&mut collection, "A").unwrap();
        let b = folders::add(&mut collection, "B").unwrap();
        let id = create::run(&mut collection, &View::Folder(a)).unwrap();

        run(&mut collection, &id, Some(b)).unwrap();
        assert_eq!(collection.note(&id).unwrap().folder_id(), Some(b));
    }

    #[test]
    fn unknown_folder_or_note_is_not_found() {
        let mut collection = Collection::new();
        let id = create::run(&mut collection, &View::Notes).unwrap();
        let before = collection.clone();

        assert!(matches!(
            run(&mut collection, &id, Some(FolderId::new())).unwrap_err(),
            NoutError::FolderNotFound(_)
        ));
        assert!(matches!(
            run(&mut collection, &NoteId::new(), None).unwrap_err(),
            NoutError::NoteNotFound(_)
        ));
        assert_eq!(collection, before);
    }
}
