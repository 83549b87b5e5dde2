use super::note_mut;
use crate::collection::Collection;
use crate::error::Result;
use crate::model::NoteId;

/// Flips the favorite flag and returns the new value.
pub fn toggle(collection: &mut Collection, id: &NoteId) -> Result<bool> {
    let note = note_mut(collection, id)?;
    note.is_fav = !note.is_fav;
    note.touch();
    tracing::debug!(note = %id, is_fav = note.is_fav, "favorite toggled");
    Ok(note.is_fav)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::error::NoutError;
    use crate::view::View;

    #[test]
    fn toggling_twice_restores_original_value() {
        let mut collection = Collection::new();
        let id = create::run(&mut collection, &View::Notes).unwrap();

        assert!(toggle(&mut collection, &id).unwrap());
        assert!(View::Favorites.includes(collection.note(&id).unwrap()));
        assert!(!toggle(&mut collection, &id).unwrap());
        assert!(!collection.note(&id).unwrap().is_fav);
    }

    #[test]
    fn unknown_note_is_not_found() {
        let mut collection = Collection::new();
        let missing = NoteId::new();
        let err = toggle(&mut collection, &missing).unwrap_err();
        assert!(matches!(err, NoutError::NoteNotFound(id) if id == missing));
        assert!(collection.is_empty());
    }
}
