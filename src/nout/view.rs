//! # Views and auto-selection
//!
//! A view is what the presentation layer is currently showing. Storage
//! placement ([`Location`]) and the filter flags on a note (favorite, trashed,
//! hidden) are separate axes; a view combines them into one membership test:
//!
//! | View       | Member when                                   |
//! |------------|-----------------------------------------------|
//! | Notes      | default category, not trashed, not hidden     |
//! | Favorites  | favorited, not trashed (any placement)        |
//! | Trash      | trashed                                       |
//! | Folder(f)  | stored in folder `f`, not trashed             |
//! | Scratchpad | never (the scratchpad is not a note)          |
//!
//! Only Notes and Folder views decide where a new note is stored; Favorites
//! and Trash are filters over the same storage.
//!
//! [`select_initial_note`] is a pure derivation over the collection. Callers
//! hold the selection themselves and re-run it whenever the view or folder
//! changes, or the selected note leaves the current view.

use crate::collection::Collection;
use crate::model::{FolderId, Location, Note, NoteId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Notes,
    Favorites,
    Trash,
    Folder(FolderId),
    Scratchpad,
}

impl View {
    pub fn includes(&self, note: &Note) -> bool {
        match self {
            View::Notes => note.in_default_category() && !note.is_trash && !note.is_hidden,
            View::Favorites => note.is_fav && !note.is_trash,
            View::Trash => note.is_trash,
            View::Folder(folder_id) => note.folder_id() == Some(*folder_id) && !note.is_trash,
            View::Scratchpad => false,
        }
    }

    /// Placement given to a note created while this view is active.
    pub fn storage_location(&self) -> Location {
        match self {
            View::Folder(folder_id) => Location::Folder(*folder_id),
            _ => Location::Default,
        }
    }

    /// Trashed notes are read-only in the editor.
    pub fn is_editable(&self) -> bool {
        !matches!(self, View::Trash)
    }

    pub fn is_note_backed(&self) -> bool {
        !matches!(self, View::Scratchpad)
    }
}

/// Returns the first note of `view` in insertion order, if any.
pub fn select_initial_note(view: &View, collection: &Collection) -> Option<NoteId> {
    collection.notes_in(view).next().map(|note| note.id)
}

/// Keeps `current` if it is still a member of `view`, otherwise falls back to
/// [`select_initial_note`].
pub fn reconcile_selection(
    view: &View,
    collection: &Collection,
    current: Option<NoteId>,
) -> Option<NoteId> {
    match current.and_then(|id| collection.note(&id)) {
        Some(note) if view.includes(note) => Some(note.id),
        _ => select_initial_note(view, collection),
    }
}
