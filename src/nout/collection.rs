//! The notes/folders collection: the single record that gets persisted under
//! the collection key.
//!
//! Both maps keep insertion order, which is the order every listing and the
//! auto-selection policy use. The serialized form is
//! `{"notes": {id: note}, "folders": {id: folder}}`.

use crate::model::{Folder, FolderId, Location, Note, NoteId};
use crate::view::View;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(default)]
    pub(crate) notes: IndexMap<NoteId, Note>,
    #[serde(default)]
    pub(crate) folders: IndexMap<FolderId, Folder>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn note(&self, id: &NoteId) -> Option<&Note> {
        self.notes.get(id)
    }

    pub fn folder(&self, id: &FolderId) -> Option<&Folder> {
        self.folders.get(id)
    }

    pub fn contains_folder(&self, id: &FolderId) -> bool {
        self.folders.contains_key(id)
    }

    /// All notes in insertion order.
    pub fn notes(&self) -> impl Iterator<Item = &Note> {
        self.notes.values()
    }

    /// All folders in insertion order.
    pub fn folders(&self) -> impl Iterator<Item = &Folder> {
        self.folders.values()
    }

    /// Notes that belong to `view`, in insertion order.
    pub fn notes_in(&self, view: &View) -> impl Iterator<Item = &Note> + '_ {
        let view = *view;
        self.notes.values().filter(move |note| view.includes(note))
    }

    pub fn trashed_ids(&self) -> Vec<NoteId> {
        self.notes_in(&View::Trash).map(|note| note.id).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty() && self.folders.is_empty()
    }

    pub(crate) fn note_mut(&mut self, id: &NoteId) -> Option<&mut Note> {
        self.notes.get_mut(id)
    }

    pub(crate) fn folder_mut(&mut self, id: &FolderId) -> Option<&mut Folder> {
        self.folders.get_mut(id)
    }

    pub(crate) fn insert_note(&mut self, note: Note) {
        self.notes.insert(note.id, note);
    }

    pub(crate) fn insert_folder(&mut self, folder: Folder) {
        self.folders.insert(folder.id, folder);
    }

    /// Removes a note, keeping the relative order of the remaining ones.
    pub(crate) fn remove_note(&mut self, id: &NoteId) -> Option<Note> {
        self.notes.shift_remove(id)
    }

    pub(crate) fn remove_folder(&mut self, id: &FolderId) -> Option<Folder> {
        self.folders.shift_remove(id)
    }

    /// Repairs what a hand-edited or older collection may contain: records
    /// whose embedded id disagrees with their map key (the key wins), and
    /// notes pointing at folders that no longer exist (they go back to the
    /// default category). Returns the number of repairs.
    pub(crate) fn normalize(&mut self) -> usize {
        let mut repaired = 0;
        for (key, folder) in self.folders.iter_mut() {
            if folder.id != *key {
                tracing::warn!(folder = %key, embedded = %folder.id, "folder id mismatch");
                folder.id = *key;
                repaired += 1;
            }
        }

        let folders = &self.folders;
        for (key, note) in self.notes.iter_mut() {
            if note.id != *key {
                tracing::warn!(note = %key, embedded = %note.id, "note id mismatch");
                note.id = *key;
                repaired += 1;
            }
            if let Location::Folder(folder_id) = note.location {
                if !folders.contains_key(&folder_id) {
                    tracing::warn!(
                        note = %note.id,
                        folder = %folder_id,
                        "detaching note from missing folder"
                    );
                    note.location = Location::Default;
                    repaired += 1;
                }
            }
        }
        repaired
    }
}
