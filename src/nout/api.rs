//! # API Facade
//!
//! [`NoutApi`] is the engine's single entry point. It owns the authoritative
//! [`Collection`] and the [`KeyValueStore`] it is persisted to, and every UI
//! (the bundled CLI, tests, anything embedding the library) goes through it.
//!
//! ## Transactions
//!
//! Each mutator runs its command against a working copy of the collection,
//! saves that copy, and only then swaps it in:
//!
//! 1. clone the live collection
//! 2. run the command on the clone (errors stop here, nothing changed)
//! 3. if the clone equals the live collection, return without writing
//! 4. serialize and save under [`COLLECTION_KEY`]
//! 5. replace the live collection
//!
//! A failed save therefore leaves every subsequent read exactly as it was
//! before the call, and the error is returned to the caller.
//!
//! ## Selection
//!
//! The API never tracks which note is selected. [`NoutApi::select_initial_note`]
//! and [`crate::view::reconcile_selection`] are pure helpers callers run
//! after changing views or mutating the selected note.

use crate::collection::Collection;
use crate::commands;
use crate::error::{NoutError, Result};
use crate::model::{Folder, FolderId, Note, NoteId};
use crate::scratchpad::{self, DEFAULT_SCRATCHPAD};
use crate::store::{KeyValueStore, COLLECTION_KEY};
use crate::view::{self, View};

pub struct NoutApi<S: KeyValueStore> {
    store: S,
    collection: Collection,
    scratchpad_initial: String,
}

impl<S: KeyValueStore> NoutApi<S> {
    /// Loads the collection from `store`. A store with nothing saved yet opens
    /// as an empty collection.
    pub fn open(store: S) -> Result<Self> {
        let mut collection = match store.load(COLLECTION_KEY)? {
            Some(raw) => {
                serde_json::from_str::<Collection>(&raw).map_err(NoutError::Serialization)?
            }
            None => Collection::new(),
        };

        let repaired = collection.normalize();
        if repaired > 0 {
            tracing::warn!(repaired, "repaired stored collection");
        }
        tracing::debug!(
            notes = collection.notes.len(),
            folders = collection.folders.len(),
            "collection loaded"
        );

        Ok(Self {
            store,
            collection,
            scratchpad_initial: DEFAULT_SCRATCHPAD.to_string(),
        })
    }

    pub fn with_scratchpad_initial(mut self, text: impl Into<String>) -> Self {
        self.scratchpad_initial = text.into();
        self
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // --- Notes ---

    pub fn add_note(&mut self, view: &View) -> Result<NoteId> {
        self.commit("add_note", |c| commands::create::run(c, view))
    }

    /// Creates a note and fills in its text in a single write, so a failed save
    /// never leaves an empty note behind.
    pub fn add_note_with_text(&mut self, view: &View, text: impl Into<String>) -> Result<NoteId> {
        let text = text.into();
        self.commit("add_note_with_text", |c| {
            let id = commands::create::run(c, view)?;
            commands::update::run(c, &id, text)?;
            Ok(id)
        })
    }

    /// Flips the favorite flag, returning the new value.
    pub fn add_favorite(&mut self, id: &NoteId) -> Result<bool> {
        self.commit("add_favorite", |c| commands::favorite::toggle(c, id))
    }

    pub fn move_note_to_folder(&mut self, id: &NoteId, folder_id: Option<FolderId>) -> Result<()> {
        self.commit("move_note_to_folder", |c| {
            commands::move_notes::run(c, id, folder_id)
        })
    }

    /// Trashes (or with `permanent`, erases) the given notes. Returns the ids
    /// that changed; unknown and already-trashed ids are skipped.
    pub fn delete_notes(&mut self, ids: &[NoteId], permanent: bool) -> Result<Vec<NoteId>> {
        self.commit("delete_notes", |c| {
            Ok(commands::delete::run(c, ids, permanent))
        })
    }

    /// Erases everything currently in the trash.
    pub fn empty_trash(&mut self) -> Result<Vec<NoteId>> {
        self.commit("empty_trash", |c| Ok(commands::purge::run(c)))
    }

    /// Returns false when the note was absent or not trashed.
    pub fn restore_note(&mut self, id: &NoteId) -> Result<bool> {
        self.commit("restore_note", |c| Ok(commands::restore::run(c, id)))
    }

    /// Flips the hidden flag, returning the new value.
    pub fn hide_note(&mut self, id: &NoteId) -> Result<bool> {
        self.commit("hide_note", |c| commands::hide::toggle(c, id))
    }

    pub fn update_note_text(&mut self, id: &NoteId, text: impl Into<String>) -> Result<()> {
        let text = text.into();
        self.commit("update_note_text", |c| commands::update::run(c, id, text))
    }

    pub fn get_note_by_id(&self, id: &NoteId) -> Option<&Note> {
        self.collection.note(id)
    }

    pub fn notes(&self) -> Vec<&Note> {
        self.collection.notes().collect()
    }

    pub fn notes_in_view(&self, view: &View) -> Vec<&Note> {
        self.collection.notes_in(view).collect()
    }

    pub fn select_initial_note(&self, view: &View) -> Option<NoteId> {
        view::select_initial_note(view, &self.collection)
    }

    // --- Folders ---

    pub fn add_folder(&mut self, name: &str) -> Result<FolderId> {
        self.commit("add_folder", |c| commands::folders::add(c, name))
    }

    /// Removes a folder and detaches its notes. Returns the removed folder, or
    /// `None` (without error) if it did not exist.
    pub fn delete_folder(&mut self, id: &FolderId) -> Result<Option<Folder>> {
        self.commit("delete_folder", |c| Ok(commands::folders::delete(c, id)))
    }

    pub fn rename_folder(&mut self, id: &FolderId, name: &str) -> Result<()> {
        self.commit("rename_folder", |c| commands::folders::rename(c, id, name))
    }

    pub fn set_folder_color(&mut self, id: &FolderId, color: Option<String>) -> Result<()> {
        self.commit("set_folder_color", |c| {
            commands::folders::set_color(c, id, color)
        })
    }

    pub fn get_folder_by_id(&self, id: &FolderId) -> Option<&Folder> {
        self.collection.folder(id)
    }

    pub fn folders(&self) -> Vec<&Folder> {
        self.collection.folders().collect()
    }

    // --- Scratchpad ---

    pub fn scratchpad(&self) -> Result<String> {
        scratchpad::load(&self.store, &self.scratchpad_initial)
    }

    pub fn set_scratchpad(&mut self, text: &str) -> Result<()> {
        scratchpad::save(&mut self.store, text)?;
        tracing::debug!(len = text.len(), "scratchpad saved");
        Ok(())
    }

    fn commit<T>(
        &mut self,
        op: &'static str,
        apply: impl FnOnce(&mut Collection) -> Result<T>,
    ) -> Result<T> {
        let mut working = self.collection.clone();
        let value = apply(&mut working)?;

        if working == self.collection {
            tracing::trace!(op, "no changes to persist");
            return Ok(value);
        }

        let raw = serde_json::to_string(&working).map_err(NoutError::Serialization)?;
        if let Err(e) = self.store.save(COLLECTION_KEY, &raw) {
            tracing::warn!(op, error = %e, "failed to persist collection");
            return Err(e);
        }

        self.collection = working;
        tracing::debug!(op, "collection persisted");
        Ok(value)
    }
}
