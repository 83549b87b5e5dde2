use crate::collection::Collection;
use crate::error::{NoutError, Result};
use crate::model::{Folder, FolderId, Location};

fn clean_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(NoutError::Validation(
            "Folder name cannot be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

pub fn add(collection: &mut Collection, name: &str) -> Result<FolderId> {
    let folder = Folder::new(clean_name(name)?);
    let id = folder.id;
    collection.insert_folder(folder);
    tracing::debug!(folder = %id, "folder created");
    Ok(id)
}

/// Removes the folder and moves every note it held, trashed ones included,
/// back to the default category.
///
/// Deleting a folder that does not exist is a no-op and returns `None`.
pub fn delete(collection: &mut Collection, id: &FolderId) -> Option<Folder> {
    let folder = collection.remove_folder(id)?;
    let mut detached = 0;
    for note in collection.notes.values_mut() {
        if note.location == Location::Folder(*id) {
            note.location = Location::Default;
            note.touch();
            detached += 1;
        }
    }
    tracing::debug!(folder = %id, detached, "folder deleted");
    Some(folder)
}

pub fn rename(collection: &mut Collection, id: &FolderId, name: &str) -> Result<()> {
    let name = clean_name(name)?;
    let folder = collection
        .folder_mut(id)
        .ok_or(NoutError::FolderNotFound(*id))?;
    folder.name = name;
    tracing::debug!(folder = %id, "folder renamed");
    Ok(())
}

pub fn set_color(collection: &mut Collection, id: &FolderId, color: Option<String>) -> Result<()> {
    let folder = collection
        .folder_mut(id)
        .ok_or(NoutError::FolderNotFound(*id))?;
    tracing::debug!(folder = %id, color = ?color, "folder color set");
    folder.color = color;
    Ok(())
}
