use crate::model::{FolderId, NoteId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NoutError {
    #[error("Note not found: {0}")]
    NoteNotFound(NoteId),

    #[error("Folder not found: {0}")]
    FolderNotFound(FolderId),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

/// Coarse classification used by callers that only care about what went wrong,
/// not where.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Validation,
    Persistence,
}

impl NoutError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NoutError::NoteNotFound(_) | NoutError::FolderNotFound(_) => ErrorKind::NotFound,
            NoutError::Validation(_) => ErrorKind::Validation,
            NoutError::Io(_) | NoutError::Serialization(_) | NoutError::Store(_) => {
                ErrorKind::Persistence
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, NoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_errors_by_kind() {
        assert_eq!(
            NoutError::NoteNotFound(NoteId::new()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            NoutError::Validation("blank".into()).kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            NoutError::Store("disk full".into()).kind(),
            ErrorKind::Persistence
        );
        let io = std::io::Error::other("boom");
        assert_eq!(NoutError::from(io).kind(), ErrorKind::Persistence);
    }
}
