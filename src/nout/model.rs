use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Category label carried by every note that is not inside a folder.
pub const DEFAULT_CATEGORY: &str = "All Notes";

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Ids are random v4 UUIDs, so an erased id is never handed out again.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

define_id!(
    /// Identifier of a [`Note`].
    NoteId
);
define_id!(
    /// Identifier of a [`Folder`].
    FolderId
);

/// Where a note is stored. A note lives in exactly one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Location {
    #[default]
    Default,
    Folder(FolderId),
}

impl Location {
    pub fn folder_id(&self) -> Option<FolderId> {
        match self {
            Location::Default => None,
            Location::Folder(id) => Some(*id),
        }
    }
}

impl From<Option<FolderId>> for Location {
    fn from(folder_id: Option<FolderId>) -> Self {
        folder_id.map_or(Location::Default, Location::Folder)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredNote", into = "StoredNote")]
pub struct Note {
    pub id: NoteId,
    /// Opaque editor document; never interpreted here.
    pub text: String,
    pub location: Location,
    pub is_fav: bool,
    pub is_trash: bool,
    pub is_hidden: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(location: Location) -> Self {
        let now = Utc::now();
        Self {
            id: NoteId::new(),
            text: String::new(),
            location,
            is_fav: false,
            is_trash: false,
            is_hidden: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Legacy category label: the default category, or empty inside a folder.
    pub fn category(&self) -> &'static str {
        match self.location {
            Location::Default => DEFAULT_CATEGORY,
            Location::Folder(_) => "",
        }
    }

    pub fn folder_id(&self) -> Option<FolderId> {
        self.location.folder_id()
    }

    pub fn in_default_category(&self) -> bool {
        self.location == Location::Default
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// On-disk shape of a note. Placement is written as the `category`/`folderId`
/// pair so stored collections stay readable by older clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredNote {
    id: NoteId,
    #[serde(default)]
    text: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    folder_id: Option<FolderId>,
    #[serde(default)]
    is_fav: bool,
    #[serde(default)]
    is_trash: bool,
    #[serde(default)]
    is_hidden: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

impl From<StoredNote> for Note {
    fn from(stored: StoredNote) -> Self {
        // folderId wins over whatever the category says.
        let location = Location::from(stored.folder_id);
        let expected = match location {
            Location::Default => DEFAULT_CATEGORY,
            Location::Folder(_) => "",
        };
        if stored.category != expected {
            tracing::warn!(
                note = %stored.id,
                category = %stored.category,
                folder = ?stored.folder_id,
                "normalizing inconsistent note placement"
            );
        }

        let created_at = stored.created_at.unwrap_or_else(Utc::now);
        Note {
            id: stored.id,
            text: stored.text,
            location,
            is_fav: stored.is_fav,
            is_trash: stored.is_trash,
            is_hidden: stored.is_hidden,
            created_at,
            updated_at: stored.updated_at.unwrap_or(created_at),
        }
    }
}

impl From<Note> for StoredNote {
    fn from(note: Note) -> Self {
        StoredNote {
            id: note.id,
            category: note.category().to_string(),
            folder_id: note.folder_id(),
            text: note.text,
            is_fav: note.is_fav,
            is_trash: note.is_trash,
            is_hidden: note.is_hidden,
            created_at: Some(note.created_at),
            updated_at: Some(note.updated_at),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: FolderId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Folder {
    pub fn new(name: String) -> Self {
        Self {
            id: FolderId::new(),
            name,
            color: None,
            created_at: Utc::now(),
        }
    }
}
