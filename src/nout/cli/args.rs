use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nout")]
#[command(about = "Personal notes with folders, favorites, trash and a scratchpad", long_about = None)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding notes.json, scratchpad.json and config.json
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Views that can be listed without naming a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    Notes,
    Favorites,
    Trash,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the notes of a view
    #[command(alias = "ls")]
    List {
        /// View to list
        #[arg(long, value_enum, default_value_t = ViewArg::Notes, conflicts_with = "folder")]
        view: ViewArg,

        /// List a folder instead (name or id prefix)
        #[arg(short, long)]
        folder: Option<String>,
    },

    /// Create a new note (text from arguments or stdin)
    #[command(alias = "n")]
    New {
        /// Create the note inside this folder (name or id prefix)
        #[arg(short, long)]
        folder: Option<String>,

        /// Initial text
        text: Vec<String>,
    },

    /// Print a note's text
    #[command(alias = "v")]
    Show {
        /// Note id or unique id prefix
        note: String,
    },

    /// Replace a note's text (from arguments or stdin)
    #[command(alias = "e")]
    Edit {
        /// Note id or unique id prefix
        note: String,

        /// New text
        text: Vec<String>,
    },

    /// Toggle a note's favorite flag
    Fav {
        /// Note id or unique id prefix
        note: String,
    },

    /// Toggle hiding a note from the default category
    Hide {
        /// Note id or unique id prefix
        note: String,
    },

    /// Move a note to a folder, or back to the default category
    #[command(alias = "mv")]
    Move {
        /// Note id or unique id prefix
        note: String,

        /// Target folder (name or id prefix); omit to leave the folder
        folder: Option<String>,
    },

    /// Move notes to the trash
    #[command(alias = "rm")]
    Trash {
        #[arg(required = true, num_args = 1..)]
        notes: Vec<String>,
    },

    /// Take a note out of the trash
    Restore {
        /// Note id or unique id prefix
        note: String,
    },

    /// Permanently erase every trashed note
    EmptyTrash,

    /// Manage folders
    #[command(subcommand)]
    Folder(FolderCommands),

    /// Print the scratchpad, or replace it with the given text
    Scratch {
        /// New scratchpad text
        text: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (list-width, scratchpad-initial)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum FolderCommands {
    /// List folders
    #[command(alias = "ls")]
    List,

    /// Create a folder
    Add { name: Vec<String> },

    /// Rename a folder
    Rename { folder: String, name: Vec<String> },

    /// Set or clear a folder's color
    Color {
        folder: String,
        color: Option<String>,
    },

    /// Delete a folder; its notes move back to the default category
    #[command(alias = "rm")]
    Delete { folder: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn list_defaults_to_notes_view() {
        let cli = Cli::try_parse_from(["nout", "ls"]).unwrap();
        match cli.command {
            Some(Commands::List { view, folder }) => {
                assert_eq!(view, ViewArg::Notes);
                assert!(folder.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn view_and_folder_conflict() {
        assert!(Cli::try_parse_from(["nout", "list", "--view", "trash", "-f", "Work"]).is_err());
    }

    #[test]
    fn trash_requires_a_note() {
        assert!(Cli::try_parse_from(["nout", "trash"]).is_err());
        assert!(Cli::try_parse_from(["nout", "rm", "ab12", "cd34"]).is_ok());
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["nout", "folder", "ls", "--data-dir", "/tmp/x", "-vv"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Some(Commands::Folder(FolderCommands::List))));
    }
}
