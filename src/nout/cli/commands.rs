use super::args::{Cli, Commands, FolderCommands, ViewArg};
use super::print::{self, NoteRow};
use directories::ProjectDirs;
use nout::api::NoutApi;
use nout::config::NoutConfig;
use nout::error::{NoutError, Result};
use nout::model::{FolderId, NoteId};
use nout::store::fs::FileStore;
use nout::view::View;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;

struct AppContext {
    api: NoutApi<FileStore>,
    config: NoutConfig,
    data_dir: PathBuf,
}

pub fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { view, folder }) => handle_list(&ctx, view, folder),
        Some(Commands::New { folder, text }) => handle_new(&mut ctx, folder, text),
        Some(Commands::Show { note }) => handle_show(&ctx, &note),
        Some(Commands::Edit { note, text }) => handle_edit(&mut ctx, &note, text),
        Some(Commands::Fav { note }) => handle_fav(&mut ctx, &note),
        Some(Commands::Hide { note }) => handle_hide(&mut ctx, &note),
        Some(Commands::Move { note, folder }) => handle_move(&mut ctx, &note, folder),
        Some(Commands::Trash { notes }) => handle_trash(&mut ctx, &notes),
        Some(Commands::Restore { note }) => handle_restore(&mut ctx, &note),
        Some(Commands::EmptyTrash) => handle_empty_trash(&mut ctx),
        Some(Commands::Folder(cmd)) => match cmd {
            FolderCommands::List => handle_folder_list(&ctx),
            FolderCommands::Add { name } => handle_folder_add(&mut ctx, &name.join(" ")),
            FolderCommands::Rename { folder, name } => {
                handle_folder_rename(&mut ctx, &folder, &name.join(" "))
            }
            FolderCommands::Color { folder, color } => {
                handle_folder_color(&mut ctx, &folder, color)
            }
            FolderCommands::Delete { folder } => handle_folder_delete(&mut ctx, &folder),
        },
        Some(Commands::Scratch { text }) => handle_scratch(&mut ctx, text),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&ctx, ViewArg::Notes, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "nout", "nout")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| NoutError::Store("Could not determine data directory".into()))?,
    };
    tracing::debug!(data_dir = %data_dir.display(), "using data directory");

    let config = NoutConfig::load(&data_dir)?;
    let api = NoutApi::open(FileStore::new(data_dir.clone()))?
        .with_scratchpad_initial(config.scratchpad_initial.clone());

    Ok(AppContext {
        api,
        config,
        data_dir,
    })
}

/// Text from positional arguments, or from stdin when it is piped.
fn read_text(args: Vec<String>) -> Result<Option<String>> {
    if !args.is_empty() {
        return Ok(Some(args.join(" ")));
    }
    if std::io::stdin().is_terminal() {
        return Ok(None);
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(NoutError::Io)?;
    Ok(if buffer.is_empty() { None } else { Some(buffer) })
}

/// Accepts a full note id or a prefix that matches exactly one note.
fn resolve_note(ctx: &AppContext, reference: &str) -> Result<NoteId> {
    if let Ok(id) = reference.parse::<NoteId>() {
        return Ok(id);
    }
    let needle = reference.to_lowercase();
    let matches: Vec<NoteId> = ctx
        .api
        .notes()
        .iter()
        .map(|note| note.id)
        .filter(|id| id.to_string().starts_with(&needle))
        .collect();
    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(NoutError::Validation(format!(
            "No note matches '{}'",
            reference
        ))),
        _ => Err(NoutError::Validation(format!(
            "'{}' matches {} notes, use a longer prefix",
            reference,
            matches.len()
        ))),
    }
}

/// Accepts a folder id, id prefix, or name (case-insensitive).
fn resolve_folder(ctx: &AppContext, reference: &str) -> Result<FolderId> {
    if let Ok(id) = reference.parse::<FolderId>() {
        return Ok(id);
    }
    let folders = ctx.api.folders();
    if let Some(folder) = folders
        .iter()
        .find(|folder| folder.name.eq_ignore_ascii_case(reference.trim()))
    {
        return Ok(folder.id);
    }
    let needle = reference.to_lowercase();
    let matches: Vec<FolderId> = folders
        .iter()
        .map(|folder| folder.id)
        .filter(|id| id.to_string().starts_with(&needle))
        .collect();
    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(NoutError::Validation(format!(
            "No folder matches '{}'",
            reference
        ))),
        _ => Err(NoutError::Validation(format!(
            "'{}' matches {} folders, use a longer prefix",
            reference,
            matches.len()
        ))),
    }
}

fn view_for(ctx: &AppContext, view: ViewArg, folder: Option<String>) -> Result<View> {
    if let Some(folder) = folder {
        return Ok(View::Folder(resolve_folder(ctx, &folder)?));
    }
    Ok(match view {
        ViewArg::Notes => View::Notes,
        ViewArg::Favorites => View::Favorites,
        ViewArg::Trash => View::Trash,
    })
}

fn handle_list(ctx: &AppContext, view: ViewArg, folder: Option<String>) -> Result<()> {
    let view = view_for(ctx, view, folder)?;
    let selected = ctx.api.select_initial_note(&view);
    let show_folder = matches!(view, View::Favorites | View::Trash);

    let rows: Vec<NoteRow<'_>> = ctx
        .api
        .notes_in_view(&view)
        .into_iter()
        .map(|note| NoteRow {
            note,
            folder_name: note
                .folder_id()
                .filter(|_| show_folder)
                .and_then(|id| ctx.api.get_folder_by_id(&id))
                .map(|folder| folder.name.as_str()),
            selected: Some(note.id) == selected,
        })
        .collect();

    print::print_notes(&rows, ctx.config.list_width);
    Ok(())
}

fn handle_new(ctx: &mut AppContext, folder: Option<String>, text: Vec<String>) -> Result<()> {
    let view = view_for(ctx, ViewArg::Notes, folder)?;
    let text = read_text(text)?;

    let id = match text {
        Some(text) => ctx.api.add_note_with_text(&view, text)?,
        None => ctx.api.add_note(&view)?,
    };
    print::success(format!("Note created: {}", id));
    Ok(())
}

fn handle_show(ctx: &AppContext, reference: &str) -> Result<()> {
    let id = resolve_note(ctx, reference)?;
    let note = ctx
        .api
        .get_note_by_id(&id)
        .ok_or(NoutError::NoteNotFound(id))?;
    println!("{}", note.text);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, reference: &str, text: Vec<String>) -> Result<()> {
    let id = resolve_note(ctx, reference)?;
    if ctx.api.get_note_by_id(&id).is_some_and(|note| note.is_trash) {
        return Err(NoutError::Validation(
            "Trashed notes are read-only, restore it first".into(),
        ));
    }
    let text = read_text(text)?.ok_or_else(|| {
        NoutError::Validation("No text given, pass it as arguments or pipe it in".into())
    })?;
    ctx.api.update_note_text(&id, text)?;
    print::success(format!("Note updated: {}", print::short_id(&id)));
    Ok(())
}

fn handle_fav(ctx: &mut AppContext, reference: &str) -> Result<()> {
    let id = resolve_note(ctx, reference)?;
    let is_fav = ctx.api.add_favorite(&id)?;
    let verb = if is_fav { "favorited" } else { "unfavorited" };
    print::success(format!("Note {}: {}", verb, print::short_id(&id)));
    Ok(())
}

fn handle_hide(ctx: &mut AppContext, reference: &str) -> Result<()> {
    let id = resolve_note(ctx, reference)?;
    let is_hidden = ctx.api.hide_note(&id)?;
    let verb = if is_hidden { "hidden" } else { "shown" };
    print::success(format!("Note {}: {}", verb, print::short_id(&id)));
    if ctx
        .api
        .get_note_by_id(&id)
        .is_some_and(|note| !note.in_default_category())
    {
        print::info("The note is in a folder; hiding applies once it leaves the folder.");
    }
    Ok(())
}

fn handle_move(ctx: &mut AppContext, reference: &str, folder: Option<String>) -> Result<()> {
    let id = resolve_note(ctx, reference)?;
    let folder_id = folder
        .map(|folder| resolve_folder(ctx, &folder))
        .transpose()?;
    ctx.api.move_note_to_folder(&id, folder_id)?;

    let target = folder_id
        .and_then(|fid| ctx.api.get_folder_by_id(&fid))
        .map(|folder| folder.name.clone())
        .unwrap_or_else(|| nout::model::DEFAULT_CATEGORY.to_string());
    print::success(format!("Note moved to {}: {}", target, print::short_id(&id)));
    Ok(())
}

fn handle_trash(ctx: &mut AppContext, references: &[String]) -> Result<()> {
    let ids = references
        .iter()
        .map(|reference| resolve_note(ctx, reference))
        .collect::<Result<Vec<_>>>()?;
    let trashed = ctx.api.delete_notes(&ids, false)?;
    if trashed.is_empty() {
        print::info("Nothing to trash.");
    }
    for id in trashed {
        print::success(format!("Note trashed: {}", print::short_id(&id)));
    }
    Ok(())
}

fn handle_restore(ctx: &mut AppContext, reference: &str) -> Result<()> {
    let id = resolve_note(ctx, reference)?;
    if ctx.api.restore_note(&id)? {
        print::success(format!("Note restored: {}", print::short_id(&id)));
    } else {
        print::info("Note is not in the trash.");
    }
    Ok(())
}

fn handle_empty_trash(ctx: &mut AppContext) -> Result<()> {
    let erased = ctx.api.empty_trash()?;
    if erased.is_empty() {
        print::info("Trash is already empty.");
    } else {
        print::success(format!("Erased {} notes.", erased.len()));
    }
    Ok(())
}

fn handle_folder_list(ctx: &AppContext) -> Result<()> {
    let folders: Vec<_> = ctx
        .api
        .folders()
        .into_iter()
        .map(|folder| {
            let count = ctx.api.notes_in_view(&View::Folder(folder.id)).len();
            (folder, count)
        })
        .collect();
    print::print_folders(&folders);
    Ok(())
}

fn handle_folder_add(ctx: &mut AppContext, name: &str) -> Result<()> {
    let id = ctx.api.add_folder(name)?;
    print::success(format!("Folder created: {}", id));
    Ok(())
}

fn handle_folder_rename(ctx: &mut AppContext, reference: &str, name: &str) -> Result<()> {
    let id = resolve_folder(ctx, reference)?;
    ctx.api.rename_folder(&id, name)?;
    print::success(format!("Folder renamed to {}", name.trim()));
    Ok(())
}

fn handle_folder_color(ctx: &mut AppContext, reference: &str, color: Option<String>) -> Result<()> {
    let id = resolve_folder(ctx, reference)?;
    let message = match &color {
        Some(color) => format!("Folder color set to {}", color),
        None => "Folder color cleared".to_string(),
    };
    ctx.api.set_folder_color(&id, color)?;
    print::success(message);
    Ok(())
}

fn handle_folder_delete(ctx: &mut AppContext, reference: &str) -> Result<()> {
    let id = resolve_folder(ctx, reference)?;
    let detached = ctx
        .api
        .notes()
        .iter()
        .filter(|note| note.folder_id() == Some(id))
        .count();
    match ctx.api.delete_folder(&id)? {
        Some(folder) => print::success(format!(
            "Folder deleted: {} ({} notes moved to {})",
            folder.name,
            detached,
            nout::model::DEFAULT_CATEGORY
        )),
        None => print::warning("No such folder."),
    }
    Ok(())
}

fn handle_scratch(ctx: &mut AppContext, text: Vec<String>) -> Result<()> {
    match read_text(text)? {
        Some(text) => {
            ctx.api.set_scratchpad(&text)?;
            print::success("Scratchpad saved.");
        }
        None => println!("{}", ctx.api.scratchpad()?),
    }
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) => {
            println!("list-width = {}", ctx.config.list_width);
            println!("scratchpad-initial = {:?}", ctx.config.scratchpad_initial);
        }
        (Some("list-width"), None) => println!("{}", ctx.config.list_width),
        (Some("list-width"), Some(v)) => {
            let width = v
                .parse::<usize>()
                .map_err(|_| NoutError::Validation(format!("Not a number: {}", v)))?;
            ctx.config.set_list_width(width)?;
            ctx.config.save(&ctx.data_dir)?;
            print::success(format!("list-width set to {}", width));
        }
        (Some("scratchpad-initial"), None) => println!("{}", ctx.config.scratchpad_initial),
        (Some("scratchpad-initial"), Some(v)) => {
            ctx.config.scratchpad_initial = v;
            ctx.config.save(&ctx.data_dir)?;
            print::success("scratchpad-initial updated");
        }
        (Some(other), _) => {
            return Err(NoutError::Validation(format!(
                "Unknown config key: {}",
                other
            )))
        }
    }
    Ok(())
}
