use chrono::{DateTime, Utc};
use colored::Colorize;
use nout::model::{Folder, Note, NoteId};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TIME_WIDTH: usize = 16;
const ID_WIDTH: usize = 8;
const FAV_MARKER: &str = "★";
const HIDDEN_MARKER: &str = "◌";
const SELECTED_MARKER: &str = "›";
const UNTITLED: &str = "New note";

/// One row of a listing, precomputed so the printer has no engine access.
pub(super) struct NoteRow<'a> {
    pub note: &'a Note,
    pub folder_name: Option<&'a str>,
    pub selected: bool,
}

pub(super) fn success(message: impl AsRef<str>) {
    println!("{}", message.as_ref().green());
}

pub(super) fn info(message: impl AsRef<str>) {
    println!("{}", message.as_ref().dimmed());
}

pub(super) fn warning(message: impl AsRef<str>) {
    println!("{}", message.as_ref().yellow());
}

pub(super) fn short_id(id: &NoteId) -> String {
    id.to_string().chars().take(ID_WIDTH).collect()
}

pub(super) fn print_notes(rows: &[NoteRow<'_>], line_width: usize) {
    if rows.is_empty() {
        info("No notes here.");
        return;
    }

    for row in rows {
        let marker = if row.selected { SELECTED_MARKER } else { " " };
        let flags = format!(
            "{}{}",
            if row.note.is_fav { FAV_MARKER } else { " " },
            if row.note.is_hidden && row.note.in_default_category() {
                HIDDEN_MARKER
            } else {
                " "
            }
        );
        let id = short_id(&row.note.id);

        let mut label = card_label(&row.note.text);
        if let Some(folder) = row.folder_name {
            label = format!("{} [{}]", label, folder);
        }

        let fixed_width = marker.width() + 1 + ID_WIDTH + 1 + flags.width() + 1 + TIME_WIDTH;
        let available = line_width.saturating_sub(fixed_width).max(1);
        let label = truncate_to_width(&label, available);
        let padding = available.saturating_sub(label.width());

        println!(
            "{} {} {} {}{}{}",
            marker.cyan(),
            id.yellow(),
            flags.yellow(),
            label,
            " ".repeat(padding),
            format_time_ago(row.note.updated_at).dimmed()
        );
    }
}

pub(super) fn print_folders(folders: &[(&Folder, usize)]) {
    if folders.is_empty() {
        info("No folders yet.");
        return;
    }
    for (folder, count) in folders {
        let id: String = folder.id.to_string().chars().take(ID_WIDTH).collect();
        let color = folder
            .color
            .as_deref()
            .map(|c| format!(" ({})", c))
            .unwrap_or_default();
        println!(
            "{} {}{} {}",
            id.yellow(),
            folder.name.bold(),
            color.dimmed(),
            format!("{} notes", count).dimmed()
        );
    }
}

/// Card title for a note: the first non-blank line of its text once markup
/// tags are read as line breaks.
pub(super) fn card_label(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut in_tag = false;
    for (i, c) in text.char_indices() {
        match c {
            // a '<' with no closing '>' later on is plain text
            '<' if !in_tag && text[i..].contains('>') => {
                in_tag = true;
                plain.push('\n');
            }
            '>' if in_tag => in_tag = false,
            _ if in_tag => {}
            _ => plain.push(c),
        }
    }

    plain
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| UNTITLED.to_string())
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
