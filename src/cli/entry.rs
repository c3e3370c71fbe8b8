//! Entry CLI commands
//!
//! Implements the commands that create, browse, edit and remove entries.

use std::io::Read;
use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::display::{format_entry_details, format_entry_list, format_statistics};
use crate::error::{JournalError, JournalResult};
use crate::models::{parse_tags, CharCount, CharCountLevel, EntryDraft, EntryFilter, EntryId};
use crate::services::{image_reference, JournalService};
use crate::storage::Storage;

/// Arguments for writing a new entry
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Entry text (read from stdin when omitted)
    pub content: Option<String>,
    /// Entry title
    #[arg(short, long, default_value = "")]
    pub title: String,
    /// Category (defaults to the configured category)
    #[arg(short, long)]
    pub category: Option<String>,
    /// Comma-separated tags
    #[arg(long, default_value = "")]
    pub tags: String,
    /// Mood (defaults to the configured mood)
    #[arg(short, long)]
    pub mood: Option<String>,
    /// Image file to attach
    #[arg(short, long)]
    pub image: Option<PathBuf>,
}

/// Arguments for listing entries
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Text to search for in title, content and date
    #[arg(short, long, default_value = "")]
    pub search: String,
    /// Only entries in this category
    #[arg(short, long)]
    pub category: Option<String>,
    /// Only entries with this mood
    #[arg(short, long)]
    pub mood: Option<String>,
}

/// Arguments for editing an entry; omitted fields keep their value
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Entry ID
    pub id: String,
    /// New title
    #[arg(short, long)]
    pub title: Option<String>,
    /// New text
    #[arg(long)]
    pub content: Option<String>,
    /// New category
    #[arg(short, long)]
    pub category: Option<String>,
    /// New comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,
    /// New mood
    #[arg(short, long)]
    pub mood: Option<String>,
    /// Replacement image file
    #[arg(short, long)]
    pub image: Option<PathBuf>,
}

/// Write a new entry
pub fn handle_new(storage: &Storage, settings: &Settings, args: NewArgs) -> JournalResult<()> {
    let content = match args.content {
        Some(content) => content,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let mut draft = EntryDraft::new(content)
        .with_title(args.title)
        .with_category(args.category.unwrap_or_else(|| settings.default_category.clone()))
        .with_tags(parse_tags(&args.tags))
        .with_mood(args.mood.unwrap_or_else(|| settings.default_mood.clone()));

    if let Some(image) = attach_image(args.image) {
        draft = draft.with_image(image);
    }

    let count = CharCount::new(draft.content.trim());
    let entry = JournalService::new(storage).create(&draft)?;

    println!("Entry saved ({})", count);
    if count.level() == CharCountLevel::NearLimit {
        println!("  Note: close to the {} character limit", count.max);
    }
    println!("  ID:   {}", entry.id);
    println!("  Date: {} at {}", entry.date, entry.time);

    Ok(())
}

/// List entries, optionally filtered
pub fn handle_list(storage: &Storage, args: ListArgs) -> JournalResult<()> {
    let filter = EntryFilter {
        text: args.search,
        category: args.category,
        mood: args.mood,
    };

    let entries = JournalService::new(storage).query(&filter)?;
    print!("{}", format_entry_list(&entries));

    Ok(())
}

/// Show one entry in full
pub fn handle_show(storage: &Storage, id: &str) -> JournalResult<()> {
    let entry = JournalService::new(storage).find(id)?;
    print!("{}", format_entry_details(&entry));
    Ok(())
}

/// Edit an entry in place
pub fn handle_edit(storage: &Storage, args: EditArgs) -> JournalResult<()> {
    let service = JournalService::new(storage);
    let id = service.find(&args.id)?.id;
    let current = service.begin_edit(id)?;

    let mut draft = EntryDraft::from(&current);
    if let Some(title) = args.title {
        draft.title = title;
    }
    if let Some(content) = args.content {
        draft.content = content;
    }
    if let Some(category) = args.category {
        draft.category = category;
    }
    if let Some(tags) = args.tags {
        draft.tags = parse_tags(&tags);
    }
    if let Some(mood) = args.mood {
        draft.mood = Some(mood);
    }
    draft.image = attach_image(args.image);

    let updated = match service.save_draft(&draft) {
        Ok(entry) => entry,
        Err(e) => {
            service.cancel_edit()?;
            return Err(e);
        }
    };

    println!("Updated entry: {}", updated.id);
    println!("  Title: {}", updated.title);

    Ok(())
}

/// Delete an entry; unknown ids are reported but not an error
pub fn handle_delete(storage: &Storage, id: &str) -> JournalResult<()> {
    let id = EntryId::parse(id)
        .map_err(|_| JournalError::InvalidInput(format!("Invalid entry id: '{}'", id)))?;

    match JournalService::new(storage).delete(id)? {
        Some(entry) => println!("Entry deleted: {}", entry.title),
        None => println!("No entry with ID {}", id),
    }

    Ok(())
}

/// Remove every entry
pub fn handle_clear(storage: &Storage, force: bool) -> JournalResult<()> {
    let service = JournalService::new(storage);

    if service.count()? == 0 {
        println!("No entries to clear");
        return Ok(());
    }

    if !force {
        println!("This deletes ALL entries and cannot be undone. Re-run with --force to confirm.");
        return Ok(());
    }

    let removed = service.clear()?;
    println!("All entries cleared ({} removed)", removed);

    Ok(())
}

/// Show journal statistics
pub fn handle_stats(storage: &Storage, year: Option<i32>) -> JournalResult<()> {
    let service = JournalService::new(storage);
    let stats = match year {
        Some(year) => service.stats_for_year(year)?,
        None => service.stats()?,
    };

    print!("{}", format_statistics(&stats));
    Ok(())
}

/// Resolve an image attachment, warning and skipping it if invalid
fn attach_image(path: Option<PathBuf>) -> Option<String> {
    let path = path?;
    match image_reference(&path) {
        Ok(reference) => Some(reference),
        Err(e) => {
            eprintln!("Warning: {} (saving without image)", e);
            None
        }
    }
}
