//! Configuration command
//!
//! Shows where the journal lives and the active settings.

use crate::config::Settings;
use crate::error::JournalResult;
use crate::storage::{json_file_valid, Storage};

/// Print paths, settings and the state of the journal file
///
/// With `save`, the active settings are also written to the settings file
/// so they can be edited by hand.
pub fn handle_config(storage: &Storage, settings: &Settings, save: bool) -> JournalResult<()> {
    let paths = storage.paths();
    if save {
        settings.save(paths)?;
    }
    let journal_file = paths.journal_file();

    let status = if !storage.is_initialized() {
        "not created yet"
    } else if json_file_valid(&journal_file) {
        "ok"
    } else {
        "unreadable (starting empty)"
    };

    println!("Journal Configuration");
    println!("{}", "=".repeat(40));
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Journal file:     {} [{}]", journal_file.display(), status);
    println!("Export directory: {}", paths.export_dir().display());
    println!();
    println!("Quote endpoint:   {}", settings.quote_endpoint);
    println!("Quote timeout:    {}s", settings.quote_timeout_secs);
    println!("Offline quotes:   {}", settings.offline_quotes);
    println!("Default category: {}", settings.default_category);
    println!("Default mood:     {}", settings.default_mood);

    if save {
        println!();
        println!("Settings written to {}", paths.settings_file().display());
    }

    Ok(())
}
