//! Theme preference command

use clap::ValueEnum;

use crate::error::JournalResult;
use crate::models::Theme;
use crate::services::JournalService;
use crate::storage::Storage;

/// What to do with the theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    Light,
    Dark,
    Toggle,
}

/// Show or change the stored theme
pub fn handle_theme(storage: &Storage, action: Option<ThemeAction>) -> JournalResult<()> {
    let service = JournalService::new(storage);

    let theme = match action {
        None => {
            println!("Current theme: {}", service.theme()?);
            return Ok(());
        }
        Some(ThemeAction::Light) => service.set_theme(Theme::Light)?,
        Some(ThemeAction::Dark) => service.set_theme(Theme::Dark)?,
        Some(ThemeAction::Toggle) => service.toggle_theme()?,
    };

    println!("Theme set to: {}", theme);
    Ok(())
}
