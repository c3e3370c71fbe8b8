//! Daily quote command

use crate::config::Settings;
use crate::error::JournalResult;
use crate::models::QuoteSource;
use crate::services::QuoteService;

/// Print an inspirational quote, online when possible
pub fn handle_quote(settings: &Settings) -> JournalResult<()> {
    let (quote, source) = QuoteService::from_settings(settings).next_quote_blocking()?;

    println!("{}", quote);
    if source == QuoteSource::Offline && !settings.offline_quotes {
        println!("(offline)");
    }

    Ok(())
}
