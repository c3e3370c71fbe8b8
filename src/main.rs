use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use journal::cli::{
    handle_clear, handle_config, handle_delete, handle_edit, handle_export, handle_list,
    handle_new, handle_quote, handle_show, handle_stats, handle_theme, EditArgs, ExportArgs,
    ListArgs, NewArgs, ThemeAction,
};
use journal::config::{JournalPaths, Settings};
use journal::storage::Storage;

#[derive(Parser)]
#[command(
    name = "journal",
    version,
    about = "Personal daily journal",
    long_about = "A personal journal kept on your own machine. Write entries with a \
                  title, category, tags and mood, then search, review statistics \
                  and export them from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a new entry
    #[command(alias = "add")]
    New(NewArgs),

    /// List entries, newest first
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show a single entry
    Show {
        /// Entry ID
        id: String,
    },

    /// Edit an existing entry
    Edit(EditArgs),

    /// Delete an entry
    #[command(alias = "rm")]
    Delete {
        /// Entry ID
        id: String,
    },

    /// Delete every entry
    Clear {
        /// Skip the confirmation notice
        #[arg(long)]
        force: bool,
    },

    /// Show journal statistics
    Stats {
        /// Year for the monthly breakdown (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Export the journal to a file
    Export(ExportArgs),

    /// Show an inspirational quote
    Quote,

    /// Show or change the theme
    Theme {
        #[arg(value_enum)]
        action: Option<ThemeAction>,
    },

    /// Show current configuration and paths
    Config {
        /// Write the active settings to the settings file
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("JOURNAL_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = JournalPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths)?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::New(args)) => handle_new(&storage, &settings, args)?,
        Some(Commands::List(args)) => handle_list(&storage, args)?,
        Some(Commands::Show { id }) => handle_show(&storage, &id)?,
        Some(Commands::Edit(args)) => handle_edit(&storage, args)?,
        Some(Commands::Delete { id }) => handle_delete(&storage, &id)?,
        Some(Commands::Clear { force }) => handle_clear(&storage, force)?,
        Some(Commands::Stats { year }) => handle_stats(&storage, year)?,
        Some(Commands::Export(args)) => handle_export(&storage, args)?,
        Some(Commands::Quote) => handle_quote(&settings)?,
        Some(Commands::Theme { action }) => handle_theme(&storage, action)?,
        Some(Commands::Config { save }) => handle_config(&storage, &settings, save)?,
        None => handle_list(&storage, ListArgs::default())?,
    }

    Ok(())
}
