//! Entry display formatting
//!
//! Formats entries for terminal output in list and detail views.

use crate::models::Entry;

const PREVIEW_CHARS: usize = 40;

/// Format a list of entries as a table
pub fn format_entry_list(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No journal entries found.\n".to_string();
    }

    let title_width = entries
        .iter()
        .map(|e| e.title.chars().count())
        .max()
        .unwrap_or(5)
        .clamp(5, 30);

    let category_width = entries
        .iter()
        .map(|e| e.category.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<13}  {:<title_width$}  {:<category_width$}  {:<10}  {}\n",
        "ID",
        "Title",
        "Category",
        "Mood",
        "Preview",
        title_width = title_width,
        category_width = category_width,
    ));

    output.push_str(&format!(
        "{:-<13}  {:-<title_width$}  {:-<category_width$}  {:-<10}  {:-<preview_width$}\n",
        "",
        "",
        "",
        "",
        "",
        title_width = title_width,
        category_width = category_width,
        preview_width = PREVIEW_CHARS,
    ));

    for entry in entries {
        output.push_str(&format!(
            "{:<13}  {:<title_width$}  {:<category_width$}  {:<10}  {}\n",
            entry.id,
            truncate(&entry.title, title_width),
            entry.category,
            entry.mood_label().unwrap_or("-"),
            truncate(&entry.content.replace('\n', " "), PREVIEW_CHARS),
            title_width = title_width,
            category_width = category_width,
        ));
    }

    output.push_str(&format!("\n{} entries\n", entries.len()));
    output
}

/// Format a single entry's details
pub fn format_entry_details(entry: &Entry) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", entry.title));
    output.push_str(&format!("  ID:       {}\n", entry.id));
    output.push_str(&format!("  Date:     {} at {}\n", entry.date, entry.time));
    output.push_str(&format!("  Category: {}\n", entry.category));
    output.push_str(&format!("  Tags:     {}\n", entry.tags_display()));
    output.push_str(&format!(
        "  Mood:     {}\n",
        entry.mood_label().unwrap_or("Not specified")
    ));
    if let Some(image) = &entry.image {
        output.push_str(&format!("  Image:    {}\n", image));
    }
    output.push_str(&format!(
        "  Modified: {}\n",
        entry.timestamp.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push('\n');

    for line in entry.content.lines() {
        output.push_str(&format!("  {}\n", line));
    }

    output
}

/// Shorten text to at most `max` characters, marking the cut with "..."
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
