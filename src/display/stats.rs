//! Statistics display formatting

use crate::models::Statistics;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format journal statistics, including text bar charts
pub fn format_statistics(stats: &Statistics) -> String {
    let mut output = String::new();

    output.push_str("Journal Statistics\n");
    output.push_str("==================\n");
    output.push_str(&format!("  Total entries:   {}\n", stats.total_entries));
    output.push_str(&format!("  Total words:     {}\n", stats.total_words));
    output.push_str(&format!(
        "  Avg words/entry: {}\n",
        stats.average_words_per_entry
    ));
    output.push_str(&format!(
        "  Newest entry:    {}\n",
        stats.newest_entry.as_deref().unwrap_or("N/A")
    ));
    output.push_str(&format!(
        "  Oldest entry:    {}\n",
        stats.oldest_entry.as_deref().unwrap_or("N/A")
    ));

    if stats.is_empty() {
        return output;
    }

    output.push_str("\nBy category:\n");
    for (category, count) in &stats.categories {
        output.push_str(&format!("  {:<16} {:>4}  {}\n", category, count, bar(*count)));
    }

    if !stats.moods.is_empty() {
        output.push_str("\nBy mood:\n");
        for (mood, count) in &stats.moods {
            output.push_str(&format!("  {:<16} {:>4}  {}\n", mood, count, bar(*count)));
        }
    }

    output.push_str(&format!("\nEntries per month ({}):\n", stats.year));
    for (month, count) in MONTHS.iter().zip(stats.entries_per_month.iter()) {
        output.push_str(&format!("  {}  {:>4}  {}\n", month, count, bar(*count)));
    }

    output
}

fn bar(count: usize) -> String {
    "#".repeat(count.min(50))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_empty_statistics() {
        let output = format_statistics(&Statistics::default());
        assert!(output.contains("Total entries:   0"));
        assert!(output.contains("Newest entry:    N/A"));
        assert!(!output.contains("By category"));
    }

    #[test]
    fn test_format_statistics() {
        let mut stats = Statistics {
            total_entries: 3,
            total_words: 10,
            average_words_per_entry: 3,
            newest_entry: Some("Friday, March 1, 2024".into()),
            oldest_entry: Some("Monday, January 1, 2024".into()),
            year: 2024,
            ..Statistics::default()
        };
        stats.categories.insert("Work".into(), 2);
        stats.categories.insert("Personal".into(), 1);
        stats.entries_per_month[2] = 3;

        let output = format_statistics(&stats);
        assert!(output.contains("Work"));
        assert!(output.contains("##"));
        assert!(!output.contains("By mood"));
        assert!(output.contains("Mar     3  ###"));
        assert!(output.contains("Entries per month (2024)"));
    }
}
