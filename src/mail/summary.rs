use crate::session::Entry;
use chrono::NaiveDate;

/// Rule printed under the title line
const TITLE_RULE: &str = "===========================================";

/// Rule separating sections and entries
const SECTION_RULE: &str = "-------------------------------------------";

pub const DEFAULT_SIGNATURE: &str = "MoM Team";

/// Format a date the way it appears in subjects and headers, e.g. `January 15, 2024`
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Subject line of the summary email
pub fn subject(date: NaiveDate) -> String {
    format!("Daily Tasks Assignment - {}", format_long_date(date))
}

/// Build the summary body for the given entries.
///
/// Callers pass only the entries that should appear (normally the saved ones);
/// order is preserved.
pub fn compose_summary<'a, I>(date: NaiveDate, entries: I, signature: &str) -> String
where
    I: IntoIterator<Item = &'a Entry>,
{
    let blocks = entries
        .into_iter()
        .map(|entry| {
            format!(
                "\n👤 Team Member: {}\n🔸 Task/Update: {}\n{}",
                entry.name, entry.task, SECTION_RULE
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "📅 Daily Stand-up Meeting - {date}\n\
         {TITLE_RULE}\n\
         \n\
         📋 Summary of Tasks and Updates\n\
         {SECTION_RULE}\n\
         \n\
         {blocks}\n\
         \n\
         Note: This is an automated task assignment email. Please reach out if you have any questions.\n\
         \n\
         Best regards,\n\
         {signature}",
        date = format_long_date(date),
    )
}
