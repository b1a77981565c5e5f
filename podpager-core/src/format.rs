use crate::listing::PodcastEntry;
use crate::paginator::PagerSnapshot;
use time::OffsetDateTime;
use time::format_description;

/// Format a timestamp as `YYYY-MM-DD`
pub fn format_date(date: OffsetDateTime) -> Option<String> {
    let description = format_description::parse("[year]-[month]-[day]").ok()?;
    date.format(&description).ok()
}

/// Control bar for a terminal: `« [1] (2) [3] »`.
/// The current page is parenthesised and a disabled arrow is shown as `-`.
pub fn format_controls(snapshot: &PagerSnapshot) -> String {
    let mut parts = Vec::with_capacity(snapshot.total_pages + 2);
    parts.push(if snapshot.prev_enabled { "\u{ab}" } else { "-" }.to_string());
    for page in 1..=snapshot.total_pages {
        if page == snapshot.current_page {
            parts.push(format!("({})", page));
        } else {
            parts.push(format!("[{}]", page));
        }
    }
    parts.push(if snapshot.next_enabled { "\u{bb}" } else { "-" }.to_string());
    parts.join(" ")
}

/// `Page 2 of 3 (items 6-10 of 12)`
pub fn format_page_summary(snapshot: &PagerSnapshot) -> String {
    if snapshot.total_items == 0 {
        return "No podcasts".to_string();
    }

    format!(
        "Page {} of {} (items {}-{} of {})",
        snapshot.current_page,
        snapshot.total_pages,
        snapshot.visible.start + 1,
        snapshot.visible.end,
        snapshot.total_items
    )
}

/// One line per podcast: title, then author, categories and update date when
/// known. Explicit podcasts are flagged with `[E]`.
pub fn format_entry(entry: &PodcastEntry) -> String {
    let author_info = if let Some(author) = &entry.author {
        format!(" by {}", author)
    } else {
        String::new()
    };
    let explicit_info = if entry.explicit { " [E]" } else { "" };
    let category_info = if entry.categories.is_empty() {
        String::new()
    } else {
        format!(" [{}]", entry.categories.join(", "))
    };
    let updated_info = match entry.updated.and_then(format_date) {
        Some(date) => format!(" (updated {})", date),
        None => String::new(),
    };

    format!(
        "{}{}{}{}{}",
        entry.title, explicit_info, author_info, category_info, updated_info
    )
}
