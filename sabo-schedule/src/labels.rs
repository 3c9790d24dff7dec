use chrono::{Locale, NaiveDate};

/// Render the localized weekday/day/month label for a slot date.
pub fn day_label(date: NaiveDate, locale: &str) -> String {
    date.format_localized("%a, %-d %b", resolve(locale)).to_string()
}

fn resolve(tag: &str) -> Locale {
    match tag {
        "en" | "en-US" => Locale::en_US,
        _ => Locale::vi_VN,
    }
}
