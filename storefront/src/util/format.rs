//! Display formatting for prices and ratings.

#[cfg(test)]
#[path = "format_test.rs"]
mod tests;

/// `1234` -> `"$12.34"`.
pub fn format_cents(cents: u64) -> String {
    let dollars = cents / 100;
    let rest = cents % 100;
    format!("${}.{rest:02}", group_thousands(dollars))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Five-star rating with filled and empty stars; ratings above 5 clamp.
pub fn rating_stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// `1 item` / `3 items`.
pub fn pluralize_items(count: u32) -> String {
    if count == 1 { "1 item".to_owned() } else { format!("{count} items") }
}
