use chrono::{DateTime, Utc};

/// Format a timestamp as a coarse age relative to `now`: "today", "5d ago",
/// "3mo ago", "12y ago".
pub fn relative_age(dt: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let days = now.signed_duration_since(dt).num_days();

    if days < 1 {
        return "today".to_string();
    }

    if days < 30 {
        return format!("{}d ago", days);
    }

    if days < 365 {
        let months = days / 30;
        return format!("{}mo ago", months);
    }

    let years = days / 365;
    format!("{}y ago", years)
}

/// Group digits in threes with commas: 1234567 -> "1,234,567".
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
