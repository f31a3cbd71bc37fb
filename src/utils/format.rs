use chrono::{DateTime, Local, Utc};

const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format(FORMAT).to_string()
}

/// Truncate on a char boundary, appending "..." when shortened
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Pluralize a noun for a count, e.g. "1 conflict" / "2 conflicts"
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("abcdefghijkl", 8), "abcde...");
        // multibyte text must not be split mid-char
        assert_eq!(truncate_string("ééééééé", 5), "éé...");
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "quote"), "1 quote");
        assert_eq!(plural(0, "quote"), "0 quotes");
        assert_eq!(plural(3, "conflict"), "3 conflicts");
    }
}
