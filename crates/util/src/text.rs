//! Display-width aware text helpers and pt-BR number and date formatting.

use chrono::NaiveDate;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cuts `text` to at most `max_width` terminal columns, ending with `…` when
/// anything was dropped.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Formats `value` with `.` as the thousands separator: `1450000` → `1.450.000`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

pub fn format_brl(value: u64) -> String {
    format!("R$ {}", group_thousands(value))
}

/// pt-BR short date: `07/03/2026`.
pub fn short_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("Soja", 10), "Soja");
        assert_eq!(truncate_to_width("Comercialização", 6), "Comer…");
        assert_eq!(truncate_to_width("Comercialização", 0), "");
    }

    #[test]
    fn thousands_use_dots() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(950), "950");
        assert_eq!(group_thousands(400000), "400.000");
        assert_eq!(format_brl(1450000), "R$ 1.450.000");
    }

    #[test]
    fn short_date_is_day_first() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).expect("valid date");
        assert_eq!(short_date(date), "07/03/2026");
    }
}
