use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse a numeric field from extracted slip text. Malformed input and
/// non-finite values coerce to 0.0 — a bad OCR read must never reject the
/// record.
pub fn lenient_number(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// Derive a betting-house id from its display name: lower-case, each run of
/// whitespace collapsed to a single hyphen, leading/trailing whitespace
/// dropped. `"Bet 365"` → `"bet-365"`. Not unique across houses that
/// normalize to the same slug.
pub fn house_slug(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Parse an event date from slip text. Accepts RFC 3339 and the
/// `dd/mm/yyyy hh:mm` form slips commonly carry; anything else falls back to
/// the current instant rather than failing the record.
pub fn parse_event_date(raw: &str) -> DateTime<Utc> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Utc);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%d/%m/%Y %H:%M") {
        return naive.and_utc();
    }
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn well_formed_number_parses() {
        assert!((lenient_number("2.25") - 2.25).abs() < 1e-9);
        assert!((lenient_number("  531.06 ") - 531.06).abs() < 1e-9);
        assert!((lenient_number("-219.12") + 219.12).abs() < 1e-9);
    }

    #[test]
    fn malformed_number_coerces_to_zero() {
        assert_eq!(lenient_number("abc"), 0.0);
        assert_eq!(lenient_number(""), 0.0);
        assert_eq!(lenient_number("R$ 100"), 0.0);
    }

    #[test]
    fn non_finite_number_coerces_to_zero() {
        assert_eq!(lenient_number("inf"), 0.0);
        assert_eq!(lenient_number("NaN"), 0.0);
        assert_eq!(lenient_number("-inf"), 0.0);
    }

    #[test]
    fn slug_lowercases_and_hyphenates() {
        assert_eq!(house_slug("Bet365"), "bet365");
        assert_eq!(house_slug("Bet 365"), "bet-365");
        assert_eq!(house_slug("Mr   Green"), "mr-green");
    }

    #[test]
    fn slug_drops_edge_whitespace() {
        // Trailing whitespace must not leave a dangling hyphen.
        assert_eq!(house_slug("Bet 365 "), "bet-365");
        assert_eq!(house_slug("  Betano"), "betano");
    }

    #[test]
    fn event_date_accepts_rfc3339() {
        let dt = parse_event_date("2025-01-15T16:00:00Z");
        assert_eq!((dt.year(), dt.month(), dt.day(), dt.hour()), (2025, 1, 15, 16));
    }

    #[test]
    fn event_date_accepts_slip_format() {
        let dt = parse_event_date("15/01/2025 16:00");
        assert_eq!((dt.year(), dt.month(), dt.day(), dt.hour()), (2025, 1, 15, 16));
    }

    #[test]
    fn unparseable_event_date_falls_back_to_now() {
        let before = Utc::now();
        let dt = parse_event_date("amanhã às 16h");
        assert!(dt >= before && dt <= Utc::now());
    }
}
