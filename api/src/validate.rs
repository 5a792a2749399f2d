//! Pure form-validation and date-conversion helpers.
//!
//! Dates are entered as `DD.MM.YYYY` in the UI but travel as ISO-8601 strings
//! on the wire. Validation messages are user-facing and rendered next to the
//! offending field, so they take the field label as input.

use chrono::{DateTime, Local, NaiveDate, NaiveTime};

/// Display format for dates: `15.01.1990`.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Parse a strictly-formatted `DD.MM.YYYY` date. Rejects single-digit parts
/// and impossible calendar dates like `31.02.2020`.
fn parse_date(value: &str) -> Option<NaiveDate> {
    let well_formed = value.len() == 10
        && value
            .chars()
            .enumerate()
            .all(|(i, c)| if i == 2 || i == 5 { c == '.' } else { c.is_ascii_digit() });
    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

pub fn validate_required(label: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{label} is required"))
    } else {
        Ok(())
    }
}

/// Phone fields accept digits plus `+ - ( )` and spaces; letters are rejected.
pub fn validate_phone(label: &str, value: &str) -> Result<(), String> {
    validate_required(label, value)?;
    let allowed = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | ' '));
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    if allowed && has_digit {
        Ok(())
    } else {
        Err(format!("{label} may only contain digits, spaces and + - ( )"))
    }
}

/// A `DD.MM.YYYY` date that exists on the calendar and lies strictly in the past.
pub fn validate_past_date(label: &str, value: &str) -> Result<(), String> {
    validate_required(label, value)?;
    let Some(date) = parse_date(value) else {
        return Err(format!("{label} must be a valid date in DD.MM.YYYY format"));
    };
    if date < Local::now().date_naive() {
        Ok(())
    } else {
        Err(format!("{label} must be in the past"))
    }
}

pub fn validate_email(value: &str) -> Result<(), String> {
    validate_required("Email", value)?;
    let valid = value
        .split_once('@')
        .is_some_and(|(local, domain)| {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        });
    if valid {
        Ok(())
    } else {
        Err("Email is not valid".to_string())
    }
}

/// Registration policy: 9-20 characters with at least one digit, one
/// uppercase and one lowercase letter.
pub fn validate_password(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Password is required".to_string());
    }
    let length = value.chars().count();
    if length < 9 {
        return Err("Password must be longer than 8 characters".to_string());
    }
    if length > 20 {
        return Err("Password must be at most 20 characters".to_string());
    }
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    let has_upper = value.chars().any(char::is_uppercase);
    let has_lower = value.chars().any(char::is_lowercase);
    if has_digit && has_upper && has_lower {
        Ok(())
    } else {
        Err("Password must contain a digit, an uppercase and a lowercase letter".to_string())
    }
}

pub fn validate_sex(value: &str) -> Result<(), String> {
    match value {
        "M" | "F" => Ok(()),
        _ => Err("Sex is required".to_string()),
    }
}

/// Keep only digits and dots while typing a date, collapsing repeated dots.
pub fn sanitize_date_input(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_dot = false;
    for c in text.chars() {
        if c.is_ascii_digit() {
            out.push(c);
            prev_dot = false;
        } else if c == '.' && !prev_dot {
            out.push('.');
            prev_dot = true;
        }
    }
    out
}

/// Convert a validated `DD.MM.YYYY` date to the ISO-8601 string the server
/// expects (midnight UTC). Returns `None` for anything that does not parse.
pub fn date_to_iso(value: &str) -> Option<String> {
    let date = parse_date(value)?;
    Some(date.and_time(NaiveTime::MIN).and_utc().to_rfc3339())
}

/// Convert a server ISO-8601 timestamp back to `DD.MM.YYYY` for display.
/// Unparsable input becomes an empty field rather than an error.
pub fn date_from_iso(value: &str) -> String {
    if value.trim().is_empty() {
        return String::new();
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return parsed.date_naive().format(DATE_FORMAT).to_string();
    }
    // Some endpoints omit the timezone suffix
    if let Ok(parsed) = chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.date().format(DATE_FORMAT).to_string();
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_past_date() {
        assert!(validate_past_date("Birth date", "15.01.1990").is_ok());
    }

    #[test]
    fn rejects_impossible_calendar_date() {
        assert!(validate_past_date("Birth date", "31.02.2020").is_err());
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(validate_past_date("Birth date", "1990-01-15").is_err());
        assert!(validate_past_date("Birth date", "5.1.1990").is_err());
        assert!(validate_past_date("Birth date", "").is_err());
    }

    #[test]
    fn rejects_future_and_today() {
        let tomorrow = (Local::now().date_naive() + chrono::Days::new(1))
            .format(DATE_FORMAT)
            .to_string();
        assert!(validate_past_date("Affiliation date", &tomorrow).is_err());

        let today = Local::now().date_naive().format(DATE_FORMAT).to_string();
        assert!(validate_past_date("Affiliation date", &today).is_err());
    }

    #[test]
    fn phone_rejects_letters() {
        let err = validate_phone("Mobile", "300abc4567").unwrap_err();
        assert!(err.contains("digits, spaces and + - ( )"));
        assert!(validate_phone("Mobile", "+57 (300) 123-4567").is_ok());
        assert!(validate_phone("Mobile", "+-() ").is_err());
        assert!(validate_phone("Mobile", "").is_err());
    }

    #[test]
    fn password_policy() {
        assert!(validate_password("Test123456").is_ok());
        assert!(validate_password("short1A").is_err());
        assert!(validate_password("alllowercase1").is_err());
        assert!(validate_password("NODIGITSHERE").is_err());
        assert!(validate_password(&"Aa1".repeat(7)).is_err()); // 21 chars
    }

    #[test]
    fn email_shape() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@nodomain").is_err());
    }

    #[test]
    fn date_iso_roundtrip() {
        let iso = date_to_iso("15.01.1990").unwrap();
        assert!(iso.starts_with("1990-01-15T00:00:00"));
        assert_eq!(date_from_iso(&iso), "15.01.1990");
        assert_eq!(date_from_iso("1990-01-15T00:00:00.000Z"), "15.01.1990");
        assert_eq!(date_from_iso("2020-06-01T10:30:00"), "01.06.2020");
        assert_eq!(date_from_iso("garbage"), "");
        assert!(date_to_iso("31.02.2020").is_none());
    }

    #[test]
    fn date_input_sanitizer() {
        assert_eq!(sanitize_date_input("15.01.1990"), "15.01.1990");
        assert_eq!(sanitize_date_input("15a.0b1..1990"), "15.01.1990");
        assert_eq!(sanitize_date_input("dd.mm.yyyy"), ".");
    }
}
