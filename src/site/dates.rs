use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DateError {
    #[error("Unrecognised date `{0}`")]
    Unrecognised(String),
    #[error("`{0}` does not exist in {1}")]
    NonexistentLocalTime(String, &'static str),
}

const NAIVE_DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parses a CMS date value into the club's timezone.
///
/// Accepts RFC 3339, the editor's `YYYY-MM-DDTHH:MM[+HH:MM]` form, and bare
/// dates. Values without an offset are read as club-local time.
pub fn parse_content_date(raw: &str, timezone: Tz) -> Result<DateTime<Tz>, DateError> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&timezone));
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M%:z") {
        return Ok(dt.with_timezone(&timezone));
    }

    let naive = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| DateError::Unrecognised(raw.to_string()))?;

    timezone
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| DateError::NonexistentLocalTime(raw.to_string(), timezone.name()))
}

/// `17 Aug 2024`
pub fn format_match_date(dt: &DateTime<Tz>) -> String {
    dt.format("%d %b %Y").to_string()
}

/// 24-hour kickoff, `15:00`
pub fn format_kickoff(dt: &DateTime<Tz>) -> String {
    dt.format("%H:%M").to_string()
}

/// Parses and logs instead of failing; callers drop the dependent field.
pub fn parse_or_warn(raw: &str, timezone: Tz, context: &str) -> Option<DateTime<Tz>> {
    match parse_content_date(raw, timezone) {
        Ok(dt) => Some(dt),
        Err(e) => {
            tracing::warn!("Malformed date on {}: {}", context, e);
            None
        }
    }
}
