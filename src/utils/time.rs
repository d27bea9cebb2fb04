use serde::Serializer;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Serialize an OffsetDateTime into an RFC 3339 formatted string
pub fn serialize<S>(datetime: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let s = datetime
        .format(&Rfc3339)
        .map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&s)
}

/// Parse an ISO-8601 timestamp as the chat service emits it.
///
/// RFC 3339 strings keep their offset.  Naive `YYYY-MM-DDTHH:MM:SS[.fff]`
/// strings carry no offset and are taken to be UTC.
pub fn parse_iso8601(s: &str) -> Option<OffsetDateTime> {
    let s = s.trim();
    if let Ok(dt) = OffsetDateTime::parse(s, &Rfc3339) {
        return Some(dt);
    }
    let naive =
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]");
    PrimitiveDateTime::parse(&s.replacen(' ', "T", 1), naive)
        .ok()
        .map(PrimitiveDateTime::assume_utc)
}

/// Format the wall-clock part of a timestamp as `HH:MM`.
pub fn format_clock(datetime: &OffsetDateTime) -> String {
    format!("{:02}:{:02}", datetime.hour(), datetime.minute())
}
