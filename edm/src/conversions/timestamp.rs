use chrono::NaiveDateTime;

use crate::bail;
use crate::error::{EdmResult, ErrorKind};

/// Strict format of date-time strings in the upstream feed,
/// e.g. `2022-01-05 10:00:00.000000`. The fractional seconds are part of the
/// feed contract and must be present.
const FEED_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Canonical format of every derived timestamp in the extracts:
/// seconds precision, no timezone, e.g. `2022-01-05T10:00:00`.
const CANONICAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parses a raw feed date-time string against the strict feed format.
///
/// Fails with [`ErrorKind::MalformedDate`] when the string does not match;
/// the pipeline treats that as grounds to skip the whole offending record.
pub fn parse_timestamp(raw: &str) -> EdmResult<NaiveDateTime> {
    // `%.f` treats the fraction as optional, but the feed contract requires
    // it, so fraction-less input must be rejected up front.
    if !raw.contains('.') {
        bail!(
            ErrorKind::MalformedDate,
            "Date-time string does not match the feed format",
            format!("expected `{FEED_FORMAT}` with fractional seconds, got `{raw}`")
        );
    }

    match NaiveDateTime::parse_from_str(raw, FEED_FORMAT) {
        Ok(parsed) => Ok(parsed),
        Err(err) => bail!(
            ErrorKind::MalformedDate,
            "Date-time string does not match the feed format",
            format!("expected `{FEED_FORMAT}`, got `{raw}`"),
            source: err
        ),
    }
}

/// Renders a timestamp in the canonical extract format.
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(CANONICAL_FORMAT).to_string()
}
