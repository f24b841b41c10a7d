use std::time::Duration;

use jiff::{SignedDuration, Span, SpanRelativeTo};

/// Parses a request timeout such as `30s`, `2m`, `PT1M` or a bare number of seconds.
pub fn parse_timeout(input: &str) -> Result<Duration, String> {
    let input = input.trim();

    let duration = input
        .parse::<SignedDuration>()
        .ok()
        .or_else(|| {
            input
                .parse::<Span>()
                .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()))
                .ok()
        })
        .or_else(|| {
            input
                .parse::<i64>()
                .ok()
                .map(SignedDuration::from_secs)
        })
        .ok_or_else(|| format!("Invalid timeout `{input}`"))?;

    if !duration.is_positive() {
        return Err(format!("Timeout must be positive, got `{input}`"));
    }

    Duration::try_from(duration).map_err(|err| err.to_string())
}
