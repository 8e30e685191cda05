//! Parameter extraction from natural-language queries.
//!
//! Pure functions: time period, resolved date range and numeric threshold.

use crate::types::{DateRange, TimePeriod};
use chrono::{DateTime, Duration, TimeZone, Utc};
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;
use tracing::debug;

/// Period patterns, checked in this order; the first hit wins
static PERIOD_PATTERNS: LazyLock<Vec<(TimePeriod, Regex)>> = LazyLock::new(|| {
    let patterns = [
        (TimePeriod::Today, r"\b(?:today|this\s+day)\b"),
        (TimePeriod::Week, r"\b(?:this|last|past)\s+week\b"),
        (TimePeriod::Month, r"\b(?:this|last|past)\s+month\b"),
    ];
    patterns
        .into_iter()
        .filter_map(|(period, p)| {
            RegexBuilder::new(p)
                .case_insensitive(true)
                .build()
                .ok()
                .map(|re| (period, re))
        })
        .collect()
});

/// Threshold patterns in precedence order; each has one integer group
static THRESHOLD_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\bmore\s+than\s+([0-9]+)",
        r"\bover\s+([0-9]+)",
        r"\b([0-9]+)\+",
        r"\b([0-9]+)\s+times\b",
    ]
    .into_iter()
    .filter_map(|p| RegexBuilder::new(p).case_insensitive(true).build().ok())
    .collect()
});

/// Detect a time period keyword. Precedence: today, week, month.
pub fn extract_time_period(query: &str) -> Option<TimePeriod> {
    PERIOD_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(query))
        .map(|(period, _)| *period)
}

/// Resolve a period against the current time
pub fn resolve_date_range(period: TimePeriod) -> DateRange {
    resolve_date_range_at(period, Utc::now())
}

/// Resolve a period against an explicit `now`.
///
/// Today is `[00:00 UTC, +24h)`; week and month look back 7 and 30 days.
pub fn resolve_date_range_at(period: TimePeriod, now: DateTime<Utc>) -> DateRange {
    match period {
        TimePeriod::Today => {
            let midnight = now
                .date_naive()
                .and_hms_opt(0, 0, 0)
                .map(|naive| Utc.from_utc_datetime(&naive))
                .unwrap_or(now);
            DateRange::new(midnight, midnight + Duration::hours(24))
        }
        TimePeriod::Week => DateRange::new(now - Duration::days(7), now),
        TimePeriod::Month => DateRange::new(now - Duration::days(30), now),
    }
}

/// Extract a numeric threshold: "more than N", "over N", "N+", "N times".
///
/// Patterns are tried in that order, not by position in the query. Counts too large
/// for a `u32` saturate to `u32::MAX`.
pub fn extract_threshold(query: &str) -> Option<u32> {
    THRESHOLD_PATTERNS.iter().find_map(|re| {
        re.captures(query)
            .and_then(|caps| caps.get(1))
            .filter(|m| !m.as_str().is_empty())
            .map(|m| parse_count(m.as_str()))
    })
}

/// ASCII digits only, so the one parse failure is overflow; saturate it.
fn parse_count(digits: &str) -> u32 {
    digits.parse::<u32>().unwrap_or_else(|_| {
        debug!("Threshold {} exceeds u32, clamping to {}", digits, u32::MAX);
        u32::MAX
    })
}
