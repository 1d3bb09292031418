// src/profile/experience.rs

use once_cell::sync::Lazy;
use regex::Regex;

// Date-range shapes, tried in order: full range, open-ended range, bare year.
static DATE_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{4})-(\d{4})|(\d{4})-Present|(\d{4})").expect("Failed to compile DATE_RANGE_RE")
});

/// Sums the years covered by every date-range mention in the text.
///
/// `YYYY-YYYY` contributes `end - start`; `YYYY-Present` contributes
/// `reference_year - start`; a bare `YYYY` contributes nothing. This is a
/// literal scan-and-sum: ranges are not deduplicated or merged, so a period
/// mentioned twice counts twice. The caller picks the reference year
/// ("Present" resolution); the outermost boundary defaults it to the
/// current calendar year.
pub fn total_years(text: &str, reference_year: i32) -> u32 {
    let mut years: i64 = 0;

    for caps in DATE_RANGE_RE.captures_iter(text) {
        if let (Some(start), Some(end)) = (caps.get(1), caps.get(2)) {
            let start: i64 = start.as_str().parse().unwrap_or(0);
            let end: i64 = end.as_str().parse().unwrap_or(0);
            years += end - start;
        } else if let Some(start) = caps.get(3) {
            let start: i64 = start.as_str().parse().unwrap_or(0);
            years += i64::from(reference_year) - start;
        }
        // A bare year (group 4) starts and ends in the same year: +0.
    }

    years.max(0) as u32
}
