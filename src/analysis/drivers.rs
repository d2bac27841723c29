//! Driver Detection
//!
//! Maps free-text notes onto a fixed set of negative driver labels by
//! keyword match, and merges them with the user's own pressure source pick.

use crate::vibe::NO_PRESSURE;

/// Driver label and the keywords that trigger it, in report order
pub const DRIVER_KEYWORDS: [(&str, &[&str]); 4] = [
    (
        "🔥 Burnout",
        &["tired", "exhausted", "drained", "overworked", "late", "sleep"],
    ),
    (
        "👔 Management",
        &["boss", "manager", "micromanage", "leadership", "direction"],
    ),
    ("💰 Comp", &["pay", "salary", "bonus", "raise", "money"]),
    (
        "🤝 Culture",
        &["toxic", "gossip", "bullying", "politics", "ignored"],
    ),
];

/// Prefix marking a driver the user picked themselves
pub const MANUAL_DRIVER_PREFIX: &str = "👉";

/// Detect drivers mentioned in `text`.
///
/// Matching is case-insensitive substring search, so "sleepless" counts
/// as "sleep".
pub fn detect_drivers(text: &str) -> Vec<String> {
    let text = text.to_lowercase();

    DRIVER_KEYWORDS
        .iter()
        .filter(|(_, words)| words.iter().any(|w| text.contains(w)))
        .map(|(label, _)| label.to_string())
        .collect()
}

/// Combine detected drivers with the manually selected pressure source.
///
/// The manual pick leads the list unless it is empty or "All Good".
/// Duplicates are dropped, keeping the first occurrence.
pub fn merge_drivers(detected: Vec<String>, pressure_source: &str) -> Vec<String> {
    let pressure_source = pressure_source.trim();
    let mut merged = Vec::with_capacity(detected.len() + 1);

    if !pressure_source.is_empty() && pressure_source != NO_PRESSURE {
        merged.push(format!("{} {}", MANUAL_DRIVER_PREFIX, pressure_source));
    }

    for driver in detected {
        if !merged.contains(&driver) {
            merged.push(driver);
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_single_family() {
        assert_eq!(detect_drivers("I am so TIRED today"), vec!["🔥 Burnout"]);
    }

    #[test]
    fn test_detect_keeps_family_order() {
        let drivers = detect_drivers("toxic politics and my boss cut my bonus");
        assert_eq!(drivers, vec!["👔 Management", "💰 Comp", "🤝 Culture"]);
    }

    #[test]
    fn test_detect_nothing() {
        assert!(detect_drivers("").is_empty());
        assert!(detect_drivers("great week, shipped the release").is_empty());
    }

    #[test]
    fn test_merge_prefixes_manual_pick() {
        let merged = merge_drivers(vec!["🔥 Burnout".to_string()], "Deadlines");
        assert_eq!(merged, vec!["👉 Deadlines", "🔥 Burnout"]);
    }

    #[test]
    fn test_merge_skips_all_good_and_empty() {
        let detected = vec!["💰 Comp".to_string()];
        assert_eq!(merge_drivers(detected.clone(), "All Good"), vec!["💰 Comp"]);
        assert_eq!(merge_drivers(detected, ""), vec!["💰 Comp"]);
    }

    #[test]
    fn test_merge_dedups() {
        let detected = vec!["🔥 Burnout".to_string(), "🔥 Burnout".to_string()];
        assert_eq!(merge_drivers(detected, "All Good"), vec!["🔥 Burnout"]);
    }
}
