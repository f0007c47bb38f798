use once_cell::sync::Lazy;
use regex::Regex;

const BASE_SEVERITY: f64 = 5.0;

/// Each word contributes 0.5 once, no matter how often it appears.
const HARSH_WORDS: [&str; 10] = [
    "terrible",
    "awful",
    "disaster",
    "garbage",
    "horrible",
    "worst",
    "disgrace",
    "abomination",
    "dreadful",
    "pathetic",
];

/// A run of three or more consecutive uppercase letters reads as shouting.
static SHOUTING: Lazy<Regex> = Lazy::new(|| Regex::new("[A-Z]{3,}").expect("valid pattern"));

/// Rate how harsh a critique reads. Pure and total: any input, including the
/// empty string, yields a value in [1, 10] rounded to one decimal.
pub fn score(text: &str) -> f64 {
    let mut severity = BASE_SEVERITY;

    let lowered = text.to_lowercase();
    for word in HARSH_WORDS {
        if lowered.contains(word) {
            severity += 0.5;
        }
    }

    let shouting_runs = SHOUTING.find_iter(text).count();
    let exclamations = text.matches('!').count();
    severity += (shouting_runs as f64 * 0.3).min(2.0);
    severity += (exclamations as f64 * 0.2).min(1.5);

    ((severity * 10.0).round() / 10.0).clamp(1.0, 10.0)
}
