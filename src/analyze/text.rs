//! Text heuristics shared by the scorers: keyword probes, sentence and
//! word statistics, and the regex proxies for entities and dates.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_PROPER_NOUN_PAIR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+\s+[A-Z][a-z]+\b").expect("invalid proper noun regex"));

static RE_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(19|20)\d{2}\b").expect("invalid year regex"));

static RE_PERCENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(\.\d+)?\s?%").expect("invalid percent regex"));

static RE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d+([.,]\d+)?\b").expect("invalid number regex"));

static RE_LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*([-*•]|\d+[.)])\s+\S").expect("invalid list regex"));

static RE_SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+(\s|$)").expect("invalid sentence regex"));

static RE_VOWEL_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[aeiouy]+").expect("invalid vowel regex"));

/// Case-insensitive check for any of the (lowercase) needles.
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    let lower = haystack.to_lowercase();
    needles.iter().any(|needle| lower.contains(needle))
}

pub fn has_proper_noun_pair(text: &str) -> bool {
    RE_PROPER_NOUN_PAIR.is_match(text)
}

pub fn proper_noun_pairs(text: &str) -> usize {
    RE_PROPER_NOUN_PAIR.find_iter(text).count()
}

/// Most recent four-digit year mentioned, if any.
pub fn latest_year(text: &str) -> Option<u32> {
    RE_YEAR
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<u32>().ok())
        .max()
}

pub fn percentage_count(text: &str) -> usize {
    RE_PERCENT.find_iter(text).count()
}

pub fn number_count(text: &str) -> usize {
    RE_NUMBER.find_iter(text).count()
}

pub fn list_item_count(text: &str) -> usize {
    RE_LIST_ITEM.find_iter(text).count()
}

pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| !word.is_empty())
}

pub fn sentence_count(text: &str) -> usize {
    if text.trim().is_empty() {
        return 0;
    }
    let terminated = RE_SENTENCE_END.find_iter(text).count();
    let trailing = RE_SENTENCE_END
        .split(text)
        .last()
        .map(|tail| !tail.trim().is_empty())
        .unwrap_or(false);
    terminated + usize::from(trailing)
}

pub fn average_words_per_sentence(text: &str) -> Option<f64> {
    let sentences = sentence_count(text);
    if sentences == 0 {
        return None;
    }
    Some(words(text).count() as f64 / sentences as f64)
}

/// Approximate syllables by counting vowel groups, dropping a silent final e.
pub fn syllables(word: &str) -> usize {
    let lower = word.to_lowercase();
    let groups = RE_VOWEL_GROUP.find_iter(&lower).count();
    let silent_e = lower.len() > 2 && lower.ends_with('e') && !lower.ends_with("le");
    if silent_e && groups > 1 {
        groups - 1
    } else {
        groups.max(1)
    }
}

/// Share of words with three or more syllables.
pub fn complex_word_ratio(text: &str) -> Option<f64> {
    let (total, complex) = words(text).fold((0usize, 0usize), |(total, complex), word| {
        (total + 1, complex + usize::from(syllables(word) >= 3))
    });
    if total == 0 {
        None
    } else {
        Some(complex as f64 / total as f64)
    }
}
