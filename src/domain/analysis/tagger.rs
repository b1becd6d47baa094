//! Tag generation from category patterns and proper nouns

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::rules::{TAG_CATEGORIES, related_words};

/// Maximum number of tags returned
pub const MAX_TAGS: usize = 8;

const PROPER_NOUN_SCORE: f64 = 2.0;

static LATIN_PROPER_NOUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z][a-zA-Z]+").unwrap());

static DATE_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[零〇一二三四五六七八九十百千万]+[年月日]|[0-9]+[年月日]").unwrap()
});

/// Generates up to [`MAX_TAGS`] deduplicated tags, best first
pub fn generate_tags(content: &str) -> Vec<String> {
    if content.trim().is_empty() {
        return Vec::new();
    }

    let mut scored = ScoredTags::default();

    for category in TAG_CATEGORIES.iter() {
        let category_score: usize = category
            .patterns
            .iter()
            .map(|pattern| pattern.find_iter(content).count())
            .sum();

        if category_score == 0 {
            continue;
        }

        for tag in category.tags {
            scored.add(tag, tag_score(tag, content, category_score));
        }
    }

    for noun in extract_proper_nouns(content) {
        scored.add(&noun, PROPER_NOUN_SCORE);
    }

    scored.into_top(MAX_TAGS)
}

fn tag_score(tag: &str, content: &str, category_score: usize) -> f64 {
    let direct = content.matches(tag).count() as f64;
    let related: usize = related_words(tag)
        .iter()
        .map(|word| content.matches(word).count())
        .sum();

    direct * 2.0 + related as f64 * 0.5 + category_score as f64 * 0.3
}

/// Capitalized Latin words (2 to 10 letters) and date tokens, first occurrence order
pub fn extract_proper_nouns(content: &str) -> Vec<String> {
    let latin = LATIN_PROPER_NOUN
        .find_iter(content)
        .map(|m| m.as_str())
        .filter(|word| (2..=10).contains(&word.chars().count()));
    let dates = DATE_TOKEN.find_iter(content).map(|m| m.as_str());

    let mut nouns: Vec<String> = Vec::new();
    for noun in latin.chain(dates) {
        if !nouns.iter().any(|existing| existing == noun) {
            nouns.push(noun.to_string());
        }
    }
    nouns
}

/// Max score per tag, remembering first-seen order
#[derive(Debug, Default)]
struct ScoredTags {
    order: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl ScoredTags {
    fn add(&mut self, tag: &str, score: f64) {
        match self.index.get(tag) {
            Some(&i) => {
                if score > self.order[i].1 {
                    self.order[i].1 = score;
                }
            }
            None => {
                self.index.insert(tag.to_string(), self.order.len());
                self.order.push((tag.to_string(), score));
            }
        }
    }

    fn into_top(mut self, limit: usize) -> Vec<String> {
        // Stable sort keeps first-seen order among equal scores
        self.order.sort_by(|a, b| b.1.total_cmp(&a.1));
        self.order
            .into_iter()
            .take(limit)
            .map(|(tag, _)| tag)
            .collect()
    }
}
