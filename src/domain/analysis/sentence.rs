//! Sentence segmentation and scoring

use std::collections::HashSet;

use serde::Serialize;

use super::rules::SUMMARY_KEYWORDS;

/// Fragments shorter than this (in chars) are not sentences
pub const MIN_SENTENCE_CHARS: usize = 5;

const SENTENCE_TERMINATORS: [char; 6] = ['。', '！', '？', '.', '!', '?'];
const FULL_WIDTH_PUNCTUATION: &str = "，。！？；：“”‘’（）";
const ASCII_PUNCTUATION: &str = ".,!?;:'\"()-";

/// A retained sentence with its importance score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSentence {
    pub text: String,
    pub score: f64,
    pub original_index: usize,
}

pub fn is_cjk_ideograph(c: char) -> bool {
    ('\u{4E00}'..='\u{9FA5}').contains(&c)
}

fn is_allowed(c: char) -> bool {
    is_cjk_ideograph(c)
        || c.is_ascii_alphanumeric()
        || c.is_whitespace()
        || FULL_WIDTH_PUNCTUATION.contains(c)
        || ASCII_PUNCTUATION.contains(c)
}

/// Collapses whitespace runs and strips characters outside the allow-list
pub fn normalize(content: &str) -> String {
    let collapsed = content.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .chars()
        .filter(|c| is_allowed(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Splits normalized text into sentences of at least [`MIN_SENTENCE_CHARS`]
pub fn segment(normalized: &str) -> Vec<String> {
    normalized
        .split(SENTENCE_TERMINATORS)
        .map(str::trim)
        .filter(|s| s.chars().count() >= MIN_SENTENCE_CHARS)
        .map(str::to_string)
        .collect()
}

/// Scores one sentence given its position among `count` sentences
pub fn score_sentence(sentence: &str, index: usize, count: usize) -> f64 {
    let mut score = 0.0;

    if index == 0 {
        score += 3.0;
    } else if index + 1 == count {
        score += 2.0;
    } else if (index as f64) < count as f64 * 0.3 {
        score += 1.0;
    }

    let length = sentence.chars().count();
    if (10..=50).contains(&length) {
        score += 2.0;
    } else if (5..=80).contains(&length) {
        score += 1.0;
    }

    let keyword_hits = SUMMARY_KEYWORDS
        .iter()
        .filter(|keyword| sentence.contains(*keyword))
        .count();
    score += keyword_hits as f64 * 0.5;

    if sentence.chars().any(|c| c.is_ascii_digit()) {
        score += 1.0;
    }

    if length > 0 {
        let unique = sentence.chars().collect::<HashSet<_>>().len();
        score += unique as f64 / length as f64;
    }

    score
}

/// Normalizes, segments and scores `content`, in document order
pub fn score_sentences(content: &str) -> Vec<ScoredSentence> {
    let sentences = segment(&normalize(content));
    let count = sentences.len();

    sentences
        .into_iter()
        .enumerate()
        .map(|(index, text)| ScoredSentence {
            score: score_sentence(&text, index, count),
            text,
            original_index: index,
        })
        .collect()
}
