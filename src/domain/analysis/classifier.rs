//! Keyword and pattern based content classifier

use super::rules::{CONTENT_CATEGORIES, CategoryRule, FALLBACK_CATEGORY};

/// Weight of a category pattern that matches at least once
const PATTERN_WEIGHT: f64 = 2.0;
/// Weight of each (keyword, word) containment pair
const WORD_FREQUENCY_WEIGHT: f64 = 0.5;

/// Returns the best scoring content category, or `其他` when nothing scores
pub fn classify(content: &str) -> &'static str {
    let lowered = content.to_lowercase();
    let mut best = FALLBACK_CATEGORY;
    let mut best_score = 0.0;

    for rule in CONTENT_CATEGORIES.iter() {
        let score = category_score(rule, content, &lowered);
        if score > best_score {
            best_score = score;
            best = rule.name;
        }
    }

    best
}

/// Score of one category; `lowered` is `content` lower-cased
pub fn category_score(rule: &CategoryRule, content: &str, lowered: &str) -> f64 {
    let keyword_hits = rule
        .keywords
        .iter()
        .filter(|keyword| lowered.contains(&keyword.to_lowercase()))
        .count();

    let pattern_hits = rule
        .patterns
        .iter()
        .filter(|pattern| pattern.is_match(content))
        .count();

    keyword_hits as f64 * rule.weight
        + pattern_hits as f64 * PATTERN_WEIGHT
        + word_frequency(lowered, rule.keywords) as f64 * WORD_FREQUENCY_WEIGHT
}

/// Number of (keyword, word) pairs where the whitespace-split word contains the keyword
fn word_frequency(lowered: &str, keywords: &[&str]) -> usize {
    let words: Vec<&str> = lowered.split_whitespace().collect();

    keywords
        .iter()
        .map(|keyword| {
            let keyword = keyword.to_lowercase();
            words.iter().filter(|word| word.contains(&keyword)).count()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campus_news() {
        assert_eq!(
            classify("齐鲁国际学校开学典礼在校园体育馆举行，全校师生参加了活动"),
            "校园新闻"
        );
    }

    #[test]
    fn test_fallback_category() {
        assert_eq!(classify(""), "其他");
        assert_eq!(classify("the quick brown fox"), "其他");
    }

    #[test]
    fn test_pattern_outweighs_keyword() {
        assert_eq!(classify("2024年招生简章正式发布，欢迎报名"), "招生信息");
        assert_eq!(classify("我校学生在全国数学竞赛中获得一等奖"), "学术成就");
    }

    #[test]
    fn test_technology() {
        assert_eq!(classify("学校科技创新团队研发的智能系统获得专利"), "科技创新");
    }

    #[test]
    fn test_ties_keep_first_category() {
        // 教学 is a keyword of both 师资介绍 and 课程介绍
        assert_eq!(classify("教学"), "师资介绍");
    }

    #[test]
    fn test_word_frequency_counts_whitespace_words() {
        let rule = &CONTENT_CATEGORIES[0];
        let joined = "开学典礼";
        let spaced = "开学 开学 典礼";
        let score_joined = category_score(rule, joined, joined);
        let score_spaced = category_score(rule, spaced, spaced);

        // joined: keywords 开学 典礼 (2) + pattern 开学典礼 (2) + one word holding both (1)
        assert_eq!(score_joined, 2.0 + 2.0 + 1.0);
        // spaced: keywords (2) + three containment pairs (1.5)
        assert_eq!(score_spaced, 2.0 + 1.5);
    }
}
