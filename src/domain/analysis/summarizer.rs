//! Extractive summarizer
//!
//! Picks the highest scoring sentences that fit the length budget and
//! re-joins them in document order.

use super::sentence::{ScoredSentence, is_cjk_ideograph, normalize, score_sentences};

const ELLIPSIS: &str = "...";

/// Summarizes `content` into at most `max_length` chars
pub fn summarize(content: &str, max_length: usize) -> String {
    let trimmed = content.trim();
    if max_length == 0 || trimmed.is_empty() {
        return String::new();
    }

    let normalized = normalize(trimmed);
    let base = if normalized.is_empty() {
        trimmed
    } else {
        normalized.as_str()
    };

    let mut ranked: Vec<ScoredSentence> = score_sentences(&normalized);
    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(a.original_index.cmp(&b.original_index))
    });

    let (separator, terminator) = if prefers_cjk(&normalized) {
        ("。", "。")
    } else {
        (". ", ".")
    };

    // First sentence pays for the terminator, every later one for a separator
    let mut running = 0;
    let mut selected = Vec::new();
    for sentence in ranked {
        let joiner = if selected.is_empty() {
            terminator
        } else {
            separator
        };
        let cost = sentence.text.chars().count() + joiner.chars().count();
        if running + cost <= max_length {
            running += cost;
            selected.push(sentence);
        }
    }

    if selected.is_empty() {
        return truncate(base, max_length);
    }

    selected.sort_by_key(|s| s.original_index);

    let mut summary = selected
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(separator);
    summary.push_str(terminator);

    truncate(&summary, max_length)
}

/// `。` terminators when CJK ideographs are at least as common as Latin letters
fn prefers_cjk(text: &str) -> bool {
    let cjk = text.chars().filter(|c| is_cjk_ideograph(*c)).count();
    let latin = text.chars().filter(|c| c.is_ascii_alphabetic()).count();
    cjk >= latin
}

fn truncate(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    if max_length < ELLIPSIS.len() + 1 {
        return text.chars().take(max_length).collect();
    }

    let mut out: String = text.chars().take(max_length - ELLIPSIS.len()).collect();
    out.push_str(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE: &str = "齐鲁国际学校于9月1日隆重举行了新学期开学典礼。\
        全校师生齐聚体育馆，共同迎接新学期的到来。\
        校长在致辞中回顾了过去一年学校在教育教学方面取得的优秀成绩。\
        随后，学生代表发言，表达了对新学期学习生活的期待。\
        典礼在嘹亮的校歌声中圆满结束。";

    #[test]
    fn test_summary_respects_length() {
        for max_length in [1, 3, 4, 10, 30, 60, 100, 500] {
            let summary = summarize(ARTICLE, max_length);
            assert!(
                summary.chars().count() <= max_length,
                "max_length {} produced {:?}",
                max_length,
                summary
            );
            assert!(!summary.is_empty());
        }
    }

    #[test]
    fn test_summary_keeps_document_order() {
        let summary = summarize(ARTICLE, 60);
        assert!(summary.ends_with('。'));

        let first = summary.find("齐鲁国际学校");
        let later = summary.find("优秀成绩");
        if let (Some(first), Some(later)) = (first, later) {
            assert!(first < later);
        }
    }

    #[test]
    fn test_whole_article_fits() {
        let summary = summarize(ARTICLE, 500);
        assert!(summary.starts_with("齐鲁国际学校于9月1日"));
        assert!(summary.ends_with("圆满结束。"));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(summarize(ARTICLE, 50), summarize(ARTICLE, 50));
    }

    #[test]
    fn test_empty_and_zero_length() {
        assert_eq!(summarize("", 100), "");
        assert_eq!(summarize("   ", 100), "");
        assert_eq!(summarize(ARTICLE, 0), "");
    }

    #[test]
    fn test_no_sentences_falls_back_to_content() {
        assert_eq!(summarize("短句。", 100), "短句。");
        assert_eq!(summarize("一二三四五六七八九十", 7), "一二三四...");
    }

    #[test]
    fn test_stripped_content_falls_back_to_raw() {
        assert_eq!(summarize("😀😀", 10), "😀😀");
    }

    #[test]
    fn test_latin_text_uses_periods() {
        let summary = summarize(
            "The school opened a new library. Students celebrated the event together!",
            200,
        );
        assert_eq!(
            summary,
            "The school opened a new library. Students celebrated the event together."
        );
    }

    #[test]
    fn test_latin_budget_counts_separator_space() {
        let content =
            "The school opened a new library today. Students celebrated the event together.";

        assert_eq!(summarize(content, 77), "The school opened a new library today.");
        assert_eq!(summarize(content, 78), content);

        for max_length in 38..=120 {
            let summary = summarize(content, max_length);
            assert!(summary.chars().count() <= max_length);
            assert!(
                !summary.contains("..."),
                "max_length {} cut a sentence: {:?}",
                max_length,
                summary
            );
        }
    }

    #[test]
    fn test_ties_prefer_earlier_sentence() {
        // The third and fourth sentences score identically; only one fits
        let content = format!(
            "一二三四五。甲乙丙丁戊己。子丑寅卯辰巳。东南西北上下。{}。",
            "长".repeat(81)
        );
        let summary = summarize(&content, 20);
        assert_eq!(summary, "一二三四五。甲乙丙丁戊己。子丑寅卯辰巳。");
    }
}
