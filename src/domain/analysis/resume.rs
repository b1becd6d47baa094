//! Rule-based résumé scoring

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::DomainError;

const BASE_SCORE: f64 = 5.0;
const MIN_SCORE: f64 = 1.0;
const MAX_SCORE: f64 = 10.0;
const SKILL_BONUS: f64 = 0.3;

const SKILLS: &[&str] = &["教学", "管理", "研究", "英语", "计算机"];

/// Rationale used when scoring fails
pub const FALLBACK_RATIONALE: &str = "简历分析出现错误，请人工审核";

/// (markers, bonus, rationale), first match wins
const EDUCATION_LEVELS: &[(&[&str], f64, &str)] = &[
    (&["博士", "PhD"], 2.0, "具有博士学位，学术背景优秀"),
    (&["硕士", "Master"], 1.5, "具有硕士学位，教育背景良好"),
    (&["本科", "Bachelor"], 1.0, "具有本科学位"),
];

static EXPERIENCE_ZH: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]+)\s*年.*经验").unwrap());

static EXPERIENCE_EN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([0-9]+)\+?\s*years?\b.*experience").unwrap());

/// Score in `[1.0, 10.0]` with one decimal, plus the reasons behind it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub score: f64,
    pub rationale: String,
}

impl ResumeAnalysis {
    pub fn fallback() -> Self {
        Self {
            score: BASE_SCORE,
            rationale: FALLBACK_RATIONALE.to_string(),
        }
    }
}

/// Structured applicant data from the recruitment screen
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub applicant_name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl ResumeProfile {
    /// Renders the profile into the plain-text form scored by [`analyze_resume`]
    pub fn render(&self) -> String {
        format!(
            "姓名：{}\n职位：{}\n学历：{}\n工作经验：{}\n技能：{}",
            self.applicant_name,
            self.position,
            self.education,
            self.experience,
            self.skills.join("、")
        )
    }
}

/// Scores a résumé; never fails, see [`ResumeAnalysis::fallback`]
pub fn analyze_resume(text: &str) -> ResumeAnalysis {
    match try_analyze_resume(text) {
        Ok(analysis) => analysis,
        Err(e) => {
            warn!(error = %e, "Resume analysis failed, using fallback");
            ResumeAnalysis::fallback()
        }
    }
}

/// Fallible scoring core; errors on a year count that does not fit in `u32`
pub fn try_analyze_resume(text: &str) -> Result<ResumeAnalysis, DomainError> {
    let mut score = BASE_SCORE;
    let mut reasons: Vec<String> = Vec::new();

    if let Some((_, bonus, reason)) = EDUCATION_LEVELS
        .iter()
        .find(|(markers, _, _)| markers.iter().any(|m| text.contains(m)))
    {
        score += bonus;
        reasons.push(reason.to_string());
    }

    if let Some(years) = experience_years(text)? {
        let (bonus, reason) = match years {
            y if y >= 5 => (1.5, format!("具有{}年丰富工作经验", y)),
            y if y >= 2 => (1.0, format!("具有{}年工作经验", y)),
            y => (0.5, format!("具有{}年工作经验", y)),
        };
        score += bonus;
        reasons.push(reason);
    }

    let skills: Vec<&str> = SKILLS
        .iter()
        .copied()
        .filter(|skill| text.contains(skill))
        .collect();
    if !skills.is_empty() {
        score += skills.len() as f64 * SKILL_BONUS;
        reasons.push(format!("掌握技能：{}", skills.join("、")));
    }

    let score = score.clamp(MIN_SCORE, MAX_SCORE);

    Ok(ResumeAnalysis {
        score: (score * 10.0).round() / 10.0,
        rationale: reasons.join("；"),
    })
}

fn experience_years(text: &str) -> Result<Option<u32>, DomainError> {
    let captures = EXPERIENCE_ZH
        .captures(text)
        .or_else(|| EXPERIENCE_EN.captures(text));

    match captures {
        Some(caps) => {
            let raw = &caps[1];
            raw.parse::<u32>().map(Some).map_err(|e| {
                DomainError::validation(format!("Invalid experience years '{}': {}", raw, e))
            })
        }
        None => Ok(None),
    }
}
