//! Match scoring — pluggable, trait-based scorer that measures a resume
//! against an extracted JD.
//!
//! Default: `KeywordMatchScorer` (pure-Rust, deterministic, fully testable).
//! `AppState` holds an `Arc<dyn MatchScorer>`, so backends can swap without
//! touching the endpoint or handler code.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::jd::JdInfo;
use crate::matching::resume::ResumeData;

// ────────────────────────────────────────────────────────────────────────────
// Output data model (shared across scorer backends)
// ────────────────────────────────────────────────────────────────────────────

/// Score plus the skill overlap and narrative lists derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Heuristic match score, always in [30, 95].
    pub score: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The match scorer seam. Implement this to swap scoring backends.
#[async_trait]
pub trait MatchScorer: Send + Sync {
    async fn score(
        &self,
        jd_text: &str,
        jd: &JdInfo,
        resume: &ResumeData,
    ) -> Result<ScoreBreakdown, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordMatchScorer — default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Keyword-overlap scorer.
///
/// Algorithm:
/// 1. skill_match_ratio = |matched JD skills| / |JD skills|, where a JD
///    skill is matched when it and some resume skill contain each other
///    case-insensitively (either direction). 0.5 when the JD yields no
///    skills.
/// 2. experience_match = |experience keywords present in JD text| / 6.
/// 3. score = round((ratio * 0.6 + experience_match * 0.4) * 100),
///    clamped to [30, 95].
pub struct KeywordMatchScorer;

#[async_trait]
impl MatchScorer for KeywordMatchScorer {
    async fn score(
        &self,
        jd_text: &str,
        jd: &JdInfo,
        resume: &ResumeData,
    ) -> Result<ScoreBreakdown, AppError> {
        Ok(compute_keyword_match(jd_text, jd, resume))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core keyword match algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Fixed experience-keyword set probed against the JD text.
pub const EXPERIENCE_KEYWORDS: &[&str] = &["开发", "工程师", "项目", "技术", "系统", "平台"];

const SKILL_WEIGHT: f64 = 0.6;
const EXPERIENCE_WEIGHT: f64 = 0.4;
const MIN_SCORE: u32 = 30;
const MAX_SCORE: u32 = 95;

/// Ratio used when the JD yields no skills at all.
const NEUTRAL_SKILL_RATIO: f64 = 0.5;

const RICH_JD_CHARS: usize = 200;
const RICH_DESCRIPTION_CHARS: usize = 50;

fn skills_overlap(jd_skill: &str, resume_skill: &str) -> bool {
    let jd_skill = jd_skill.to_lowercase();
    let resume_skill = resume_skill.to_lowercase();
    jd_skill.contains(&resume_skill) || resume_skill.contains(&jd_skill)
}

fn compute_keyword_match(jd_text: &str, jd: &JdInfo, resume: &ResumeData) -> ScoreBreakdown {
    let (matched_skills, missing_skills): (Vec<String>, Vec<String>) =
        jd.skills.iter().cloned().partition(|jd_skill| {
            resume
                .skills
                .iter()
                .any(|resume_skill| skills_overlap(jd_skill, resume_skill))
        });

    let skill_match_ratio = if jd.skills.is_empty() {
        NEUTRAL_SKILL_RATIO
    } else {
        matched_skills.len() as f64 / jd.skills.len() as f64
    };

    let keywords_present = EXPERIENCE_KEYWORDS
        .iter()
        .filter(|keyword| jd_text.contains(*keyword))
        .count();
    let experience_match = keywords_present as f64 / EXPERIENCE_KEYWORDS.len() as f64;

    let base_score = (skill_match_ratio * SKILL_WEIGHT + experience_match * EXPERIENCE_WEIGHT) * 100.0;
    let score = (base_score.round() as u32).clamp(MIN_SCORE, MAX_SCORE);

    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();

    if !matched_skills.is_empty() {
        strengths.push(format!(
            "您已掌握岗位要求的关键技能：{}",
            matched_skills.join("、")
        ));
    }
    if !missing_skills.is_empty() {
        weaknesses.push(format!("建议补充以下技能：{}", missing_skills.join("、")));
    }

    if skill_match_ratio >= 0.7 {
        strengths.push("技能匹配度较高，符合岗位基本要求".to_string());
    } else if skill_match_ratio < 0.4 {
        weaknesses.push("技能匹配度较低，需要重点提升相关技术栈".to_string());
    }

    match resume.experiences.len() {
        n if n >= 2 => strengths.push("拥有丰富的工作经验，能够胜任相关岗位".to_string()),
        1 => strengths.push("有相关工作经验，建议详细描述项目成果".to_string()),
        _ => weaknesses.push("工作经验相对较少，建议突出项目经历和学习能力".to_string()),
    }

    let has_rich_description = resume
        .experiences
        .iter()
        .any(|exp| exp.description.chars().count() > RICH_DESCRIPTION_CHARS);
    if jd_text.chars().count() > RICH_JD_CHARS && has_rich_description {
        strengths.push("简历内容较为丰富，能够展示您的专业能力".to_string());
    }

    ScoreBreakdown {
        score,
        matched_skills,
        missing_skills,
        strengths,
        weaknesses,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
