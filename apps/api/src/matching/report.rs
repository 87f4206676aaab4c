//! Match report assembly — the wire shape of `POST /analyze` responses.
//!
//! The typed core carries `Option`/empty values for not-found fields; the
//! legacy placeholder strings exist only here, at the response boundary.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::matching::advice::{build_recommendations, build_resume_suggestions};
use crate::matching::jd::JdInfo;
use crate::matching::scoring::ScoreBreakdown;

const FALLBACK_TITLE: &str = "未知岗位";
const FALLBACK_SKILLS: &str = "未明确指定";
const FALLBACK_REQUIREMENTS: &str = "请参考完整JD内容";

const REPORT_ID_PREFIX: &str = "report";
const REPORT_ID_RANDOM_CHARS: usize = 9;

/// Response form of `JdInfo` — absent fields rendered with placeholders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JdSummary {
    pub title: String,
    pub skills: Vec<String>,
    pub key_requirements: Vec<String>,
}

impl From<&JdInfo> for JdSummary {
    fn from(jd: &JdInfo) -> Self {
        Self {
            title: jd.title.clone().unwrap_or_else(|| FALLBACK_TITLE.to_string()),
            skills: if jd.skills.is_empty() {
                vec![FALLBACK_SKILLS.to_string()]
            } else {
                jd.skills.clone()
            },
            key_requirements: if jd.key_requirements.is_empty() {
                vec![FALLBACK_REQUIREMENTS.to_string()]
            } else {
                jd.key_requirements.clone()
            },
        }
    }
}

/// The full report returned by `POST /analyze`. Lives for one response;
/// nothing is persisted server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub report_id: String,
    pub match_score: u32,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
    pub jd_summary: JdSummary,
    pub resume_suggestions: Vec<String>,
}

/// Opaque report ID: "report_<unix-millis>_<9 random hex chars>".
pub fn new_report_id() -> String {
    let random: String = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(REPORT_ID_RANDOM_CHARS)
        .collect();
    format!(
        "{}_{}_{}",
        REPORT_ID_PREFIX,
        Utc::now().timestamp_millis(),
        random
    )
}

/// Assembles the final report from the extracted JD and the score breakdown.
pub fn build_report(jd_text: &str, jd: &JdInfo, breakdown: ScoreBreakdown) -> MatchReport {
    let recommendations = build_recommendations(jd_text, &breakdown);
    let resume_suggestions = build_resume_suggestions(&breakdown);

    MatchReport {
        report_id: new_report_id(),
        match_score: breakdown.score,
        strengths: breakdown.strengths,
        weaknesses: breakdown.weaknesses,
        recommendations,
        jd_summary: JdSummary::from(jd),
        resume_suggestions,
    }
}
