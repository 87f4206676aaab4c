//! JD field extraction — pulls a job title, requirement phrases, and skill
//! keywords out of raw job-description text.
//!
//! Extraction is best-effort: each pattern-matcher is independent and a
//! failed match yields `None` or an empty list, never a sentinel string.
//! Placeholders are rendered only at the response boundary.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::matching::vocabulary::SkillVocabulary;

/// Structured fields extracted from a JD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JdInfo {
    pub title: Option<String>,
    pub skills: Vec<String>,
    pub key_requirements: Vec<String>,
}

const MAX_REQUIREMENTS: usize = 5;
const MAX_REQUIREMENT_CHARS: usize = 50;

lazy_static! {
    // Labeled header: "岗位：资深后端工程师"
    static ref TITLE_LABELED_RE: Regex =
        Regex::new(r"(?:岗位|职位|招聘)[:：]?\s*([^\n]+)").unwrap();
    // Fallback: any line ending in a common role suffix
    static ref TITLE_SUFFIX_RE: Regex =
        Regex::new(r"([^\n]+)(?:工程师|开发|经理|专员)").unwrap();

    // Labeled requirement block: "任职要求：..."
    static ref REQ_LABELED_RE: Regex =
        Regex::new(r"(?:要求|任职要求|岗位要求)[:：]\s*([^\n]+)").unwrap();
    // Proficiency phrases: "熟悉/掌握/精通..."（up to the next clause break）
    static ref REQ_PROFICIENCY_RE: Regex =
        Regex::new(r"(?:熟悉|掌握|精通)([^\n，。]+)").unwrap();
    // Possession phrases: "具备/拥有..."
    static ref REQ_POSSESSION_RE: Regex =
        Regex::new(r"(?:具备|拥有)([^\n，。]+)").unwrap();
}

/// Extracts title, skills, and key requirements from a JD.
pub fn extract_jd_info(jd_text: &str, vocabulary: &SkillVocabulary) -> JdInfo {
    JdInfo {
        title: extract_title(jd_text),
        skills: vocabulary.scan(jd_text),
        key_requirements: extract_requirements(jd_text),
    }
}

/// First match of the labeled-header pattern wins; the role-suffix pattern
/// is the fallback. Deterministic precedence, not alternation order.
fn extract_title(text: &str) -> Option<String> {
    TITLE_LABELED_RE
        .captures(text)
        .or_else(|| TITLE_SUFFIX_RE.captures(text))
        .map(|caps| caps[1].trim().to_string())
        .filter(|title| !title.is_empty())
}

/// Collects requirement phrases from all three pattern families in order,
/// drops candidates of `MAX_REQUIREMENT_CHARS` or more, keeps the first
/// `MAX_REQUIREMENTS`.
fn extract_requirements(text: &str) -> Vec<String> {
    let patterns: [&Regex; 3] = [&REQ_LABELED_RE, &REQ_PROFICIENCY_RE, &REQ_POSSESSION_RE];

    let mut requirements = Vec::new();
    for pattern in patterns {
        for caps in pattern.captures_iter(text) {
            let candidate = caps[1].trim();
            if !candidate.is_empty() && candidate.chars().count() < MAX_REQUIREMENT_CHARS {
                requirements.push(candidate.to_string());
            }
        }
    }
    requirements.truncate(MAX_REQUIREMENTS);
    requirements
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> SkillVocabulary {
        SkillVocabulary::default()
    }

    #[test]
    fn test_title_from_labeled_header() {
        let jd = "岗位：资深后端工程师\n负责核心服务的设计与开发";
        let info = extract_jd_info(jd, &vocab());
        assert_eq!(info.title.as_deref(), Some("资深后端工程师"));
    }

    #[test]
    fn test_title_from_role_suffix_fallback() {
        let jd = "高级前端工程师\n负责Web应用开发";
        let info = extract_jd_info(jd, &vocab());
        // Capture stops before the suffix itself
        assert_eq!(info.title.as_deref(), Some("高级前端"));
    }

    #[test]
    fn test_title_absent_is_none() {
        let jd = "我们是一家快速成长的公司，欢迎加入";
        assert!(extract_title(jd).is_none());
    }

    /// Any JD containing a vocabulary skill verbatim must surface it.
    #[test]
    fn test_verbatim_skill_appears_in_skills() {
        let jd = "要求：熟悉React，掌握Node.js，3年以上开发经验";
        let info = extract_jd_info(jd, &vocab());
        assert!(info.skills.contains(&"React".to_string()));
        assert!(info.skills.contains(&"Node.js".to_string()));
    }

    #[test]
    fn test_requirements_from_labeled_block() {
        let jd = "任职要求：3年以上后端开发经验\n其他说明";
        let info = extract_jd_info(jd, &vocab());
        assert!(info
            .key_requirements
            .iter()
            .any(|r| r.contains("3年以上后端开发经验")));
    }

    #[test]
    fn test_requirements_from_proficiency_phrases() {
        let jd = "熟悉React生态，掌握TypeScript，精通性能优化";
        let reqs = extract_requirements(jd);
        assert!(reqs.iter().any(|r| r == "React生态"));
        assert!(reqs.iter().any(|r| r == "TypeScript"));
        assert!(reqs.iter().any(|r| r == "性能优化"));
    }

    #[test]
    fn test_requirements_capped_at_five() {
        let jd = "熟悉A，熟悉B，掌握C，掌握D，精通E，精通F，具备G";
        let reqs = extract_requirements(jd);
        assert_eq!(reqs.len(), 5);
    }

    #[test]
    fn test_requirement_candidates_of_fifty_chars_dropped() {
        let long = "长".repeat(60);
        let jd = format!("熟悉{long}\n掌握Docker容器化");
        let reqs = extract_requirements(&jd);
        assert!(reqs.iter().all(|r| r.chars().count() < 50));
        assert!(reqs.iter().any(|r| r == "Docker容器化"));
    }

    #[test]
    fn test_proficiency_phrase_stops_at_clause_break() {
        let jd = "掌握分布式系统设计，了解消息队列。";
        let reqs = extract_requirements(jd);
        assert_eq!(reqs, vec!["分布式系统设计".to_string()]);
    }

    #[test]
    fn test_empty_jd_yields_empty_fields() {
        let info = extract_jd_info("", &vocab());
        assert!(info.title.is_none());
        assert!(info.skills.is_empty());
        assert!(info.key_requirements.is_empty());
    }
}
