//! Resume field extraction — work experiences, skills, and education from
//! raw resume text.
//!
//! Same best-effort contract as JD extraction: independent pattern-matchers,
//! `None` for not-found, no sentinel strings inside the typed core.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::matching::vocabulary::SkillVocabulary;

/// A single work-experience entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: Option<String>,
    pub duration: Option<String>,
    pub skills: Vec<String>,
    pub description: String,
}

/// Education fields. Each is independently extracted and optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Education {
    pub degree: Option<String>,
    pub university: Option<String>,
    pub year: Option<String>,
}

/// Everything extracted from a resume. Built fresh per request, internal
/// only — never serialized to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeData {
    pub experiences: Vec<Experience>,
    pub skills: Vec<String>,
    pub education: Education,
}

const MAX_EXPERIENCES: usize = 3;
const MAX_EXPERIENCE_SKILLS: usize = 4;
const MAX_DESCRIPTION_CHARS: usize = 100;
const FALLBACK_DESCRIPTION_CHARS: usize = 150;

lazy_static! {
    // Lines that introduce an employer: "公司：..." / "就职于..." / "任职..."
    static ref EXPERIENCE_LINE_RE: Regex =
        Regex::new(r"(?:公司|就职|任职|工作)[:：]?[^\n]+").unwrap();
    // Everything from the first colon to the end of the line
    static ref COMPANY_TAIL_RE: Regex = Regex::new(r"[:：].*$").unwrap();

    static ref DEGREE_RE: Regex = Regex::new(r"(?:教育|学历|毕业)[:：]?\s*([^\n]+)").unwrap();
    static ref UNIVERSITY_RE: Regex = Regex::new(r"(?:大学|学院|学校)[:：]?\s*([^\n]+)").unwrap();
    // First 4-digit token followed by whitespace or 年
    static ref YEAR_RE: Regex = Regex::new(r"(\d{4})[\s年]").unwrap();
}

/// Extracts experiences, skills, and education from resume text.
///
/// When no experience line matches, one entry is synthesized from the head
/// of the text so downstream scoring always sees at least one experience.
pub fn extract_resume_data(resume_text: &str, vocabulary: &SkillVocabulary) -> ResumeData {
    let skills = vocabulary.scan(resume_text);
    let lower = resume_text.to_lowercase();

    let mut experiences: Vec<Experience> = EXPERIENCE_LINE_RE
        .find_iter(resume_text)
        .take(MAX_EXPERIENCES)
        .enumerate()
        .map(|(index, line)| {
            let line = line.as_str();
            let company = COMPANY_TAIL_RE.replace(line, "").trim().to_string();
            let entry_skills: Vec<String> = skills
                .iter()
                .filter(|skill| {
                    line.contains(skill.as_str()) || lower.contains(&skill.to_lowercase())
                })
                .take(MAX_EXPERIENCE_SKILLS)
                .cloned()
                .collect();

            Experience {
                title: format!("工作经历{}", index + 1),
                company: (!company.is_empty()).then_some(company),
                duration: None,
                skills: entry_skills,
                description: truncate_chars(line, MAX_DESCRIPTION_CHARS),
            }
        })
        .collect();

    if experiences.is_empty() {
        experiences.push(Experience {
            title: "工作经历".to_string(),
            company: Some("从简历中提取".to_string()),
            duration: None,
            skills: skills.iter().take(MAX_EXPERIENCE_SKILLS).cloned().collect(),
            description: truncate_chars(resume_text, FALLBACK_DESCRIPTION_CHARS),
        });
    }

    let education = Education {
        degree: first_capture(&DEGREE_RE, resume_text),
        university: first_capture(&UNIVERSITY_RE, resume_text),
        year: first_capture(&YEAR_RE, resume_text),
    };

    ResumeData {
        experiences,
        skills,
        education,
    }
}

fn first_capture(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
        .filter(|value| !value.is_empty())
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
