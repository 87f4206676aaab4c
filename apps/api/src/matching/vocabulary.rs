//! Skill vocabulary — the fixed list of recognized technology names and the
//! containment scan both extractors run against it.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Built-in vocabulary, in declaration order. Scan results preserve this
/// order, so downstream skill lists are stable across runs.
const DEFAULT_SKILLS: &[&str] = &[
    "React",
    "Vue",
    "Angular",
    "TypeScript",
    "JavaScript",
    "Node.js",
    "Python",
    "Java",
    "Go",
    "PHP",
    "C++",
    "SQL",
    "MongoDB",
    "MySQL",
    "Docker",
    "Kubernetes",
    "AWS",
    "Git",
    "Linux",
    "HTML",
    "CSS",
    "Next.js",
    "Express",
    "Spring",
    "Django",
    "Flask",
    "Vue.js",
    "Tailwind",
    "Bootstrap",
    "Redux",
    "Webpack",
    "Nginx",
    "Redis",
];

/// Injectable skill vocabulary. Held in `AppState` so the matching logic is
/// testable independent of the list's contents; swap via `SKILL_VOCAB_FILE`.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    skills: Vec<String>,
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect())
    }
}

impl SkillVocabulary {
    pub fn new(skills: Vec<String>) -> Self {
        Self { skills }
    }

    /// Loads a vocabulary from a newline-separated file. Blank lines and
    /// `#` comment lines are skipped; declaration order is preserved.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read skill vocabulary file {}", path.display()))?;

        let skills: Vec<String> = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();

        if skills.is_empty() {
            anyhow::bail!(
                "skill vocabulary file {} contains no skills",
                path.display()
            );
        }

        Ok(Self::new(skills))
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// Scans `text` and returns every vocabulary skill present, in
    /// declaration order. A skill counts as present when the raw text
    /// contains it verbatim or the lower-cased text contains its lower-cased
    /// form.
    ///
    /// Containment is NOT word-boundary aware: "Go" matches inside "Google"
    /// and "Java" inside "JavaScript". Compatible-by-design with the
    /// original heuristic; callers must not assume boundary semantics.
    pub fn scan(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        self.skills
            .iter()
            .filter(|skill| text.contains(skill.as_str()) || lower.contains(&skill.to_lowercase()))
            .cloned()
            .collect()
    }
}
