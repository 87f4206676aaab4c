//! Advice templating — turns the score breakdown into optimization
//! recommendations and resume-editing suggestions.
//!
//! Pure template substitution over pre-written sentences; the only branching
//! is a handful of score and count thresholds.

use crate::matching::scoring::ScoreBreakdown;

/// Below this score, recommend restructuring the resume around the JD.
const RESTRUCTURE_SCORE: u32 = 70;
/// Below this score, suggest adding training/certification entries.
const TRAINING_SCORE: u32 = 60;

/// JD optimization recommendations, in fixed emission order.
pub fn build_recommendations(jd_text: &str, breakdown: &ScoreBreakdown) -> Vec<String> {
    let mut recommendations = Vec::new();

    if !breakdown.missing_skills.is_empty() {
        recommendations.push(format!(
            "针对岗位要求的{}等技能，建议在简历中突出相关项目经验或学习经历",
            breakdown.missing_skills.join("、")
        ));
    }

    if breakdown.score < RESTRUCTURE_SCORE {
        recommendations
            .push("建议根据岗位要求调整简历重点，突出与JD最相关的项目经历和工作成果".to_string());
    }

    recommendations
        .push("在简历中使用与JD相同的关键词，提高简历通过ATS（自动筛选系统）的概率".to_string());
    recommendations.push("量化工作成果，使用具体数字和指标展示您的能力和价值".to_string());

    if jd_text.contains("团队") || jd_text.contains("协作") {
        recommendations.push("强调团队协作能力和跨部门沟通经验，突出软技能".to_string());
    }

    recommendations
}

/// Resume-editing suggestions, in fixed emission order.
pub fn build_resume_suggestions(breakdown: &ScoreBreakdown) -> Vec<String> {
    let mut suggestions = Vec::new();

    if !breakdown.matched_skills.is_empty() {
        suggestions.push(format!(
            "在技能部分突出显示：{}，这些是岗位的核心要求",
            breakdown.matched_skills.join("、")
        ));
    }

    suggestions.push(
        "在项目经历中，优先展示与岗位要求最相关的项目，并详细描述使用的技术和解决的问题"
            .to_string(),
    );
    suggestions.push("在自我评价或工作描述中，使用JD中出现的关键词，提高匹配度".to_string());

    if breakdown.score < TRAINING_SCORE {
        suggestions.push(
            "考虑添加相关的培训经历、在线课程或认证，展示您对岗位相关技能的学习能力".to_string(),
        );
    }

    suggestions.push("确保简历格式清晰，重点突出，便于HR快速识别您的核心优势".to_string());

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(score: u32, matched: &[&str], missing: &[&str]) -> ScoreBreakdown {
        ScoreBreakdown {
            score,
            matched_skills: matched.iter().map(|s| s.to_string()).collect(),
            missing_skills: missing.iter().map(|s| s.to_string()).collect(),
            strengths: vec![],
            weaknesses: vec![],
        }
    }

    #[test]
    fn test_missing_skills_lead_the_recommendations() {
        let recs = build_recommendations("", &breakdown(80, &[], &["Docker", "Redis"]));
        assert!(recs[0].contains("Docker、Redis"));
    }

    #[test]
    fn test_low_score_adds_restructure_recommendation() {
        let recs = build_recommendations("", &breakdown(69, &[], &[]));
        assert!(recs
            .iter()
            .any(|r| r.contains("调整简历重点")));

        let recs = build_recommendations("", &breakdown(70, &[], &[]));
        assert!(!recs.iter().any(|r| r.contains("调整简历重点")));
    }

    #[test]
    fn test_ats_and_quantify_always_present() {
        let recs = build_recommendations("", &breakdown(95, &[], &[]));
        assert!(recs.iter().any(|r| r.contains("ATS")));
        assert!(recs.iter().any(|r| r.contains("量化工作成果")));
    }

    #[test]
    fn test_teamwork_keyword_triggers_soft_skill_recommendation() {
        let with = build_recommendations("强调团队合作", &breakdown(80, &[], &[]));
        assert!(with.iter().any(|r| r.contains("软技能")));

        let with = build_recommendations("需要跨组协作", &breakdown(80, &[], &[]));
        assert!(with.iter().any(|r| r.contains("软技能")));

        let without = build_recommendations("独立完成任务", &breakdown(80, &[], &[]));
        assert!(!without.iter().any(|r| r.contains("软技能")));
    }

    #[test]
    fn test_matched_skills_lead_the_suggestions() {
        let suggestions = build_resume_suggestions(&breakdown(80, &["React", "Vue"], &[]));
        assert!(suggestions[0].contains("React、Vue"));
    }

    #[test]
    fn test_low_score_adds_training_suggestion() {
        let suggestions = build_resume_suggestions(&breakdown(59, &[], &[]));
        assert!(suggestions.iter().any(|s| s.contains("培训经历")));

        let suggestions = build_resume_suggestions(&breakdown(60, &[], &[]));
        assert!(!suggestions.iter().any(|s| s.contains("培训经历")));
    }

    #[test]
    fn test_format_suggestion_always_last() {
        let suggestions = build_resume_suggestions(&breakdown(90, &["React"], &[]));
        assert!(suggestions.last().unwrap().contains("简历格式清晰"));
    }
}
