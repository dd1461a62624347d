//! Builds the analysis payload for an upload that passed validation.
//!
//! Scores are derived from the validator score so the dashboard numbers stay
//! consistent with the accept/reject decision:
//! - base = clamp(ats_score × 2.5, 60, 95)
//! - overall and structure = base
//! - skills = min(95, base + 3 per detected skill)
//! - content = min(100, base + 10) with email and phone, base − 5 otherwise
//! - ATS compatibility = min(100, ats_score × 3)

use chrono::Utc;
use uuid::Uuid;

use crate::analysis::impact::review_bullets;
use crate::analysis::profile::{extract_sections, NOT_FOUND, SKILL_VOCABULARY};
use crate::models::analysis::{ResumeAnalysis, ScoreBreakdown};
use crate::validation::{ResumeValidator, ValidationResult};

const MIN_BASE_SCORE: f64 = 60.0;
const MAX_BASE_SCORE: f64 = 95.0;
const ATS_SCALE: f64 = 2.5;
const MAX_SKILLS_SCORE: u32 = 95;
const MAX_SUGGESTED_KEYWORDS: usize = 8;

/// Category display name, strength wording, issue wording.
const CATEGORY_FEEDBACK: &[(&str, &str, &str)] = &[
    (
        "CORE RESUME IDENTITY",
        "Document clearly presents itself as a resume",
        "Add a clear resume title or professional summary heading",
    ),
    (
        "EDUCATION SIGNALS",
        "Education background is documented",
        "Add an education section with degree and institution",
    ),
    (
        "EXPERIENCE SIGNALS",
        "Work experience is described",
        "Describe your work experience or internships",
    ),
    (
        "SKILLS SIGNALS",
        "Technical skills are listed",
        "List your technical and soft skills explicitly",
    ),
    (
        "PROJECTS ACHIEVEMENTS",
        "Projects and achievements are highlighted",
        "Highlight projects, awards or certifications",
    ),
    (
        "CONTACT IDENTITY",
        "Contact channels are labelled",
        "Label your contact details (email, phone, LinkedIn, GitHub)",
    ),
    (
        "RESUME SECTIONS",
        "Uses standard resume sections",
        "Add standard sections such as an objective or summary",
    ),
];

pub struct AnalysisInput<'a> {
    pub user_id: Option<String>,
    pub file_name: &'a str,
    pub job_role: &'a str,
    pub text: &'a str,
    pub validation: &'a ValidationResult,
}

pub fn build_analysis(input: AnalysisInput<'_>, validator: &ResumeValidator) -> ResumeAnalysis {
    let sections = extract_sections(input.text, validator);
    let enhanced_bullets = review_bullets(input.text);
    let ats_score = input.validation.score;

    let base = (ats_score as f64 * ATS_SCALE).clamp(MIN_BASE_SCORE, MAX_BASE_SCORE);
    let has_full_contact =
        sections.contact_info.email != NOT_FOUND && sections.contact_info.phone != NOT_FOUND;

    let score_breakdown = ScoreBreakdown {
        structure_score: base.round() as u32,
        skills_score: ((base + 3.0 * sections.skills.len() as f64).round() as u32)
            .min(MAX_SKILLS_SCORE),
        content_score: if has_full_contact {
            ((base + 10.0).round() as u32).min(100)
        } else {
            (base - 5.0).round() as u32
        },
        ats_compatibility: ats_score.saturating_mul(3).min(100),
    };

    let strengths = input
        .validation
        .detected_categories
        .iter()
        .map(|name| match feedback_for(name) {
            Some((strength, _)) => strength.to_string(),
            None => format!("{name} present"),
        })
        .collect();

    let mut issues: Vec<String> = input
        .validation
        .missing_categories
        .iter()
        .map(|name| match feedback_for(name) {
            Some((_, issue)) => issue.to_string(),
            None => format!("{name} not detected"),
        })
        .collect();
    if sections.contact_info.email == NOT_FOUND {
        issues.push("Add a professional email address".to_string());
    }
    if sections.contact_info.phone == NOT_FOUND {
        issues.push("Add a phone number recruiters can reach".to_string());
    }
    if !enhanced_bullets.is_empty() {
        issues.push(format!(
            "{} bullet point(s) lack quantified outcomes",
            enhanced_bullets.len()
        ));
    }

    let suggested_keywords = SKILL_VOCABULARY
        .iter()
        .filter(|skill| !sections.skills.iter().any(|s| s == *skill))
        .take(MAX_SUGGESTED_KEYWORDS)
        .map(|s| s.to_string())
        .collect();

    ResumeAnalysis {
        id: Uuid::new_v4(),
        user_id: input.user_id,
        uploaded_file_name: input.file_name.to_string(),
        job_role: input.job_role.to_string(),
        upload_timestamp: Utc::now(),
        parsed_text: input.text.to_string(),
        sections,
        overall_score: base.round() as u32,
        score_breakdown,
        ats_score,
        detected_categories: input.validation.detected_categories.clone(),
        strengths,
        issues,
        suggested_keywords,
        enhanced_bullets,
    }
}

fn feedback_for(display_name: &str) -> Option<(&'static str, &'static str)> {
    CATEGORY_FEEDBACK
        .iter()
        .find(|(name, _, _)| *name == display_name)
        .map(|(_, strength, issue)| (*strength, *issue))
}
