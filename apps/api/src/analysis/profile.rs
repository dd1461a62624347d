//! Heuristic section extraction from validated resume text.
//!
//! Line-based and deterministic. Nothing here tries to understand layout;
//! it only fills the analysis payload with the obvious fields.

use crate::models::analysis::{ContactInfo, ResumeSections};
use crate::validation::ResumeValidator;

pub const NOT_FOUND: &str = "Not found";
const EDUCATION_PLACEHOLDER: &str = "Education details not found";
const EXPERIENCE_PLACEHOLDER: &str = "Experience details not found";

/// Skill vocabulary, in reporting order.
pub const SKILL_VOCABULARY: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "React",
    "Angular",
    "Vue.js",
    "Node.js",
    "Express",
    "Python",
    "Django",
    "Flask",
    "Java",
    "Spring Boot",
    "C++",
    "Go",
    "Rust",
    "Ruby",
    "PHP",
    "HTML",
    "CSS",
    "SQL",
    "PostgreSQL",
    "MongoDB",
    "Docker",
    "Kubernetes",
    "AWS",
    "Azure",
    "Git",
    "Linux",
    "Machine Learning",
    "Data Science",
    "TensorFlow",
    "PyTorch",
];

const EDUCATION_HINTS: &[&str] = &[
    "education",
    "bachelor",
    "master",
    "degree",
    "university",
    "college",
];

const EXPERIENCE_HINTS: &[&str] = &[
    "experience",
    "work",
    "intern",
    "engineer",
    "developer",
    "analyst",
];

/// Header lines that should never be mistaken for a person's name.
const TITLE_LINES: &[&str] = &["resume", "cv", "curriculum vitae", "biodata", "bio-data"];

const NAME_SCAN_LINES: usize = 3;
const MAX_NAME_WORDS: usize = 4;
const MIN_EXPERIENCE_LINE: usize = 20;

pub fn extract_sections(text: &str, validator: &ResumeValidator) -> ResumeSections {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let contact_info = ContactInfo {
        name: find_name(&lines).unwrap_or(NOT_FOUND).to_string(),
        email: validator.find_email(text).unwrap_or(NOT_FOUND).to_string(),
        phone: validator.find_phone(text).unwrap_or(NOT_FOUND).to_string(),
        location: validator.find_location(text).unwrap_or(NOT_FOUND).to_string(),
    };

    let education = lines
        .iter()
        .find(|line| contains_any(line, EDUCATION_HINTS))
        .map(|l| l.to_string())
        .unwrap_or_else(|| EDUCATION_PLACEHOLDER.to_string());

    let experience = lines
        .iter()
        .find(|line| line.len() > MIN_EXPERIENCE_LINE && contains_any(line, EXPERIENCE_HINTS))
        .map(|l| l.to_string())
        .unwrap_or_else(|| EXPERIENCE_PLACEHOLDER.to_string());

    ResumeSections {
        contact_info,
        education,
        skills: find_skills(text),
        experience,
    }
}

/// Skills from the vocabulary that appear in `text` as whole terms.
pub fn find_skills(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    SKILL_VOCABULARY
        .iter()
        .filter(|skill| contains_term(&lower, &skill.to_lowercase()))
        .map(|s| s.to_string())
        .collect()
}

fn find_name<'a>(lines: &[&'a str]) -> Option<&'a str> {
    lines.iter().take(NAME_SCAN_LINES).copied().find(|line| {
        let lower = line.to_lowercase();
        !line.contains('@')
            && !line.contains('(')
            && !line.chars().any(|c| c.is_ascii_digit())
            && line.split_whitespace().count() <= MAX_NAME_WORDS
            && !TITLE_LINES.contains(&lower.as_str())
    })
}

fn contains_any(line: &str, hints: &[&str]) -> bool {
    let lower = line.to_lowercase();
    hints.iter().any(|h| lower.contains(h))
}

/// Substring match that refuses to land inside a longer word, so "go" does
/// not match "google" while "c++" and "node.js" still work.
fn contains_term(haystack: &str, term: &str) -> bool {
    haystack.match_indices(term).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + term.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}
