//! Keyword categories used to decide whether a document reads like a resume.
//!
//! The vocabulary is configuration: `default_categories()` is the built-in
//! table, and a JSON file of `CategoryDefinition`s can replace it at startup.

use serde::{Deserialize, Serialize};

/// Identifier of the category that asserts the document's own genre.
pub const CORE_RESUME_IDENTITY: &str = "CORE_RESUME_IDENTITY";

/// A themed group of keywords with its scoring weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    pub name: String,
    /// Lowercase phrases, matched on word boundaries.
    pub keywords: Vec<String>,
    pub per_keyword_weight: u32,
    pub category_bonus: u32,
    /// Flat extra points added once when the category is detected.
    #[serde(default)]
    pub identity_bonus: u32,
}

impl CategoryDefinition {
    fn new(name: &str, keywords: &[&str], per_keyword_weight: u32, identity_bonus: u32) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            per_keyword_weight,
            category_bonus: 3,
            identity_bonus,
        }
    }

    /// Human-readable name: `CORE_RESUME_IDENTITY` -> `CORE RESUME IDENTITY`.
    pub fn display_name(&self) -> String {
        self.name.replace('_', " ")
    }
}

const CORE_IDENTITY_KEYWORDS: &[&str] = &[
    "resume",
    "cv",
    "curriculum vitae",
    "bio-data",
    "biodata",
    "professional profile",
    "career summary",
    "profile summary",
];

const EDUCATION_KEYWORDS: &[&str] = &[
    "education",
    "qualification",
    "academic",
    "degree",
    "b.e",
    "b.tech",
    "m.tech",
    "b.sc",
    "m.sc",
    "diploma",
    "cgpa",
    "gpa",
    "percentage",
    "university",
    "college",
    "school",
    "bachelor",
    "master",
    "phd",
    "doctorate",
];

const EXPERIENCE_KEYWORDS: &[&str] = &[
    "experience",
    "work experience",
    "employment",
    "internship",
    "intern",
    "job role",
    "designation",
    "company",
    "organization",
    "responsibilities",
    "worked at",
    "position",
    "role",
    "employment history",
    "work history",
];

const SKILLS_KEYWORDS: &[&str] = &[
    "skills",
    "technical skills",
    "soft skills",
    "programming",
    "languages",
    "frameworks",
    "tools",
    "technologies",
    "python",
    "java",
    "sql",
    "html",
    "css",
    "javascript",
    "machine learning",
    "data science",
    "competencies",
];

const PROJECTS_KEYWORDS: &[&str] = &[
    "projects",
    "mini project",
    "major project",
    "final year project",
    "achievements",
    "awards",
    "certifications",
    "hackathon",
    "competition",
    "portfolio",
    "accomplishments",
];

const CONTACT_KEYWORDS: &[&str] = &[
    "email", "phone", "mobile", "contact", "linkedin", "github", "portfolio", "address",
    "location",
];

const SECTION_KEYWORDS: &[&str] = &[
    "objective",
    "career objective",
    "summary",
    "profile",
    "strengths",
    "hobbies",
    "interests",
    "declaration",
    "references",
    "personal details",
    "about me",
];

/// The built-in seven-category table, in scoring order.
pub fn default_categories() -> Vec<CategoryDefinition> {
    vec![
        CategoryDefinition::new(CORE_RESUME_IDENTITY, CORE_IDENTITY_KEYWORDS, 10, 10),
        CategoryDefinition::new("EDUCATION_SIGNALS", EDUCATION_KEYWORDS, 1, 0),
        CategoryDefinition::new("EXPERIENCE_SIGNALS", EXPERIENCE_KEYWORDS, 1, 0),
        CategoryDefinition::new("SKILLS_SIGNALS", SKILLS_KEYWORDS, 1, 0),
        CategoryDefinition::new("PROJECTS_ACHIEVEMENTS", PROJECTS_KEYWORDS, 1, 0),
        CategoryDefinition::new("CONTACT_IDENTITY", CONTACT_KEYWORDS, 1, 0),
        CategoryDefinition::new("RESUME_SECTIONS", SECTION_KEYWORDS, 1, 0),
    ]
}
