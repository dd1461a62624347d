//! ATS-style resume validator.
//!
//! Scores a document by weighted keyword-category matches, filename hints and
//! contact details, then compares the total against a fixed threshold.
//! Every pattern is compiled once in `ResumeValidator::new`; `validate` is a
//! pure function over its inputs and is safe to call from any thread.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::validation::categories::{default_categories, CategoryDefinition};

/// Minimum total score for a document to count as a resume.
pub const ATS_THRESHOLD: u32 = 18;

/// Score at which `confidence_score` saturates at 100.
const CONFIDENCE_CEILING: f64 = 30.0;

const FILENAME_INDICATORS: &[&str] = &["resume", "cv", "curriculum", "vitae"];
const FILENAME_BONUS: u32 = 2;
const EMAIL_BONUS: u32 = 2;
const PHONE_BONUS: u32 = 2;

const EMAIL_PATTERN: &str = r"(?i)\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";
const PHONE_PATTERN: &str = r"\b[0-9]{3}[-.]?[0-9]{3}[-.]?[0-9]{4}\b";
/// `City, ST` with multi-word cities; only used for profile extraction, never scored.
const LOCATION_PATTERN: &str = r"\b[A-Z][a-z]+(?: [A-Z][a-z]+)*,\s*[A-Z]{2}\b";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub score: u32,
    pub threshold: u32,
    /// Display names of categories with at least one keyword match, table order.
    pub detected_categories: Vec<String>,
    pub reason: String,
    /// `score` scaled to 0–100.
    pub confidence_score: u32,
    pub missing_categories: Vec<String>,
    pub matched_keywords: Vec<String>,
}

struct KeywordPattern {
    keyword: String,
    regex: Regex,
}

struct CompiledCategory {
    display_name: String,
    patterns: Vec<KeywordPattern>,
    per_keyword_weight: u32,
    category_bonus: u32,
    identity_bonus: u32,
}

/// Resume classifier over a fixed category table.
pub struct ResumeValidator {
    categories: Vec<CompiledCategory>,
    email: Regex,
    phone: Regex,
    location: Regex,
}

impl ResumeValidator {
    /// Compiles word-boundary patterns for every keyword of every category.
    /// Keywords are lowercased and regex-escaped; blank keywords are skipped.
    pub fn new(categories: Vec<CategoryDefinition>) -> Result<Self, regex::Error> {
        let mut compiled = Vec::with_capacity(categories.len());
        for category in categories {
            let mut patterns = Vec::with_capacity(category.keywords.len());
            for keyword in &category.keywords {
                let keyword = keyword.trim().to_lowercase();
                if keyword.is_empty() {
                    continue;
                }
                let regex = Regex::new(&format!(r"\b{}\b", regex::escape(&keyword)))?;
                patterns.push(KeywordPattern { keyword, regex });
            }
            compiled.push(CompiledCategory {
                display_name: category.display_name(),
                patterns,
                per_keyword_weight: category.per_keyword_weight,
                category_bonus: category.category_bonus,
                identity_bonus: category.identity_bonus,
            });
        }

        Ok(Self {
            categories: compiled,
            email: Regex::new(EMAIL_PATTERN)?,
            phone: Regex::new(PHONE_PATTERN)?,
            location: Regex::new(LOCATION_PATTERN)?,
        })
    }

    pub fn with_default_categories() -> Result<Self, regex::Error> {
        Self::new(default_categories())
    }

    /// Classifies `text` as resume-like or not. Never fails: degenerate input
    /// simply scores low.
    pub fn validate(&self, text: &str, filename: Option<&str>) -> ValidationResult {
        let text_lower = text.to_lowercase();
        let filename_lower = filename.map(str::to_lowercase).unwrap_or_default();

        let mut total_score: u32 = 0;
        let mut detected_categories = Vec::new();
        let mut missing_categories = Vec::new();
        let mut matched_keywords: Vec<String> = Vec::new();

        for category in &self.categories {
            let mut keyword_hits: u32 = 0;
            let mut detected = false;

            for pattern in &category.patterns {
                let count = pattern.regex.find_iter(&text_lower).count() as u32;
                if count == 0 {
                    continue;
                }
                detected = true;
                keyword_hits = keyword_hits.saturating_add(count);
                if !matched_keywords.contains(&pattern.keyword) {
                    matched_keywords.push(pattern.keyword.clone());
                }
            }

            if detected {
                let category_score = keyword_hits
                    .saturating_mul(category.per_keyword_weight)
                    .saturating_add(category.category_bonus)
                    .saturating_add(category.identity_bonus);
                total_score = total_score.saturating_add(category_score);
                detected_categories.push(category.display_name.clone());
            } else {
                missing_categories.push(category.display_name.clone());
            }
        }

        let filename_hits = FILENAME_INDICATORS
            .iter()
            .filter(|indicator| filename_lower.contains(*indicator))
            .count() as u32;
        total_score = total_score.saturating_add(filename_hits * FILENAME_BONUS);

        if self.email.is_match(text) {
            total_score = total_score.saturating_add(EMAIL_BONUS);
        }
        if self.phone.is_match(text) {
            total_score = total_score.saturating_add(PHONE_BONUS);
        }

        let is_valid = total_score >= ATS_THRESHOLD;
        let reason = if is_valid {
            format!("Document meets ATS resume criteria with score {total_score}/{ATS_THRESHOLD}")
        } else {
            format!(
                "Document does not meet ATS resume criteria (score: {total_score}/{ATS_THRESHOLD})"
            )
        };

        ValidationResult {
            is_valid,
            score: total_score,
            threshold: ATS_THRESHOLD,
            detected_categories,
            reason,
            confidence_score: confidence_score(total_score),
            missing_categories,
            matched_keywords,
        }
    }

    /// First email address in `text`, if any.
    pub fn find_email<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.email.find(text).map(|m| m.as_str())
    }

    /// First phone number in `text`, if any.
    pub fn find_phone<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.phone.find(text).map(|m| m.as_str())
    }

    /// First `City, ST` location in `text`, if any.
    pub fn find_location<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.location.find(text).map(|m| m.as_str())
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }
}

fn confidence_score(score: u32) -> u32 {
    ((score as f64 / CONFIDENCE_CEILING) * 100.0).round().min(100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> ResumeValidator {
        ResumeValidator::with_default_categories().unwrap()
    }

    const RESUME_TEXT: &str = "Resume\n\
        John Doe\n\
        john.doe@example.com | 555-123-4567\n\
        Education\n\
        Bachelor of Science, State University\n\
        Experience\n\
        Software Engineer at Acme\n\
        Skills\n\
        Python, SQL\n\
        Projects\n\
        Inventory tracker";

    #[test]
    fn test_scenario_empty_text_scores_zero() {
        let r = validator().validate("", Some("x.txt"));
        assert_eq!(r.score, 0);
        assert!(!r.is_valid);
        assert!(r.detected_categories.is_empty());
        assert_eq!(r.missing_categories.len(), 7);
        assert_eq!(r.confidence_score, 0);
    }

    #[test]
    fn test_scenario_full_resume_passes() {
        let r = validator().validate(RESUME_TEXT, Some("john-resume.txt"));
        assert!(r.score >= ATS_THRESHOLD);
        assert!(r.is_valid);
        for expected in [
            "CORE RESUME IDENTITY",
            "EDUCATION SIGNALS",
            "EXPERIENCE SIGNALS",
            "SKILLS SIGNALS",
            "PROJECTS ACHIEVEMENTS",
        ] {
            assert!(
                r.detected_categories.iter().any(|c| c == expected),
                "missing {expected}"
            );
        }
        assert!(r.reason.contains("meets ATS resume criteria"));
        assert_eq!(r.threshold, 18);
    }

    #[test]
    fn test_scenario_full_resume_exact_score() {
        // core: 1×10 + 3 + 10 = 23
        // education: education, bachelor, university = 3 + 3 = 6
        // experience: experience = 1 + 3 = 4
        // skills: skills, python, sql = 3 + 3 = 6
        // projects: projects = 1 + 3 = 4
        // filename "resume" = 2, email = 2, phone = 2
        let r = validator().validate(RESUME_TEXT, Some("john-resume.txt"));
        assert_eq!(r.score, 23 + 6 + 4 + 6 + 4 + 2 + 2 + 2);
        assert_eq!(r.confidence_score, 100);
    }

    #[test]
    fn test_scenario_certificate_is_rejected() {
        let text = "Certificate of Completion\n\
            This is to certify that Jane Doe has successfully completed the online course\n\
            Introduction to Cloud Computing offered on Coursera.\n\
            Issued on 12 March 2024. Verify at coursera.org/verify/ABC123";
        let r = validator().validate(text, Some("certificate.pdf"));
        assert!(r.score < ATS_THRESHOLD);
        assert!(!r.is_valid);
        assert!(r.reason.contains("does not meet ATS resume criteria"));
    }

    #[test]
    fn test_scenario_social_post_scores_near_zero() {
        let text = "🎉🎉 So thrilled to share that we just hit 10k followers!! \
            Thank you all for the love 🙏❤️ #blessed #grateful #milestone #weekendvibes";
        let r = validator().validate(text, Some("post.txt"));
        assert!(r.score <= 2);
        assert!(!r.is_valid);
    }

    #[test]
    fn test_threshold_law_holds() {
        let v = validator();
        for text in ["", "resume", "education", "cv skills python", RESUME_TEXT] {
            let r = v.validate(text, None);
            assert_eq!(r.is_valid, r.score >= r.threshold, "text: {text}");
        }
    }

    #[test]
    fn test_single_core_keyword_scores_weight_plus_bonuses() {
        let r = validator().validate("resume", None);
        assert_eq!(r.score, 23);
        assert!(r.is_valid);
        assert_eq!(r.detected_categories, vec!["CORE RESUME IDENTITY"]);
    }

    #[test]
    fn test_single_education_keyword_scores_weight_plus_bonus() {
        let r = validator().validate("education", None);
        assert_eq!(r.score, 4);
        assert!(!r.is_valid);
    }

    #[test]
    fn test_repeated_keyword_counts_every_occurrence() {
        let r = validator().validate("education education education", None);
        assert_eq!(r.score, 3 + 3);
    }

    #[test]
    fn test_keyword_shared_by_two_categories_scores_in_both() {
        let r = validator().validate("portfolio", None);
        assert_eq!(r.score, 8);
        assert_eq!(
            r.detected_categories,
            vec!["PROJECTS ACHIEVEMENTS", "CONTACT IDENTITY"]
        );
        assert_eq!(r.matched_keywords, vec!["portfolio"]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let v = validator();
        let upper = v.validate("RESUME", None);
        let title = v.validate("Resume", None);
        let lower = v.validate("resume", None);
        assert_eq!(upper.score, lower.score);
        assert_eq!(title.score, lower.score);
        assert_eq!(upper.detected_categories, lower.detected_categories);
    }

    #[test]
    fn test_cv_respects_word_boundaries() {
        let r = validator().validate("recovery activate", None);
        assert_eq!(r.score, 0);
        assert!(r.detected_categories.is_empty());
    }

    #[test]
    fn test_cv_inside_longer_words_is_ignored() {
        let r = validator().validate("hcv screening at cvs", None);
        assert!(r.detected_categories.is_empty());
    }

    #[test]
    fn test_cv_as_a_word_matches() {
        let r = validator().validate("my cv", None);
        assert_eq!(r.detected_categories, vec!["CORE RESUME IDENTITY"]);
    }

    #[test]
    fn test_dotted_keyword_is_escaped() {
        let v = validator();
        assert_eq!(v.validate("b.tech", None).score, 4);
        // '.' must not act as a wildcard
        assert_eq!(v.validate("bxtech", None).score, 0);
    }

    #[test]
    fn test_email_bonus_applies_once() {
        let v = validator();
        let one = v.validate("a.b@example.io", None);
        let many = v.validate("a.b@example.io c.d@example.io e@f.org", None);
        assert_eq!(one.score, 2);
        assert_eq!(many.score, 2);
    }

    #[test]
    fn test_phone_bonus_applies_once() {
        let v = validator();
        let one = v.validate("555-123-4567", None);
        let many = v.validate("555-123-4567 555.987.6543 5551234567", None);
        assert_eq!(one.score, 2);
        assert_eq!(many.score, 2);
    }

    #[test]
    fn test_filename_indicators_are_cumulative() {
        let v = validator();
        assert_eq!(v.validate("", Some("My-Resume-CV.pdf")).score, 4);
        assert_eq!(v.validate("", Some("Curriculum_Vitae.docx")).score, 4);
        assert_eq!(v.validate("", Some("notes.txt")).score, 0);
        assert_eq!(v.validate("", None).score, 0);
    }

    #[test]
    fn test_filename_match_is_substring() {
        assert_eq!(validator().validate("", Some("docvault.txt")).score, 2);
    }

    #[test]
    fn test_detected_categories_follow_table_order() {
        let r = validator().validate("summary python university resume", None);
        assert_eq!(
            r.detected_categories,
            vec![
                "CORE RESUME IDENTITY",
                "EDUCATION SIGNALS",
                "SKILLS SIGNALS",
                "RESUME SECTIONS",
            ]
        );
        assert_eq!(r.missing_categories.len(), 3);
    }

    #[test]
    fn test_validate_is_idempotent() {
        let v = validator();
        let first = v.validate(RESUME_TEXT, Some("john-resume.txt"));
        let second = v.validate(RESUME_TEXT, Some("john-resume.txt"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_adversarial_input_completes() {
        let text = "a".repeat(200_000) + &"@".repeat(50_000) + &"1-".repeat(50_000);
        let r = validator().validate(&text, Some(&"cv".repeat(1_000)));
        // filename indicators count once each, however often they repeat
        assert_eq!(r.score, 2);
    }

    #[test]
    fn test_non_ascii_text_does_not_panic() {
        let r = validator().validate("Lebenslauf – Ausbildung – Universität Zürich – Erfahrung", None);
        assert!(!r.is_valid);
    }

    #[test]
    fn test_confidence_score_scales_to_thirty() {
        assert_eq!(confidence_score(0), 0);
        assert_eq!(confidence_score(15), 50);
        assert_eq!(confidence_score(18), 60);
        assert_eq!(confidence_score(45), 100);
    }

    #[test]
    fn test_custom_categories_are_lowercased() {
        let v = ResumeValidator::new(vec![CategoryDefinition {
            name: "CUSTOM_SIGNALS".to_string(),
            keywords: vec!["Rust".to_string(), "  ".to_string()],
            per_keyword_weight: 5,
            category_bonus: 1,
            identity_bonus: 0,
        }])
        .unwrap();
        let r = v.validate("rust and RUST", None);
        assert_eq!(r.score, 11);
        assert_eq!(r.detected_categories, vec!["CUSTOM SIGNALS"]);
        assert_eq!(v.category_count(), 1);
    }

    #[test]
    fn test_find_contact_details() {
        let v = validator();
        let text = "Reach me at jane@corp.dev or 555.222.3333";
        assert_eq!(v.find_email(text), Some("jane@corp.dev"));
        assert_eq!(v.find_phone(text), Some("555.222.3333"));
        assert_eq!(v.find_email("no contact"), None);
        assert_eq!(v.find_location("Based in Austin, TX"), Some("Austin, TX"));
        assert_eq!(v.find_location("austin, tx"), None);
        assert_eq!(
            v.find_location("Relocating to New York, NY in May"),
            Some("New York, NY")
        );
    }
}
