//! Bullet-level impact review: finds unquantified bullets and proposes
//! stronger, metric-ready rewrites.

use crate::models::analysis::EnhancedBullet;

const BULLET_MARKERS: &[char] = &['•', '-', '*', '▪', '–', '●'];

/// Vague openers and the stronger verb that replaces them.
const VERB_UPGRADES: &[(&str, &str)] = &[
    ("responsible for", "Owned"),
    ("worked on", "Delivered"),
    ("participated in", "Contributed to"),
    ("involved in", "Drove"),
    // "helped" is followed by a bare infinitive or an object
    ("helped", "Played a key role in helping"),
    ("assisted with", "Supported delivery of"),
    ("assisted", "Supported"),
    ("handled", "Managed"),
    ("did", "Executed"),
];

const METRIC_PLACEHOLDER: &str = "resulting in [quantified outcome, e.g. 30% faster or $10K saved]";

const MAX_ENHANCED_BULLETS: usize = 5;

/// A bullet counts as quantified when it carries a number, percentage
/// or currency amount.
pub fn is_quantified(text: &str) -> bool {
    let has_digit = text.chars().any(|c| c.is_ascii_digit());
    let has_percent = text.contains('%');
    let has_currency = text.contains('$') || text.contains('€') || text.contains('£');
    has_digit || has_percent || has_currency
}

/// Walks the document, tracking the current section heading, and returns a
/// rewrite for each unquantified bullet (at most five).
pub fn review_bullets(text: &str) -> Vec<EnhancedBullet> {
    let mut section = "general";
    let mut enhanced = Vec::new();

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let Some(body) = strip_bullet(line) else {
            if let Some(heading) = heading_section(line) {
                section = heading;
            }
            continue;
        };

        if !body.chars().any(char::is_alphabetic) || is_quantified(body) {
            continue;
        }

        enhanced.push(EnhancedBullet {
            original: body.to_string(),
            improved: improve(body),
            section: section.to_string(),
            reason: "No quantified outcome found".to_string(),
        });

        if enhanced.len() == MAX_ENHANCED_BULLETS {
            break;
        }
    }

    enhanced
}

fn strip_bullet(line: &str) -> Option<&str> {
    line.strip_prefix(BULLET_MARKERS).map(str::trim)
}

fn heading_section(line: &str) -> Option<&'static str> {
    if line.len() > 40 {
        return None;
    }
    let lower = line.to_lowercase();
    if lower.contains("experience") || lower.contains("employment") {
        Some("experience")
    } else if lower.contains("project") {
        Some("projects")
    } else if lower.contains("education") {
        Some("education")
    } else if lower.contains("skill") {
        Some("skills")
    } else {
        None
    }
}

fn improve(bullet: &str) -> String {
    let trimmed = bullet.trim_end_matches('.');

    for (vague, strong) in VERB_UPGRADES {
        let opens_with_vague = trimmed
            .get(..vague.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(vague));
        let Some(rest) = trimmed.get(vague.len()..) else {
            continue;
        };
        if opens_with_vague && (rest.is_empty() || rest.starts_with(' ')) {
            return format!("{strong} {}, {METRIC_PLACEHOLDER}", rest.trim_start());
        }
    }

    format!("{trimmed}, {METRIC_PLACEHOLDER}")
}
