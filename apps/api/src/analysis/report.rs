//! Plain-text "enhanced resume" report offered as a download.

use chrono::NaiveDate;

use crate::models::analysis::ResumeAnalysis;

pub fn render_report(analysis: &ResumeAnalysis, date: NaiveDate) -> String {
    let breakdown = &analysis.score_breakdown;

    let mut lines = vec![
        "ENHANCED RESUME REPORT".to_string(),
        "======================".to_string(),
        String::new(),
        format!("Original File: {}", analysis.uploaded_file_name),
        format!("Target Role: {}", analysis.job_role),
        format!("Report Date: {}", date.format("%Y-%m-%d")),
        String::new(),
        format!("OVERALL SCORE: {}/100", analysis.overall_score),
        format!("ATS SCORE: {}", analysis.ats_score),
        String::new(),
        "SCORE BREAKDOWN:".to_string(),
        format!("- Structure: {}/100", breakdown.structure_score),
        format!("- Skills: {}/100", breakdown.skills_score),
        format!("- Content Quality: {}/100", breakdown.content_score),
        format!("- ATS Compatibility: {}/100", breakdown.ats_compatibility),
    ];

    push_list(&mut lines, "STRENGTHS:", &analysis.strengths);
    push_list(&mut lines, "ISSUES TO ADDRESS:", &analysis.issues);
    push_list(&mut lines, "SUGGESTED KEYWORDS:", &analysis.suggested_keywords);

    if !analysis.enhanced_bullets.is_empty() {
        lines.push(String::new());
        lines.push("ENHANCED CONTENT SUGGESTIONS:".to_string());
        for bullet in &analysis.enhanced_bullets {
            lines.push(format!("[{}]", bullet.section));
            lines.push(format!("Original: \"{}\"", bullet.original));
            lines.push(format!("Enhanced: \"{}\"", bullet.improved));
        }
    }

    lines.join("\n")
}

fn push_list(lines: &mut Vec<String>, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push(title.to_string());
    lines.extend(items.iter().map(|item| format!("• {item}")));
}

/// `enhanced_<stem>_<YYYY-MM-DD>.txt`
pub fn report_filename(original: &str, date: NaiveDate) -> String {
    let stem = match original.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => original,
    };
    let stem: String = stem
        .chars()
        .map(|c| if c == '"' || c.is_control() { '_' } else { c })
        .collect();
    format!("enhanced_{}_{}.txt", stem, date.format("%Y-%m-%d"))
}
