use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeSections {
    pub contact_info: ContactInfo,
    pub education: String,
    pub skills: Vec<String>,
    pub experience: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub structure_score: u32,
    pub skills_score: u32,
    pub content_score: u32,
    pub ats_compatibility: u32,
}

/// An unquantified bullet and a stronger rewrite of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancedBullet {
    pub original: String,
    pub improved: String,
    pub section: String,
    pub reason: String,
}

/// Full analysis payload for one validated upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub id: Uuid,
    pub user_id: Option<String>,
    pub uploaded_file_name: String,
    pub job_role: String,
    pub upload_timestamp: DateTime<Utc>,
    pub parsed_text: String,
    pub sections: ResumeSections,
    pub overall_score: u32,
    pub score_breakdown: ScoreBreakdown,
    pub ats_score: u32,
    pub detected_categories: Vec<String>,
    pub strengths: Vec<String>,
    pub issues: Vec<String>,
    pub suggested_keywords: Vec<String>,
    pub enhanced_bullets: Vec<EnhancedBullet>,
}
