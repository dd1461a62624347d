//! Analysis persistence behind a trait so handlers never touch global state.
//!
//! `AppState` holds an `Arc<dyn AnalysisStore>`; the in-memory store is the
//! default and keeps insertion order.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::analysis::ResumeAnalysis;

#[async_trait]
pub trait AnalysisStore: Send + Sync {
    async fn save(&self, analysis: ResumeAnalysis) -> Result<(), AppError>;

    async fn find(&self, id: Uuid) -> Result<Option<ResumeAnalysis>, AppError>;

    /// Analyses saved with `user_id`, oldest first.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<ResumeAnalysis>, AppError>;
}

#[derive(Default)]
pub struct InMemoryAnalysisStore {
    analyses: RwLock<Vec<ResumeAnalysis>>,
}

impl InMemoryAnalysisStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AnalysisStore for InMemoryAnalysisStore {
    async fn save(&self, analysis: ResumeAnalysis) -> Result<(), AppError> {
        let mut analyses = self.analyses.write().await;
        match analyses.iter_mut().find(|a| a.id == analysis.id) {
            Some(existing) => *existing = analysis,
            None => analyses.push(analysis),
        }
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Option<ResumeAnalysis>, AppError> {
        let analyses = self.analyses.read().await;
        Ok(analyses.iter().find(|a| a.id == id).cloned())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<ResumeAnalysis>, AppError> {
        let analyses = self.analyses.read().await;
        Ok(analyses
            .iter()
            .filter(|a| a.user_id.as_deref() == Some(user_id))
            .cloned()
            .collect())
    }
}
