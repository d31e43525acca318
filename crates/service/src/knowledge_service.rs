use std::str::FromStr;

use xinzhi_core::{KNOWLEDGE_BASE, KnowledgeBase, KnowledgeCategory, KnowledgeHit};

use crate::ServiceError;

pub struct KnowledgeService {
    base: &'static KnowledgeBase,
}

impl Default for KnowledgeService {
    fn default() -> Self {
        Self::new(&KNOWLEDGE_BASE)
    }
}

impl KnowledgeService {
    #[must_use]
    pub const fn new(base: &'static KnowledgeBase) -> Self {
        Self { base }
    }

    /// The whole dataset, unmodified.
    #[must_use]
    pub const fn dataset(&self) -> &'static KnowledgeBase {
        self.base
    }

    /// Substring search. `query` is required. An empty `category` scans
    /// everything; an unrecognized one matches nothing.
    pub fn search(
        &self,
        query: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<KnowledgeHit>, ServiceError> {
        let query = query.ok_or_else(|| ServiceError::InvalidInput("query is required".to_owned()))?;
        let category = match category.filter(|c| !c.is_empty()) {
            None => None,
            Some(raw) => match KnowledgeCategory::from_str(raw) {
                Ok(category) => Some(category),
                Err(e) => {
                    tracing::debug!(error = %e, "knowledge search on unknown category");
                    return Ok(Vec::new());
                },
            },
        };
        let hits = self.base.search(query, category);
        tracing::debug!(query, ?category, hits = hits.len(), "knowledge search");
        Ok(hits)
    }
}
