use serde::{Deserialize, Serialize};

/// Lifecycle metadata of one aggregate instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityMetadata {
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    /// Soft delete flag
    pub is_deleted: bool,
}

impl EntityMetadata {
    pub fn new() -> Self {
        let now = chrono::Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            is_deleted: false,
        }
    }

    /// Fixed timestamps for deterministic fixtures
    pub fn at(created_at: chrono::DateTime<chrono::Utc>) -> Self {
        Self {
            created_at,
            updated_at: created_at,
            is_deleted: false,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now();
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}
