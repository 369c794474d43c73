use serde::{Deserialize, Serialize};

use super::domain::{ChecklistRequirement, FolderLevel};

/// Who a document, folder, or checklist belongs to. A missing project id
/// means only client-level placement is possible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentOwner {
    pub client_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl DocumentOwner {
    pub fn client(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            project_id: None,
        }
    }

    pub fn project(client_id: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            project_id: Some(project_id.into()),
        }
    }

    pub fn has_project_context(&self) -> bool {
        self.project_id.is_some()
    }
}

/// Stored folder row as the persistence collaborator exposes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderRecord {
    pub folder_key: String,
    pub name: String,
    pub level: FolderLevel,
    pub owner: DocumentOwner,
}

/// Checklist storage seam so the filing service can be exercised without a
/// backing database.
pub trait ChecklistRepository: Send + Sync {
    fn requirements_for(&self, owner: &DocumentOwner)
        -> Result<Vec<ChecklistRequirement>, RepositoryError>;
}

/// Folder storage seam. Creation must be idempotent at the service level;
/// the repository only reports what exists and appends new rows.
pub trait FolderRepository: Send + Sync {
    fn folders_for(&self, owner: &DocumentOwner) -> Result<Vec<FolderRecord>, RepositoryError>;
    fn create(&self, record: FolderRecord) -> Result<FolderRecord, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("folder already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
