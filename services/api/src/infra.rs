use loandesk::workflows::filing::domain::{ChecklistRequirement, RequirementId};
use loandesk::workflows::filing::repository::{
    ChecklistRepository, DocumentOwner, FolderRecord, FolderRepository, RepositoryError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Checklist store backed by an in-memory seed until the CRM integration
/// lands. Every owner currently shares the standard lending checklist.
pub(crate) struct InMemoryChecklistRepository {
    items: Vec<ChecklistRequirement>,
}

impl InMemoryChecklistRepository {
    pub(crate) fn seeded() -> Self {
        Self {
            items: standard_lending_checklist(),
        }
    }

    pub(crate) fn with_items(items: Vec<ChecklistRequirement>) -> Self {
        Self { items }
    }
}

impl ChecklistRepository for InMemoryChecklistRepository {
    fn requirements_for(
        &self,
        _owner: &DocumentOwner,
    ) -> Result<Vec<ChecklistRequirement>, RepositoryError> {
        Ok(self.items.clone())
    }
}

#[derive(Default)]
pub(crate) struct InMemoryFolderRepository {
    records: Mutex<HashMap<DocumentOwner, Vec<FolderRecord>>>,
}

impl FolderRepository for InMemoryFolderRepository {
    fn folders_for(&self, owner: &DocumentOwner) -> Result<Vec<FolderRecord>, RepositoryError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("folder store lock poisoned".to_string()))?;
        Ok(guard.get(owner).cloned().unwrap_or_default())
    }

    fn create(&self, record: FolderRecord) -> Result<FolderRecord, RepositoryError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("folder store lock poisoned".to_string()))?;
        let folders = guard.entry(record.owner.clone()).or_default();
        if folders.iter().any(|f| f.folder_key == record.folder_key) {
            return Err(RepositoryError::Conflict);
        }
        folders.push(record.clone());
        Ok(record)
    }
}

pub(crate) fn standard_lending_checklist() -> Vec<ChecklistRequirement> {
    let requirement = |id: &str, name: &str, category: &str, types: &[&str]| ChecklistRequirement {
        id: RequirementId(id.to_string()),
        name: name.to_string(),
        category: category.to_string(),
        matching_document_types: types.iter().map(|t| t.to_string()).collect(),
        due_on: None,
    };

    vec![
        requirement(
            "kyc-proof-of-id",
            "Certified Proof of ID",
            "Identity",
            &["Passport", "Driving Licence"],
        ),
        requirement(
            "kyc-proof-of-address",
            "Proof of Address",
            "Address",
            &["Utility Bill", "Council Tax Bill"],
        ),
        requirement(
            "fin-bank-statements",
            "3 Months Bank Statements",
            "Financial",
            &["Bank Statement"],
        ),
        requirement(
            "fin-annual-accounts",
            "Latest Annual Accounts",
            "Financial",
            &["Financial Statements", "Management Accounts"],
        ),
        requirement(
            "val-red-book",
            "Red Book Valuation",
            "Valuation",
            &["Valuation Report"],
        ),
        requirement(
            "plan-permission",
            "Planning Permission",
            "Plans & Planning",
            &["Planning Permission"],
        ),
        requirement(
            "leg-facility-agreement",
            "Signed Facility Agreement",
            "Legal",
            &["Facility Agreement"],
        ),
        requirement(
            "leg-personal-guarantee",
            "Personal Guarantee",
            "Legal",
            &["Personal Guarantee"],
        ),
        requirement(
            "ins-buildings-policy",
            "Buildings Insurance Policy",
            "Insurance",
            &["Buildings Insurance", "Insurance Policy"],
        ),
    ]
}
