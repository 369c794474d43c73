use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::workflows::filing::domain::{ChecklistRequirement, RequirementId};
use crate::workflows::filing::repository::{
    ChecklistRepository, DocumentOwner, FolderRecord, FolderRepository, RepositoryError,
};
use crate::workflows::filing::service::DocumentFilingService;

pub(super) fn requirement(
    id: &str,
    name: &str,
    category: &str,
    types: &[&str],
) -> ChecklistRequirement {
    ChecklistRequirement {
        id: RequirementId(id.to_string()),
        name: name.to_string(),
        category: category.to_string(),
        matching_document_types: types.iter().map(|t| t.to_string()).collect(),
        due_on: None,
    }
}

pub(super) fn standard_checklist() -> Vec<ChecklistRequirement> {
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
            &["Utility Bill", "Bank Statement"],
        ),
        requirement(
            "fin-bank-statements",
            "3 Months Bank Statements",
            "Financial",
            &["Bank Statement"],
        ),
        requirement(
            "val-red-book",
            "Red Book Valuation",
            "Valuation",
            &["Valuation Report"],
        ),
        requirement(
            "leg-facility-agreement",
            "Signed Facility Agreement",
            "Legal",
            &["Facility Agreement"],
        ),
    ]
}

#[derive(Default)]
pub(super) struct FixedChecklistRepository {
    items: Vec<ChecklistRequirement>,
}

impl FixedChecklistRepository {
    pub(super) fn with_items(items: Vec<ChecklistRequirement>) -> Self {
        Self { items }
    }
}

impl ChecklistRepository for FixedChecklistRepository {
    fn requirements_for(
        &self,
        _owner: &DocumentOwner,
    ) -> Result<Vec<ChecklistRequirement>, RepositoryError> {
        Ok(self.items.clone())
    }
}

#[derive(Default)]
pub(super) struct InMemoryFolderRepository {
    records: Mutex<HashMap<DocumentOwner, Vec<FolderRecord>>>,
}

impl FolderRepository for InMemoryFolderRepository {
    fn folders_for(&self, owner: &DocumentOwner) -> Result<Vec<FolderRecord>, RepositoryError> {
        let guard = self.records.lock().expect("folder mutex poisoned");
        Ok(guard.get(owner).cloned().unwrap_or_default())
    }

    fn create(&self, record: FolderRecord) -> Result<FolderRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("folder mutex poisoned");
        let folders = guard.entry(record.owner.clone()).or_default();
        if folders.iter().any(|f| f.folder_key == record.folder_key) {
            return Err(RepositoryError::Conflict);
        }
        folders.push(record.clone());
        Ok(record)
    }
}

pub(super) fn filing_service(
) -> DocumentFilingService<FixedChecklistRepository, InMemoryFolderRepository> {
    DocumentFilingService::new(
        Arc::new(FixedChecklistRepository::with_items(standard_checklist())),
        Arc::new(InMemoryFolderRepository::default()),
    )
}
