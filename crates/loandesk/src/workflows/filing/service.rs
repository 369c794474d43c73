use std::sync::Arc;

use tracing::debug;

use super::checklist::match_checklist;
use super::classifier::{classify_content, classify_filename};
use super::domain::{
    ClassificationDecision, ClassificationHint, FilenameMatchResult, FolderResolution,
    RequirementId,
};
use super::folders::{resolve_folder, FolderBlueprint};
use super::repository::{
    ChecklistRepository, DocumentOwner, FolderRecord, FolderRepository, RepositoryError,
};

/// Composite recommendation for one upload: what the document is, where it
/// should live, and which outstanding requirements it plausibly satisfies.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FilingRecommendation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub resolution: FolderResolution,
    pub confidence: f64,
    pub checklist_hints: Vec<RequirementId>,
    pub checklist_matches: Vec<FilenameMatchResult>,
}

/// Service composing the classifiers, the folder policy, and the checklist
/// matcher over caller-provided storage seams. The classifiers themselves
/// stay pure; all I/O lives behind the repository traits.
pub struct DocumentFilingService<C, F> {
    checklists: Arc<C>,
    folders: Arc<F>,
    blueprint: FolderBlueprint,
}

impl<C, F> DocumentFilingService<C, F>
where
    C: ChecklistRepository + 'static,
    F: FolderRepository + 'static,
{
    pub fn new(checklists: Arc<C>, folders: Arc<F>) -> Self {
        Self {
            checklists,
            folders,
            blueprint: FolderBlueprint::standard(),
        }
    }

    /// Classify an upload from its filename and optional extracted content,
    /// then resolve placement for the owner and score their open checklist.
    ///
    /// Filename hints win over content decisions when both exist: the
    /// filename catalog is curated for specificity, while content scores
    /// aggregate many weak signals. Checklist ids from the content decision
    /// are merged either way.
    pub fn classify_document(
        &self,
        owner: &DocumentOwner,
        file_name: &str,
        summary: Option<&str>,
        keywords: &[String],
    ) -> Result<FilingRecommendation, FilingServiceError> {
        let hint: Option<ClassificationHint> = classify_filename(file_name);
        let decision: Option<ClassificationDecision> =
            summary.and_then(|text| classify_content(text, keywords));

        let (file_type, category, confidence) = match (&hint, &decision) {
            (Some(h), Some(d)) => (
                Some(h.file_type.clone()),
                Some(h.category.clone()),
                h.confidence.max(d.confidence),
            ),
            (Some(h), None) => (Some(h.file_type.clone()), Some(h.category.clone()), h.confidence),
            (None, Some(d)) => (Some(d.file_type.clone()), Some(d.category.clone()), d.confidence),
            (None, None) => (None, None, 0.0),
        };

        let resolution = match &category {
            Some(category) => resolve_folder(category, owner.has_project_context()),
            None => resolve_folder("", owner.has_project_context()),
        };

        let checklist_hints = decision.map(|d| d.checklist_matches).unwrap_or_default();

        let items = self.checklists.requirements_for(owner)?;
        let checklist_matches = match_checklist(file_name, &items);

        debug!(
            file_name,
            file_type = file_type.as_deref().unwrap_or("unclassified"),
            folder = %resolution.folder_type,
            matches = checklist_matches.len(),
            "classified upload"
        );

        Ok(FilingRecommendation {
            file_type,
            category,
            resolution,
            confidence,
            checklist_hints,
            checklist_matches,
        })
    }

    /// Score the owner's open checklist against a filename.
    pub fn checklist_matches(
        &self,
        owner: &DocumentOwner,
        file_name: &str,
    ) -> Result<Vec<FilenameMatchResult>, FilingServiceError> {
        let items = self.checklists.requirements_for(owner)?;
        Ok(match_checklist(file_name, &items))
    }

    /// Create the starter folder set for an owner. Idempotent: when the
    /// owner already has any folders at the relevant level, nothing is
    /// created and the existing rows are returned.
    pub fn ensure_starter_folders(
        &self,
        owner: &DocumentOwner,
    ) -> Result<Vec<FolderRecord>, FilingServiceError> {
        let level = if owner.has_project_context() {
            super::domain::FolderLevel::Project
        } else {
            super::domain::FolderLevel::Client
        };

        let existing = self.folders.folders_for(owner)?;
        if existing.iter().any(|folder| folder.level == level) {
            debug!(client = %owner.client_id, "starter folders already present");
            return Ok(existing);
        }

        let mut created = Vec::new();
        for template in self.blueprint.templates_for_level(level) {
            let record = FolderRecord {
                folder_key: template.key.to_string(),
                name: template.name.to_string(),
                level: template.level,
                owner: owner.clone(),
            };
            created.push(self.folders.create(record)?);
        }

        Ok(created)
    }
}

/// Error raised by the filing service.
#[derive(Debug, thiserror::Error)]
pub enum FilingServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
