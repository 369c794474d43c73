//! Document classification and filing for commercial lending.
//!
//! Four pure functions form the core surface: [`classify_filename`],
//! [`classify_content`], [`match_checklist`], and [`resolve_folder`]. They
//! operate on static catalog tables and caller-supplied strings only; no rule
//! match is an error, just a `None` or an empty list. [`DocumentFilingService`]
//! composes them over repository seams for callers that want one entry point,
//! and [`filing_router`] exposes that service over HTTP.

pub mod catalog;
mod checklist;
mod classifier;
pub mod domain;
mod folders;
mod import;
pub mod repository;
pub mod router;
pub mod service;

mod normalizer;

#[cfg(test)]
mod tests;

pub use checklist::match_checklist;
pub use classifier::{classify_content, classify_filename};
pub use domain::{
    ChecklistRequirement, ClassificationDecision, ClassificationHint, FilenameMatchResult,
    FolderLevel, FolderResolution, MatchTier, RequirementId,
};
pub use folders::{resolve_folder, FolderBlueprint, NO_PROJECT_REASON};
pub use import::{
    import_checklist_from_path, import_checklist_from_reader, ChecklistImportError,
};
pub use repository::{
    ChecklistRepository, DocumentOwner, FolderRecord, FolderRepository, RepositoryError,
};
pub use router::filing_router;
pub use service::{DocumentFilingService, FilingRecommendation, FilingServiceError};
