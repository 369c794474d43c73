use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for checklist requirements tracked per client/project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequirementId(pub String);

/// Whether a folder is scoped to a client (spans all their projects) or to a
/// single project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FolderLevel {
    Client,
    Project,
}

impl FolderLevel {
    pub const fn label(self) -> &'static str {
        match self {
            FolderLevel::Client => "client",
            FolderLevel::Project => "project",
        }
    }
}

/// An expected-document entry, satisfied once a matching upload is filed
/// against it. Read-only input to the checklist matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistRequirement {
    pub id: RequirementId,
    pub name: String,
    pub category: String,
    /// Document-type aliases that satisfy this requirement, e.g. a
    /// "Certified Proof of ID" entry accepting "Passport".
    #[serde(default)]
    pub matching_document_types: Vec<String>,
    /// When the lending team needs the document by. Not consulted by the
    /// matcher; carried for callers building chase lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_on: Option<NaiveDate>,
}

/// Result of classifying a bare filename against the pattern catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationHint {
    pub file_type: String,
    pub category: String,
    pub folder: String,
    pub confidence: f64,
}

/// Full classification decision derived from extracted content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationDecision {
    pub file_type: String,
    pub category: String,
    pub suggested_folder: String,
    pub target_level: FolderLevel,
    pub confidence: f64,
    pub checklist_matches: Vec<RequirementId>,
}

/// Which heuristic tier produced a checklist match. Tiers are ordered by
/// precision; each has a fixed score ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    ExactName,
    AcceptableType,
    AliasPattern,
    WordOverlap,
}

impl MatchTier {
    pub const fn ceiling(self) -> f64 {
        match self {
            MatchTier::ExactName => 0.9,
            MatchTier::AcceptableType => 0.85,
            MatchTier::AliasPattern => 0.8,
            MatchTier::WordOverlap => 0.6,
        }
    }
}

/// Scored checklist candidate for a filename, with the tier that fired so
/// reviewers can audit why a score was assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilenameMatchResult {
    pub requirement_id: RequirementId,
    pub score: f64,
    pub tier: MatchTier,
    pub reason: String,
}

/// Final placement for a document after the project-context policy runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderResolution {
    pub level: FolderLevel,
    pub folder_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
