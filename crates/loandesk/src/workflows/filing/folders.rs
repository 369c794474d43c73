//! Folder placement policy and the starter folder blueprint.

use super::catalog::{category_aliases, folder_keys, starter_folder_templates, FolderTemplate};
use super::domain::{FolderLevel, FolderResolution};
use super::normalizer::normalize_text;

/// Reason attached when a project-scoped document is demoted because the
/// caller has no project selected.
pub const NO_PROJECT_REASON: &str = "No project selected for project-level document";

/// Resolve final placement for a category label. Lookup order: exact alias
/// match, then substring containment in both directions, then the default
/// miscellaneous client bucket. When the resolved level is project-scoped
/// but no project context exists, the document is demoted to the client's
/// miscellaneous folder rather than being orphaned.
pub fn resolve_folder(category: &str, has_project_context: bool) -> FolderResolution {
    let normalized = normalize_text(category);

    let (level, folder_type) = lookup_alias(&normalized)
        .unwrap_or((FolderLevel::Client, folder_keys::MISCELLANEOUS));

    if level == FolderLevel::Project && !has_project_context {
        return FolderResolution {
            level: FolderLevel::Client,
            folder_type: folder_keys::MISCELLANEOUS.to_string(),
            reason: Some(NO_PROJECT_REASON.to_string()),
        };
    }

    FolderResolution {
        level,
        folder_type: folder_type.to_string(),
        reason: None,
    }
}

fn lookup_alias(normalized: &str) -> Option<(FolderLevel, &'static str)> {
    if normalized.is_empty() {
        return None;
    }

    for entry in category_aliases() {
        if entry.alias == normalized {
            return Some((entry.level, entry.folder_type));
        }
    }

    for entry in category_aliases() {
        if normalized.contains(entry.alias) || entry.alias.contains(normalized) {
            return Some((entry.level, entry.folder_type));
        }
    }

    None
}

/// The fixed set of folders every client or project starts with, sharing the
/// same folder-key vocabulary as the classification tables.
#[derive(Debug)]
pub struct FolderBlueprint {
    client: &'static [FolderTemplate],
    project: &'static [FolderTemplate],
}

impl FolderBlueprint {
    pub fn standard() -> Self {
        Self {
            client: starter_folder_templates(FolderLevel::Client),
            project: starter_folder_templates(FolderLevel::Project),
        }
    }

    pub fn templates_for_level(&self, level: FolderLevel) -> &'static [FolderTemplate] {
        match level {
            FolderLevel::Client => self.client,
            FolderLevel::Project => self.project,
        }
    }
}
