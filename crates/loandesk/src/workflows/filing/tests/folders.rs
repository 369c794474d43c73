use crate::workflows::filing::catalog::folder_keys;
use crate::workflows::filing::{resolve_folder, FolderBlueprint, FolderLevel, NO_PROJECT_REASON};

#[test]
fn project_categories_resolve_to_project_folders_when_a_project_exists() {
    let resolution = resolve_folder("appraisal", true);
    assert_eq!(resolution.level, FolderLevel::Project);
    assert_eq!(resolution.folder_type, "appraisals");
    assert!(resolution.reason.is_none());
}

#[test]
fn project_categories_demote_to_miscellaneous_without_a_project() {
    let resolution = resolve_folder("appraisal", false);
    assert_eq!(resolution.level, FolderLevel::Client);
    assert_eq!(resolution.folder_type, "miscellaneous");
    assert_eq!(resolution.reason.as_deref(), Some(NO_PROJECT_REASON));
}

#[test]
fn client_categories_never_carry_a_demotion_reason() {
    let resolution = resolve_folder("identity", false);
    assert_eq!(resolution.level, FolderLevel::Client);
    assert_eq!(resolution.folder_type, "kyc");
    assert!(resolution.reason.is_none());
}

#[test]
fn alias_lookup_falls_back_to_substring_containment() {
    // Category string contains the alias.
    let resolution = resolve_folder("Plans & Planning", true);
    assert_eq!(resolution.folder_type, "plans");

    // Alias contains the category string.
    let resolution = resolve_folder("fin", true);
    assert_eq!(resolution.folder_type, "financials");
}

#[test]
fn unknown_and_empty_categories_default_to_miscellaneous() {
    for category in ["holiday photos", ""] {
        let resolution = resolve_folder(category, true);
        assert_eq!(resolution.level, FolderLevel::Client);
        assert_eq!(resolution.folder_type, folder_keys::MISCELLANEOUS);
    }
}

#[test]
fn blueprint_covers_both_levels() {
    let blueprint = FolderBlueprint::standard();

    let client = blueprint.templates_for_level(FolderLevel::Client);
    assert_eq!(client.len(), 4);
    assert!(client.iter().any(|t| t.key == folder_keys::KYC));
    assert!(client.iter().all(|t| t.level == FolderLevel::Client));

    let project = blueprint.templates_for_level(FolderLevel::Project);
    assert_eq!(project.len(), 6);
    assert!(project.iter().any(|t| t.key == folder_keys::CREDIT_SUBMISSION));
    assert!(project.iter().all(|t| t.level == FolderLevel::Project));
}
