use crate::workflows::filing::catalog::{assignment_for_type, document_type_patterns};
use crate::workflows::filing::{classify_content, classify_filename, resolve_folder, FolderLevel};

#[test]
fn filename_classification_ignores_case_and_separators() {
    for name in ["Passport_2024.PDF", "passport-2024.pdf", "PASSPORT.2024.PDF"] {
        let hint = classify_filename(name).expect("passport filename classifies");
        assert_eq!(hint.file_type, "Passport");
        assert_eq!(hint.category, "Identity");
        assert_eq!(hint.folder, "kyc");
        assert_eq!(hint.confidence, 0.85);
    }
}

#[test]
fn catalog_order_breaks_substring_ties() {
    let hint = classify_filename("Share_Charge_ABC.pdf").expect("share charge classifies");
    assert_eq!(hint.file_type, "Share Charge");

    // The shorthand trigger still works when no more specific rule applies.
    let hint = classify_filename("Executed_SHA_2024.pdf").expect("sha classifies");
    assert_eq!(hint.file_type, "Shareholders Agreement");
}

#[test]
fn specific_valuation_rules_beat_generic_triggers() {
    let hint = classify_filename("development_appraisal_final.pdf").expect("classifies");
    assert_eq!(hint.file_type, "Development Appraisal");

    let hint = classify_filename("insurance_valuation_2026.pdf").expect("classifies");
    assert_eq!(hint.file_type, "Reinstatement Cost Assessment");
    assert_eq!(hint.folder, "insurance");
}

#[test]
fn unmatched_filenames_return_none() {
    assert!(classify_filename("random_file.pdf").is_none());
    assert!(classify_filename("").is_none());
    assert!(classify_filename("___...---").is_none());
}

#[test]
fn every_catalog_rule_agrees_with_the_mapping_tables() {
    for pattern in document_type_patterns() {
        let assignment = assignment_for_type(pattern.file_type)
            .unwrap_or_else(|| panic!("missing type mapping for {}", pattern.file_type));
        assert_eq!(assignment.category, pattern.category, "{}", pattern.file_type);
        assert_eq!(assignment.folder, pattern.folder, "{}", pattern.file_type);

        for keyword in pattern.keywords {
            let hint = classify_filename(keyword)
                .unwrap_or_else(|| panic!("keyword '{keyword}' does not classify"));
            // Whichever rule won, its folder must agree with the folder the
            // resolution policy derives from the same category.
            let resolution = resolve_folder(&hint.category, true);
            assert_eq!(
                resolution.folder_type, hint.folder,
                "keyword '{keyword}' resolved inconsistently"
            );
        }
    }
}

#[test]
fn content_classification_is_idempotent() {
    let summary = "Enclosed is the red book valuation for the site at 12 King Street";
    let keywords = vec!["valuation".to_string()];

    let first = classify_content(summary, &keywords).expect("classifies");
    let second = classify_content(summary, &keywords).expect("classifies");
    assert_eq!(first, second);
}

#[test]
fn content_confidence_stays_within_bounds() {
    let summary = "red book valuation valuation report appraisal planning permission \
                   facility agreement bank statement management accounts";
    let keywords: Vec<String> =
        ["valuation", "appraisal", "accounts"].iter().map(|s| s.to_string()).collect();

    let decision = classify_content(summary, &keywords).expect("classifies");
    assert!(decision.confidence <= 0.95);
    assert!(decision.confidence >= 0.5);
}

#[test]
fn content_classifier_resolves_folder_and_checklist_hints() {
    let summary = "Enclosed is the red book valuation for the proposed security property";
    let decision = classify_content(summary, &[]).expect("classifies");

    assert_eq!(decision.file_type, "Red Book Valuation");
    assert_eq!(decision.category, "Valuation");
    assert_eq!(decision.suggested_folder, "appraisals");
    assert_eq!(decision.target_level, FolderLevel::Project);
    assert_eq!(decision.checklist_matches.len(), 1);
    assert_eq!(decision.checklist_matches[0].0, "val-red-book");
}

#[test]
fn explicit_keywords_outweigh_prose_mentions() {
    // "passport" appears once in prose for one rule and once as an explicit
    // keyword for another; the amplified explicit signal must win.
    let summary = "scan of a utility bill";
    let keywords = vec!["passport".to_string()];

    let decision = classify_content(summary, &keywords).expect("classifies");
    assert_eq!(decision.file_type, "Passport");
}

#[test]
fn content_score_ties_keep_the_first_rule() {
    // Passport (weight 10) and Management Accounts (weight 10) both hit once;
    // Passport is declared first.
    let summary = "passport and management accounts attached";
    let decision = classify_content(summary, &[]).expect("classifies");
    assert_eq!(decision.file_type, "Passport");
}

#[test]
fn content_without_signals_returns_none() {
    assert!(classify_content("", &[]).is_none());
    assert!(classify_content("meeting notes from tuesday", &[]).is_none());
    assert!(classify_content("", &["".to_string()]).is_none());
}
