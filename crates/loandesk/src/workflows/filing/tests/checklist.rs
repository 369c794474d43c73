use super::common::{requirement, standard_checklist};
use crate::workflows::filing::{match_checklist, MatchTier, RequirementId};

#[test]
fn exact_name_containment_scores_highest() {
    let items = standard_checklist();
    let results = match_checklist("Certified_Proof_of_ID_JohnSmith.pdf", &items);

    let top = results.first().expect("at least one match");
    assert_eq!(top.requirement_id, RequirementId("kyc-proof-of-id".to_string()));
    assert_eq!(top.score, 0.9);
    assert_eq!(top.tier, MatchTier::ExactName);
}

#[test]
fn exact_name_suppresses_lower_tiers() {
    // The filename also contains the acceptable type "Utility Bill", but the
    // name tier already reached its ceiling so the tier-2 check never runs.
    let items = standard_checklist();
    let results = match_checklist("Proof_of_Address_Utility_Bill.pdf", &items);

    let address = results
        .iter()
        .find(|r| r.requirement_id.0 == "kyc-proof-of-address")
        .expect("address requirement matched");
    assert_eq!(address.score, 0.9);
    assert_eq!(address.tier, MatchTier::ExactName);
}

#[test]
fn acceptable_type_beats_alias_patterns() {
    let items = standard_checklist();
    let results = match_checklist("Passport_JohnSmith.pdf", &items);

    let top = results.first().expect("passport filename matches");
    assert_eq!(top.requirement_id, RequirementId("kyc-proof-of-id".to_string()));
    assert_eq!(top.score, 0.85);
    assert_eq!(top.tier, MatchTier::AcceptableType);

    // The proof-of-address requirement must never outrank the ID requirement
    // for a passport upload.
    for other in results.iter().filter(|r| r.requirement_id.0 == "kyc-proof-of-address") {
        assert!(other.score < top.score);
    }
}

#[test]
fn alias_patterns_catch_semantic_matches() {
    let items = vec![requirement(
        "kyc-proof-of-address",
        "Proof of Address",
        "Address",
        &["Utility Bill"],
    )];
    let results = match_checklist("council_tax_2026.pdf", &items);

    let top = results.first().expect("council tax filename matches");
    assert_eq!(top.score, 0.8);
    assert_eq!(top.tier, MatchTier::AliasPattern);
    assert!(top.reason.contains("council tax"));
}

#[test]
fn word_overlap_catches_loose_filenames() {
    let items = vec![requirement("dev-budget", "Development Budget", "Monitoring", &[])];
    let results = match_checklist("budget_v3.pdf", &items);

    let top = results.first().expect("budget filename matches");
    assert_eq!(top.score, 0.6);
    assert_eq!(top.tier, MatchTier::WordOverlap);
}

#[test]
fn word_overlap_requires_two_words_for_long_names() {
    // One word of a three-word requirement name is not enough.
    let items = vec![requirement("leg-fa", "Signed Facility Agreement", "Legal", &[])];
    let results = match_checklist("draft_agreement.pdf", &items);
    assert!(results.is_empty());

    // Two overlapping words clear the bar.
    let results = match_checklist("facility_agreement_draft.pdf", &items);
    let top = results.first().expect("two-word overlap matches");
    assert_eq!(top.score, 0.6);
    assert_eq!(top.tier, MatchTier::WordOverlap);
}

#[test]
fn results_are_sorted_descending_and_positive() {
    let items = standard_checklist();
    let results = match_checklist("Passport_and_Utility_Bill_Scan.pdf", &items);

    assert!(!results.is_empty());
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for result in &results {
        assert!(result.score > 0.0);
    }
}

#[test]
fn unrelated_filenames_produce_no_strong_matches() {
    let items = standard_checklist();
    let results = match_checklist("random_document.pdf", &items);

    assert!(results.iter().all(|r| r.score < 0.8));
}

#[test]
fn empty_inputs_degrade_to_empty_results() {
    assert!(match_checklist("", &standard_checklist()).is_empty());
    assert!(match_checklist("passport.pdf", &[]).is_empty());
}
